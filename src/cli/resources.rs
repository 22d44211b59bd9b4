//! Resources listing command implementation

use anyhow::Result;

use rostr::api::ResourceFilters;

/// List resources, optionally filtered.
///
/// Availability, expertise, and department filters go to the backend; the
/// skill filter is applied client-side with fuzzy matching so dictated or
/// partial names still hit.
pub fn resources_command(
    availability: Option<String>,
    skill: Option<String>,
    department: Option<String>,
) -> Result<()> {
    let client = super::api_client()?;

    let filters = ResourceFilters {
        availability,
        department,
        ..ResourceFilters::default()
    };
    let response = client.resources(&filters)?;

    let filtered: Vec<_> = response
        .resources
        .iter()
        .filter(|resource| {
            skill
                .as_deref()
                .map(|wanted| resource.has_skill(wanted))
                .unwrap_or(true)
        })
        .collect();

    if filtered.is_empty() {
        println!("No resources found.");
        return Ok(());
    }

    println!("Resources ({}):\n", filtered.len());

    for resource in filtered {
        println!(
            "  #{:<4} {:<24} {:<28} {:<14} {:>3.0}% load  {}",
            resource.id,
            resource.name,
            resource.title,
            resource.availability,
            resource.current_workload,
            resource.skills.join(", "),
        );
    }

    Ok(())
}
