//! Show command implementation

use anyhow::Result;

/// Print one resource's full profile.
pub fn show_command(id: i64) -> Result<()> {
    let client = super::api_client()?;
    let resource = client.resource_by_id(id)?.resource;

    println!("#{} {} <{}>", resource.id, resource.name, resource.email);
    println!("  {} - {} ({})", resource.title, resource.department, resource.location);
    println!(
        "  {} yrs experience, {} projects completed, expertise: {}",
        resource.experience_years, resource.projects_completed, resource.expertise_level,
    );
    println!(
        "  availability: {}  workload: {:.0}% of {:.0}",
        resource.availability, resource.current_workload, resource.max_capacity,
    );
    println!("  skills: {}", resource.skills.join(", "));
    if !resource.specializations.is_empty() {
        println!("  specializations: {}", resource.specializations.join(", "));
    }
    Ok(())
}
