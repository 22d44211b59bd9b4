//! Search command implementation

use anyhow::Result;

use rostr::domain::EXACT_MATCH_THRESHOLD;

/// Run an AI recommendation search and print ranked matches.
pub fn search_command(query: &str, top_k: u32) -> Result<()> {
    let client = super::api_client()?;
    let response = client.recommend(query, top_k)?;

    if response.recommendations.is_empty() {
        println!("No matches for \"{query}\".");
        return Ok(());
    }

    println!("Matches for \"{query}\" ({}):\n", response.recommendations.len());

    for resource in &response.recommendations {
        let marker = if resource.is_exact_match(EXACT_MATCH_THRESHOLD) {
            "exact"
        } else {
            "recommended"
        };
        let score = resource
            .match_percent()
            .map(|p| format!("{p:>3}%"))
            .unwrap_or_else(|| "  - ".to_string());

        println!(
            "  {score} [{marker:^11}] {} - {} ({}, {} yrs, {:.0}% load)",
            resource.name,
            resource.title,
            resource.department,
            resource.experience_years,
            resource.current_workload,
        );

        for reason in resource.recommendation_bullets() {
            println!("        - {reason}");
        }
    }

    if let Some(summary) = &response.analysis_summary {
        println!("\n{summary}");
    }

    Ok(())
}
