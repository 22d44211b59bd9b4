//! Stats command implementation

use anyhow::Result;

/// Print the dashboard statistics.
pub fn stats_command() -> Result<()> {
    let client = super::api_client()?;
    let response = client.stats()?;
    let stats = response.stats;

    println!("Resource statistics ({})\n", client.base_url());
    println!("  Resources: {:>5} total", stats.total_resources);
    println!("             {:>5} available", stats.available_resources);
    println!("             {:>5} busy", stats.busy_resources);
    println!("  Tasks:     {:>5} total", stats.total_tasks);
    println!("             {:>5} pending", stats.pending_tasks);
    println!("             {:>5} assigned", stats.assigned_tasks);
    println!("  Average workload: {:.1}%", stats.average_workload);

    if !stats.top_skills.is_empty() {
        println!("\n  Top skills:");
        for entry in &stats.top_skills {
            println!("    {:<20} {}", entry.skill, entry.count);
        }
    }

    Ok(())
}
