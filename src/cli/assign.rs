//! Assign command implementation

use anyhow::Result;

/// Assign a task to a resource.
pub fn assign_command(task_id: i64, resource_id: i64) -> Result<()> {
    let client = super::api_client()?;
    let response = client.assign_task(task_id, resource_id)?;
    let task = response.task;

    println!(
        "Assigned task #{} \"{}\" to resource #{}.",
        task.id,
        task.title,
        task.assigned_resource.unwrap_or(resource_id),
    );
    println!(
        "  priority: {}  status: {}  estimated: {:.0}h  deadline: {}",
        task.priority, task.status, task.estimated_hours, task.deadline,
    );
    Ok(())
}
