//! Task model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work tracked by the backend, optionally assigned to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub estimated_hours: f32,
    pub deadline: NaiveDate,
    pub assigned_resource: Option<i64>,
    pub department: String,
    pub complexity: String,
}

impl Task {
    pub fn is_assigned(&self) -> bool {
        self.assigned_resource.is_some()
    }
}
