//! Response envelopes for the backend API.
//!
//! The backend wraps every payload in a `success` envelope; these mirror the
//! wire shapes exactly so the client stays a thin decode layer.

use serde::Deserialize;

use crate::domain::{DashboardStats, Resource, Task};

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceListResponse {
    pub success: bool,
    #[serde(default)]
    pub count: u32,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceResponse {
    pub success: bool,
    pub resource: Resource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    pub success: bool,
    #[serde(default)]
    pub count: u32,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignTaskResponse {
    pub success: bool,
    pub task: Task,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadUpdateResponse {
    pub success: bool,
    pub resource: Resource,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    #[serde(default)]
    pub count: u32,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub count: u32,
    pub recommendations: Vec<Resource>,
    #[serde(default)]
    pub analysis_summary: Option<String>,
    #[serde(default)]
    pub ai_powered: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: DashboardStats,
}
