//! Aggregate statistics reported by the backend.

use serde::{Deserialize, Serialize};

/// One (skill, headcount) pair in the top-skills list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u32,
}

/// Dashboard summary numbers, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_resources: u32,
    pub available_resources: u32,
    pub busy_resources: u32,
    pub total_tasks: u32,
    pub pending_tasks: u32,
    pub assigned_tasks: u32,
    pub average_workload: f32,
    #[serde(default)]
    pub top_skills: Vec<SkillCount>,
}
