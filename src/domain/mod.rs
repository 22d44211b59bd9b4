//! Core domain types shared by the GUI, CLI, and API client.

mod resource;
mod stats;
mod task;

pub use resource::{Availability, EXACT_MATCH_THRESHOLD, Resource, WorkloadBand};
pub use stats::{DashboardStats, SkillCount};
pub use task::Task;
