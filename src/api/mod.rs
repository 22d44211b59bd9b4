//! HTTP client for the resource-assignment backend.
//!
//! All matching, ranking, and workload accounting happens server-side; this
//! module only issues typed requests and normalizes failures into messages
//! the UI can show directly.

mod client;
mod error;
mod types;

pub use client::{ApiClient, DEFAULT_API_URL, ResourceFilters};
pub use error::ApiError;
pub use types::{
    AssignTaskResponse, HealthResponse, RecommendResponse, ResourceListResponse,
    ResourceResponse, SearchResponse, StatsResponse, TaskListResponse, WorkloadUpdateResponse,
};
