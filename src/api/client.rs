//! Typed ureq client for the resource backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::types::{
    AssignTaskResponse, HealthResponse, RecommendResponse, ResourceListResponse, ResourceResponse,
    SearchResponse, StatsResponse, TaskListResponse, WorkloadUpdateResponse,
};

/// Production backend, used when neither config nor environment override it.
pub const DEFAULT_API_URL: &str = "https://resource-search-backend.onrender.com/api";

/// Filters accepted by `GET /resources`.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilters {
    pub availability: Option<String>,
    pub skill: Option<String>,
    pub expertise_level: Option<String>,
    pub department: Option<String>,
}

/// Blocking HTTP client for the backend API.
///
/// Cheap to clone; callers run requests on worker threads and report results
/// back over channels.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing slash) with a request
    /// timeout in seconds.
    ///
    /// The `ROSTR_API_URL` environment variable overrides `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let base_url = std::env::var("ROSTR_API_URL").unwrap_or_else(|_| base_url.to_string());
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("rostr/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get("/health", &[])
    }

    pub fn resources(&self, filters: &ResourceFilters) -> Result<ResourceListResponse, ApiError> {
        let mut query = Vec::new();
        if let Some(value) = &filters.availability {
            query.push(("availability", value.as_str()));
        }
        if let Some(value) = &filters.skill {
            query.push(("skill", value.as_str()));
        }
        if let Some(value) = &filters.expertise_level {
            query.push(("expertise_level", value.as_str()));
        }
        if let Some(value) = &filters.department {
            query.push(("department", value.as_str()));
        }
        self.get("/resources", &query)
    }

    pub fn resource_by_id(&self, id: i64) -> Result<ResourceResponse, ApiError> {
        self.get(&format!("/resources/{id}"), &[])
    }

    /// Add `hours` of workload to a resource. The backend converts hours to
    /// a capacity percentage and returns the updated resource.
    pub fn update_workload(&self, id: i64, hours: f32) -> Result<WorkloadUpdateResponse, ApiError> {
        self.post(
            &format!("/resources/{id}/workload"),
            serde_json::json!({ "hours": hours }),
        )
    }

    pub fn tasks(
        &self,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> Result<TaskListResponse, ApiError> {
        let mut query = Vec::new();
        if let Some(value) = status {
            query.push(("status", value));
        }
        if let Some(value) = priority {
            query.push(("priority", value));
        }
        self.get("/tasks", &query)
    }

    pub fn assign_task(&self, task_id: i64, resource_id: i64) -> Result<AssignTaskResponse, ApiError> {
        self.post(
            &format!("/tasks/{task_id}/assign"),
            serde_json::json!({ "resource_id": resource_id }),
        )
    }

    pub fn search(&self, query: &str, top_k: u32) -> Result<SearchResponse, ApiError> {
        self.post(
            "/search",
            serde_json::json!({ "query": query, "top_k": top_k }),
        )
    }

    /// AI-ranked recommendations for a free-form description. This is the
    /// endpoint behind the search box; `/search` is the keyword fallback.
    pub fn recommend(&self, description: &str, top_k: u32) -> Result<RecommendResponse, ApiError> {
        self.post(
            "/recommend",
            serde_json::json!({
                "task_description": description,
                "top_k": top_k,
                "use_ai": true,
            }),
        )
    }

    pub fn stats(&self) -> Result<StatsResponse, ApiError> {
        self.get("/stats", &[])
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {url}");
        let mut request = self.agent.get(&url);
        for (key, value) in query {
            request = request.query(key, value);
        }
        Self::decode(request.call())
    }

    fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: serde_json::Value,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {url}");
        Self::decode(self.agent.post(&url).send_json(payload))
    }

    fn decode<T: DeserializeOwned>(
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<T, ApiError> {
        match result {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                Ok(serde_json::from_str(&body)?)
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ApiError::from_status(code, &body))
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ApiError::Transport(transport.to_string()))
            }
        }
    }
}
