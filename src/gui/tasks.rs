//! Background request plumbing.
//!
//! Every backend call runs on its own worker thread and reports through an
//! mpsc channel the app drains each frame. ureq is blocking, so this is the
//! whole concurrency story: spawn, send once, hang up.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::api::ApiClient;
use crate::domain::{DashboardStats, Resource, Task};

/// What the search box should fetch.
#[derive(Debug, Clone)]
pub enum SearchKind {
    /// AI-ranked recommendations for a free-form query
    Recommend { query: String, top_k: u32 },
    /// Unranked full listing ("Show All")
    All,
}

/// Everything the dashboard view needs, fetched together.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub resources: Vec<Resource>,
    pub tasks: Vec<Task>,
}

pub fn spawn_search(client: ApiClient, kind: SearchKind) -> Receiver<Result<Vec<Resource>, String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = match kind {
            SearchKind::Recommend { query, top_k } => client
                .recommend(&query, top_k)
                .map(|response| response.recommendations)
                .map_err(|e| e.to_string()),
            SearchKind::All => client
                .resources(&Default::default())
                .map(|response| response.resources)
                .map_err(|e| e.to_string()),
        };
        let _ = tx.send(result);
    });
    rx
}

pub fn spawn_dashboard_fetch(client: ApiClient) -> Receiver<Result<DashboardData, String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = (|| {
            let stats = client.stats().map_err(|e| e.to_string())?.stats;
            let resources = client
                .resources(&Default::default())
                .map_err(|e| e.to_string())?
                .resources;
            let tasks = client.tasks(None, None).map_err(|e| e.to_string())?.tasks;
            Ok(DashboardData {
                stats,
                resources,
                tasks,
            })
        })();
        let _ = tx.send(result);
    });
    rx
}

pub fn spawn_workload_update(
    client: ApiClient,
    resource_id: i64,
    hours: f32,
) -> Receiver<Result<(Resource, Option<String>), String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = client
            .update_workload(resource_id, hours)
            .map(|response| (response.resource, response.message))
            .map_err(|e| e.to_string());
        let _ = tx.send(result);
    });
    rx
}

pub fn spawn_health_check(client: ApiClient) -> Receiver<bool> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.health().is_ok());
    });
    rx
}
