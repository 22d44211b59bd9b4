//! CLI command implementations

pub mod assign;
pub mod init;
pub mod resources;
pub mod search;
pub mod show;
pub mod stats;

use rostr::api::ApiClient;
use rostr::config::Config;

/// Build an API client from the loaded config.
pub(crate) fn api_client() -> anyhow::Result<ApiClient> {
    let config = Config::load()?;
    Ok(ApiClient::new(
        &config.settings.api.base_url,
        config.settings.api.timeout_secs,
    ))
}
