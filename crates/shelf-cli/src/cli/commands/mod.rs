//! Command handlers.

use anyhow::{Context, Result};
use shelf_core::api::ApiClient;
use shelf_core::config::Config;
use shelf_core::credentials::Credentials;

pub mod auth;
pub mod config;
pub mod products;
pub mod profile;

/// Builds an API client carrying the persisted session token.
///
/// Fails with a friendly message when no session is stored.
pub fn authenticated_client(config: &Config) -> Result<ApiClient> {
    let credentials = Credentials::load()
        .context("read stored credentials")?
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Run `shelf login` first."))?;

    let client = ApiClient::from_config(config)?;
    client.set_token(&credentials.token);
    Ok(client)
}
