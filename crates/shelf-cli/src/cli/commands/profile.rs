//! Profile command handlers.

use anyhow::Result;
use shelf_core::api::types::ProfileUpdate;
use shelf_core::config::Config;
use shelf_core::credentials::Credentials;

pub async fn update(
    config: &Config,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let update = ProfileUpdate {
        email,
        first_name,
        last_name,
    };
    if update.is_empty() {
        anyhow::bail!("Nothing to update: pass --email, --first-name, or --last-name.");
    }

    let client = super::authenticated_client(config)?;
    let user = client.update_profile(&update).await?;

    // Keep the stored user snapshot in sync with the server.
    if let Ok(Some(mut credentials)) = Credentials::load() {
        credentials.user = user.clone();
        let _ = credentials.save();
    }

    println!("Profile updated: {} <{}>", user.full_name(), user.email);
    Ok(())
}

pub async fn change_password(config: &Config, old: &str, new: &str) -> Result<()> {
    if new.is_empty() {
        anyhow::bail!("New password must not be empty.");
    }

    let client = super::authenticated_client(config)?;
    client.change_password(old, new).await?;

    println!("Password changed.");
    Ok(())
}
