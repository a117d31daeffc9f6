//! Auth command handlers (login, logout, register, whoami).

use anyhow::Result;
use shelf_core::api::ApiClient;
use shelf_core::api::types::Role;
use shelf_core::config::Config;
use shelf_core::credentials::Credentials;
use shelf_core::session::{RegisterForm, SessionStore};

/// Register command arguments.
pub struct RegisterArgs {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    let api = ApiClient::from_config(config)?;
    let store = SessionStore::new(api);

    let user = store.login(email, password).await?;
    println!(
        "Logged in as {} <{}> ({})",
        user.full_name(),
        user.email,
        user.role.label()
    );
    Ok(())
}

pub fn logout() -> Result<()> {
    Credentials::clear()?;
    println!("Logged out.");
    Ok(())
}

pub async fn register(config: &Config, args: RegisterArgs) -> Result<()> {
    let api = ApiClient::from_config(config)?;
    let store = SessionStore::new(api);

    let form = RegisterForm {
        email: args.email,
        password: args.password,
        password_confirm: args.password_confirm,
        first_name: args.first_name,
        last_name: args.last_name,
        role: args.role,
    };

    let user = store.register(&form).await?;
    println!(
        "Registration successful for {} <{}>. You can now log in.",
        user.full_name(),
        user.email
    );
    Ok(())
}

pub async fn whoami(config: &Config) -> Result<()> {
    let client = super::authenticated_client(config)?;
    let user = client.profile().await?;

    println!("{} <{}>", user.full_name(), user.email);
    println!("Role: {}", user.role.label());
    Ok(())
}
