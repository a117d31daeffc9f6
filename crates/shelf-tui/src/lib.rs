//! Full-screen TUI implementation for Shelf.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use runtime::TuiRuntime;
use shelf_core::api::ApiClient;
use shelf_core::config::Config;
use shelf_core::session::SessionStore;

/// Runs the interactive client.
///
/// Builds the API client and session store from config, takes over the
/// terminal, and blocks until the user quits.
pub async fn run(config: &Config) -> Result<()> {
    // The TUI requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `shelf products list` or other subcommands for scripting."
        );
    }

    let api = ApiClient::from_config(config)?;
    let store = Arc::new(SessionStore::new(api));

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Shelf")?;
    writeln!(err, "API: {}", config.base_url)?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), store)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
