//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use shelf_core::api::types::Role;
use shelf_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(version)]
#[command(about = "Terminal client for a merchandising API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (or set SHELF_PASSWORD)
        #[arg(long, env = "SHELF_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out (clear the persisted session token)
    Logout,

    /// Create an account (does not log in)
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        password_confirm: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Role (MERCHANDISER, SUPERVISOR, ADMIN)
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Show the logged-in user's profile
    Whoami,

    /// Manage the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage products
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ProfileCommands {
    /// Show the profile (same as whoami)
    Show,
    /// Update profile fields
    Update {
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Change the account password
    ChangePassword {
        /// Current password
        #[arg(long)]
        old: String,
        /// New password
        #[arg(long)]
        new: String,
    },
}

#[derive(clap::Subcommand)]
enum ProductCommands {
    /// List products
    List {
        /// Free-text search (name, description, SKU, barcode)
        #[arg(long)]
        search: Option<String>,
        /// Exact SKU filter
        #[arg(long)]
        sku: Option<String>,
        /// Sort order: name, price, created_at (prefix '-' for descending)
        #[arg(long)]
        ordering: Option<String>,
    },
    /// Show a single product
    Show {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        sku: String,
        /// Decimal price, e.g. "1.95"
        #[arg(long)]
        price: String,
        #[arg(long, default_value_t = 0)]
        stock_quantity: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        barcode: Option<String>,
    },
    /// Update a product
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sku: String,
        /// Decimal price, e.g. "1.95"
        #[arg(long)]
        price: String,
        #[arg(long, default_value_t = 0)]
        stock_quantity: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        barcode: Option<String>,
    },
    /// Delete a product
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Persist the API base URL to the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

fn parse_role(value: &str) -> std::result::Result<Role, String> {
    Role::parse(value).ok_or_else(|| format!("unknown role '{value}' (expected MERCHANDISER, SUPERVISOR, or ADMIN)"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI logs to a file so the alternate screen stays clean;
    // one-shot commands log to stderr.
    let _log_guard = if cli.command.is_none() {
        init_file_logging()
    } else {
        init_stderr_logging();
        None
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir).ok()?;
    let appender = tracing_appender::rolling::daily(logs_dir, "shelf.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(base_url) = cli.base_url.as_deref() {
        let trimmed = base_url.trim();
        if !trimmed.is_empty() {
            config.base_url = trimmed.to_string();
        }
    }

    // default to the interactive client
    let Some(command) = cli.command else {
        #[cfg(feature = "tui")]
        return shelf_tui::run(&config).await;

        #[cfg(not(feature = "tui"))]
        anyhow::bail!("This build has no interactive client; use a subcommand.");
    };

    match command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, &password).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Register {
            email,
            password,
            password_confirm,
            first_name,
            last_name,
            role,
        } => {
            commands::auth::register(
                &config,
                commands::auth::RegisterArgs {
                    email,
                    password,
                    password_confirm,
                    first_name,
                    last_name,
                    role: role.unwrap_or(config.default_role),
                },
            )
            .await
        }
        Commands::Whoami => commands::auth::whoami(&config).await,

        Commands::Profile { command } => match command {
            ProfileCommands::Show => commands::auth::whoami(&config).await,
            ProfileCommands::Update {
                email,
                first_name,
                last_name,
            } => commands::profile::update(&config, email, first_name, last_name).await,
            ProfileCommands::ChangePassword { old, new } => {
                commands::profile::change_password(&config, &old, &new).await
            }
        },

        Commands::Products { command } => match command {
            ProductCommands::List {
                search,
                sku,
                ordering,
            } => commands::products::list(&config, search, sku, ordering).await,
            ProductCommands::Show { id } => commands::products::show(&config, id).await,
            ProductCommands::Create {
                name,
                sku,
                price,
                stock_quantity,
                description,
                barcode,
            } => {
                commands::products::create(
                    &config,
                    commands::products::ProductArgs {
                        name,
                        sku,
                        price,
                        stock_quantity,
                        description,
                        barcode,
                    },
                )
                .await
            }
            ProductCommands::Update {
                id,
                name,
                sku,
                price,
                stock_quantity,
                description,
                barcode,
            } => {
                commands::products::update(
                    &config,
                    id,
                    commands::products::ProductArgs {
                        name,
                        sku,
                        price,
                        stock_quantity,
                        description,
                        barcode,
                    },
                )
                .await
            }
            ProductCommands::Delete { id } => commands::products::delete(&config, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
