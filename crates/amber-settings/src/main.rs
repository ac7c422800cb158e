//! AmberDay settings client — command-line entry point.
//!
//! Talks to the AmberDay backend's settings service through the same
//! [`BackupPathStore`] a UI would use, which makes it handy for checking a
//! deployment from a terminal.
//!
//! # Usage
//!
//! ```text
//! amber-settings [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show         Load and print the configured backup path
//!   select       Open the service's folder picker and print the chosen path
//!   backups      List backup history (optionally for one anchor)
//!   init-config  Write a default configuration file
//!
//! Options:
//!   --base-url <URL>        Settings service base URL
//!   --config <PATH>         Configuration file to read
//!   --timeout-secs <SECS>   Whole-request timeout (0 disables)
//! ```
//!
//! # Precedence
//!
//! CLI flag > environment variable > configuration file > built-in default.
//!
//! | Variable                     | Default                 |
//! |------------------------------|-------------------------|
//! | `AMBER_API_BASE_URL`         | `http://localhost:8000` |
//! | `AMBER_CONFIG`               | platform config file    |
//! | `AMBER_REQUEST_TIMEOUT_SECS` | none                    |
//! | `RUST_LOG`                   | file's `log_level`      |

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use amber_settings::application::backup_history::BackupHistory;
use amber_settings::application::backup_path_store::BackupPathStore;
use amber_settings::infrastructure::http::HttpSettingsService;
use amber_settings::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, FileConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// AmberDay settings client.
#[derive(Debug, Parser)]
#[command(
    name = "amber-settings",
    about = "Inspect and change the AmberDay backup destination",
    version
)]
struct Cli {
    /// Base URL of the settings service (e.g. `http://localhost:8000`).
    #[arg(long, env = "AMBER_API_BASE_URL")]
    base_url: Option<String>,

    /// Configuration file to read instead of the platform default.
    #[arg(long, env = "AMBER_CONFIG")]
    config: Option<PathBuf>,

    /// Whole-request timeout in seconds; `0` disables the timeout.
    #[arg(long, env = "AMBER_REQUEST_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and print the configured backup path.
    Show,
    /// Ask the service to open its folder picker and persist the choice.
    Select,
    /// List backup history.
    Backups {
        /// Only list backups of this anchor.
        #[arg(long)]
        anchor: Option<i64>,
    },
    /// Write a default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => config_file_path().ok(),
    };
    let file_config = match &config_path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?,
        None => FileConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&file_config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if config_path.is_none() {
        warn!("no platform config directory; using built-in defaults");
    }

    let overrides = Overrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
    };

    match cli.command {
        Command::Show => {
            let store = BackupPathStore::new(build_service(&file_config, overrides)?);
            let path = store
                .load_backup_path()
                .await
                .context("loading backup path")?;
            print_path(&path);
        }
        Command::Select => {
            let store = BackupPathStore::new(build_service(&file_config, overrides)?);
            info!("waiting for the folder picker to close");
            let path = store
                .select_backup_path()
                .await
                .context("selecting backup path")?;
            if path.is_empty() {
                println!("selection cancelled; backup path is now unset");
            } else {
                print_path(&path);
            }
        }
        Command::Backups { anchor } => {
            let history = BackupHistory::new(build_service(&file_config, overrides)?);
            let records = match anchor {
                Some(id) => history.for_anchor(id).await,
                None => history.all().await,
            }
            .context("listing backups")?;

            if records.is_empty() {
                println!("no backups recorded");
            }
            for rec in records {
                println!(
                    "#{}\t{}\t{}\t{}",
                    rec.id, rec.backup_time, rec.file_anchor_name, rec.backup_path
                );
            }
        }
        Command::InitConfig { force } => {
            let path = config_path.context("no configuration path; pass --config")?;
            init_config(path, force)?;
        }
    }

    Ok(())
}

/// Connection settings given on the command line or through the environment.
struct Overrides {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

fn build_service(
    file_config: &FileConfig,
    overrides: Overrides,
) -> anyhow::Result<Arc<HttpSettingsService>> {
    let mut client_config = file_config.client_config();
    if let Some(base_url) = overrides.base_url {
        client_config.base_url = base_url;
    }
    if let Some(secs) = overrides.timeout_secs {
        client_config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    info!(base_url = %client_config.base_url, "using settings service");

    let service = HttpSettingsService::new(&client_config).context("building HTTP client")?;
    Ok(Arc::new(service))
}

fn print_path(path: &str) {
    if path.is_empty() {
        println!("backup path not configured");
    } else {
        println!("{path}");
    }
}

fn init_config(path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("{} already exists (use --force to overwrite)", path.display());
        return Ok(());
    }
    save_config_to(&path, &FileConfig::default())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
