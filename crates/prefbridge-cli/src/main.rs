//! `prefbridge`: keeps Dolphin's INI settings and a UI preference file in sync.
//!
//! # Usage
//!
//! ```text
//! prefbridge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   import  Copy backend INI settings into the UI preference file
//!   export  Write the UI preferences back into the backend INI
//!   show    Print every catalogued UI preference
//!   set     Change one UI preference
//!
//! Options:
//!   --config    <PATH>   App config file [default: platform config dir]
//!   --backend   <PATH>   Backend INI file (overrides the config)
//!   --prefs     <PATH>   UI preference file (overrides the config)
//!   --log-level <LEVEL>  Log level (overrides the config)
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable             | Description                                   |
//! |----------------------|-----------------------------------------------|
//! | `PREFBRIDGE_CONFIG`  | Same as `--config`                            |
//! | `PREFBRIDGE_BACKEND` | Same as `--backend`                           |
//! | `PREFBRIDGE_PREFS`   | Same as `--prefs`                             |
//! | `PREFBRIDGE_LOG`     | `tracing` filter directive, wins over all     |
//! | `RUST_LOG`           | Used when `PREFBRIDGE_LOG` is not set         |
//!
//! Logs go to stderr so `show --json` output stays machine-readable.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prefbridge_cli::application::preferences;
use prefbridge_cli::application::sync_settings::{SyncDirection, SyncSettingsUseCase};
use prefbridge_cli::infrastructure::storage::config::{self, AppConfig, ConfigError};
use prefbridge_cli::infrastructure::storage::{IniFileStore, PreferenceFile};
use prefbridge_core::PreferenceCatalog;

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "prefbridge",
    about = "Sync Dolphin INI settings with a flat UI preference file",
    version
)]
struct Cli {
    /// App config file.
    #[arg(long, global = true, env = "PREFBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Backend INI file.
    #[arg(long, global = true, env = "PREFBRIDGE_BACKEND")]
    backend: Option<PathBuf>,

    /// UI preference file.
    #[arg(long, global = true, env = "PREFBRIDGE_PREFS")]
    prefs: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copy backend INI settings into the UI preference file.
    Import,
    /// Write the UI preferences back into the backend INI.
    Export,
    /// Print every catalogued UI preference with the value export would use.
    Show {
        /// Print a JSON object instead of `name = value` lines.
        #[arg(long)]
        json: bool,
    },
    /// Change one UI preference.
    Set {
        /// Catalogued preference name, e.g. `efbCopyMethod`.
        name: String,
        /// New value: `true`/`false` for flags, a label for choices.
        value: String,
    },
}

impl Cli {
    /// Loads the app config and applies the command-line overrides.
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => match config::load_config() {
                Ok(cfg) => cfg,
                Err(ConfigError::NoPlatformConfigDir) => AppConfig::default(),
                Err(e) => return Err(e).context("failed to load platform config"),
            },
        };

        if let Some(path) = &self.backend {
            cfg.paths.backend_ini = path.clone();
        }
        if let Some(path) = &self.prefs {
            cfg.paths.preferences = path.clone();
        }
        if let Some(level) = &self.log_level {
            cfg.logging.level = level.clone();
        }
        Ok(cfg)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;

    // PREFBRIDGE_LOG, then RUST_LOG, then the configured level.
    let filter = EnvFilter::try_from_env("PREFBRIDGE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        backend = %cfg.paths.backend_ini.display(),
        prefs = %cfg.paths.preferences.display(),
        "resolved store paths"
    );

    match cli.command {
        Command::Import => sync(&cfg, SyncDirection::Import),
        Command::Export => sync(&cfg, SyncDirection::Export),
        Command::Show { json } => show(&cfg, json),
        Command::Set { name, value } => set(&cfg, &name, &value),
    }
}

fn sync(cfg: &AppConfig, direction: SyncDirection) -> anyhow::Result<()> {
    let mut backend =
        IniFileStore::open(&cfg.paths.backend_ini).context("failed to open backend config")?;
    let mut prefs =
        PreferenceFile::open(&cfg.paths.preferences).context("failed to open preferences")?;

    let summary = SyncSettingsUseCase::default()
        .run(direction, &mut backend, &mut prefs)
        .with_context(|| format!("{direction} failed"))?;

    println!(
        "{direction}: wrote {} value(s) to {}",
        summary.written, summary.target
    );
    if !summary.unmatched.is_empty() {
        println!("left unchanged: {}", summary.unmatched.join(", "));
    }
    Ok(())
}

fn show(cfg: &AppConfig, json: bool) -> anyhow::Result<()> {
    let prefs =
        PreferenceFile::open(&cfg.paths.preferences).context("failed to open preferences")?;
    let catalog = PreferenceCatalog::new();

    if json {
        let value = preferences::render_json(&catalog, &prefs);
        let rendered =
            serde_json::to_string_pretty(&value).context("failed to render preferences as JSON")?;
        println!("{rendered}");
    } else {
        print!("{}", preferences::render_text(&catalog, &prefs));
    }
    Ok(())
}

fn set(cfg: &AppConfig, name: &str, raw: &str) -> anyhow::Result<()> {
    let mut prefs =
        PreferenceFile::open(&cfg.paths.preferences).context("failed to open preferences")?;
    let catalog = PreferenceCatalog::new();

    let (name, value) = preferences::apply_edit(&catalog, &mut prefs, name, raw)?;
    prefs
        .save()
        .with_context(|| format!("failed to save {}", prefs.path().display()))?;

    info!(pref = name, %value, "preference saved");
    println!("{name} = {value}");
    Ok(())
}
