//! CLI command implementations.

pub(crate) mod cache;
pub(crate) mod serve;
pub(crate) mod sync;

pub(crate) use cache::CacheCommand;
pub(crate) use serve::ServeArgs;
pub(crate) use sync::SyncArgs;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use figsync_cache::{FileStore, KvStore, NullStore, SyncCache};
use figsync_config::{CliSettings, Config};
use figsync_core::SyncOrchestrator;
use figsync_figma::FigmaClient;

use crate::error::CliError;

/// Configuration options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover figsync.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Figma personal access token (overrides config).
    #[arg(long, env = "FIGMA_ACCESS_TOKEN", hide_env_values = true)]
    figma_token: Option<String>,

    /// Cache directory (overrides config).
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Enable caching (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable caching.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,
}

impl ConfigArgs {
    /// Load configuration with these options and the given server overrides.
    pub(crate) fn load(self, host: Option<String>, port: Option<u16>) -> Result<Config, CliError> {
        // Resolve flags before moving into CliSettings
        let cache_enabled = self.resolve_cache_enabled();

        let cli_settings = CliSettings {
            host,
            port,
            access_token: self.figma_token.filter(|t| !t.is_empty()),
            cache_enabled,
            cache_dir: self.cache_dir,
        };

        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Resolve `cache_enabled` from --cache/--no-cache flags.
    fn resolve_cache_enabled(&self) -> Option<bool> {
        self.no_cache.then_some(false).or(self.cache)
    }
}

/// Build the sync pipeline described by `config`.
///
/// A cache directory that cannot be prepared is logged and left to the
/// store, which treats every failed read or write as a miss.
pub(crate) fn build_orchestrator(config: &Config) -> SyncOrchestrator {
    let client = FigmaClient::from_config(
        &config.figma.api_url,
        &config.figma.access_token,
        config.figma.timeout(),
    );

    let store: Arc<dyn KvStore> = if config.cache_resolved.enabled {
        if let Err(e) = ensure_cache_dir(&config.cache_resolved.dir) {
            tracing::warn!(
                dir = %config.cache_resolved.dir.display(),
                "failed to prepare cache directory: {e}"
            );
        }
        Arc::new(FileStore::new(config.cache_resolved.dir.clone()))
    } else {
        Arc::new(NullStore)
    };
    let cache = SyncCache::new(store, config.cache_resolved.expiration());

    SyncOrchestrator::new(Arc::new(client), cache).with_scale(config.figma.scale)
}

/// Ensure the cache directory exists with a `.gitignore`.
fn ensure_cache_dir(cache_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(cache_dir)?;

    let gitignore_path = cache_dir.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "# Automatically created by figsync\n*\n")?;
    }

    Ok(())
}
