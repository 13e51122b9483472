//! `figsync cache` subcommands.

use clap::{Args, Subcommand};

use super::{ConfigArgs, build_orchestrator};
use crate::error::CliError;
use crate::output::Output;

/// Cache maintenance commands.
#[derive(Subcommand)]
pub(crate) enum CacheCommand {
    /// Show cache entry count, size and oldest entry.
    Stats(CacheArgs),
    /// Delete every cache entry.
    Clear(CacheArgs),
}

/// Arguments for the cache subcommands.
#[derive(Args)]
pub(crate) struct CacheArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CacheCommand {
    /// Execute the cache subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        match self {
            Self::Stats(args) => {
                let config = args.config.load(None, None)?;
                if !config.cache_resolved.enabled {
                    output.warning("Cache is disabled");
                }
                let stats = build_orchestrator(&config).cache_stats();
                output.info(&format!("Cache directory: {}", config.cache_resolved.dir.display()));
                output.info(&format!("Entries: {}", stats.file_count));
                output.info(&format!("Total size: {} bytes", stats.total_bytes));
                output.info(&format!(
                    "Oldest entry: {}",
                    stats.oldest_entry_id.as_deref().unwrap_or("-")
                ));
            }
            Self::Clear(args) => {
                let config = args.config.load(None, None)?;
                let cleared = build_orchestrator(&config).clear_cache();
                output.success(&format!("Cleared {cleared} cache entries"));
            }
        }

        Ok(())
    }
}
