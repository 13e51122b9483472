//! `figsync sync` command implementation.

use clap::Args;

use super::{ConfigArgs, build_orchestrator};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sync command.
#[derive(Args)]
pub(crate) struct SyncArgs {
    /// Figma file or design URL.
    url: String,

    /// Component name to look up (or display name for frames).
    #[arg(short, long)]
    name: Option<String>,

    /// Ignore any cached entry and render again.
    #[arg(long)]
    bust_cache: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SyncArgs {
    /// Execute the sync command, printing the result as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the sync fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(None, None)?;
        let orchestrator = build_orchestrator(&config);

        let result = orchestrator.sync(&self.url, self.name.as_deref(), self.bust_cache)?;
        if result.rendered_asset_url.is_none() {
            output.warning("No preview image could be rendered for this URL");
        }

        output.json(&serde_json::to_value(&result)?)?;
        Ok(())
    }
}
