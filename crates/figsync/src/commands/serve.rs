//! `figsync serve` command implementation.

use clap::Args;
use figsync_server::{run_server, server_config_from_config};

use super::{ConfigArgs, build_orchestrator};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(self.host, self.port)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        if config.cache_resolved.enabled {
            output.info(&format!(
                "Cache directory: {} (entries expire after {} days)",
                config.cache_resolved.dir.display(),
                config.cache_resolved.expiration_days
            ));
        } else {
            output.info("Cache: disabled");
        }
        if config.figma.access_token.is_empty() {
            output.warning("Figma access token not set: sync requests will fail");
        }

        let orchestrator = build_orchestrator(&config);
        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config, orchestrator)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
