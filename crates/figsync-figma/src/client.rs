//! Figma REST API client.
//!
//! Blocking HTTP client authenticated with a personal access token sent in
//! the `X-Figma-Token` header.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::RemoteClient;
use crate::error::FigmaError;
use crate::types::{FileMetadata, ImagesResponse};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.figma.com/v1";

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Figma REST API client.
pub struct FigmaClient {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl FigmaClient {
    /// Create a client from config values.
    ///
    /// An empty `access_token` is accepted here; every request then fails with
    /// [`FigmaError::MissingToken`].
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g. [`DEFAULT_API_URL`])
    /// * `access_token` - Personal access token
    /// * `timeout` - Global per-request timeout
    #[must_use]
    pub fn from_config(base_url: &str, access_token: &str, timeout: Duration) -> Self {
        if access_token.is_empty() {
            tracing::warn!("Figma access token not configured; sync requests will fail");
        }

        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            access_token: access_token.to_owned(),
        }
    }

    /// Issue an authenticated GET and decode the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FigmaError> {
        if self.access_token.is_empty() {
            return Err(FigmaError::MissingToken);
        }

        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "Figma API request");

        let mut request = self
            .agent
            .get(&url)
            .header("X-Figma-Token", &self.access_token)
            .header("Accept", "application/json");
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        let response = request.call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FigmaError::from_status(status, error_body));
        }

        Ok(body_reader.read_json()?)
    }
}

impl RemoteClient for FigmaClient {
    fn file_metadata(&self, file_id: &str) -> Result<FileMetadata, FigmaError> {
        self.get_json(&format!("/files/{file_id}"), &[])
    }

    fn render_images(
        &self,
        file_id: &str,
        node_ids: &[&str],
        scale: f32,
    ) -> Result<ImagesResponse, FigmaError> {
        let ids = node_ids.join(",");
        let scale = scale.to_string();
        self.get_json(
            &format!("/images/{file_id}"),
            &[("ids", &ids), ("format", "png"), ("scale", &scale)],
        )
    }
}
