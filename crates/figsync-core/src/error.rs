//! Sync error types.

use figsync_figma::FigmaError;

/// Terminal failure of a sync request.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The URL has no `/file/<id>` or `/design/<id>` segment.
    #[error("Invalid Figma URL: could not extract file key from {0}")]
    InvalidUrl(String),

    /// No node id in the URL and the file has no components.
    #[error("No node ID provided and no components found in Figma file {file_id}")]
    NoComponentFound {
        /// File that was searched.
        file_id: String,
    },

    /// Fetching file metadata failed.
    #[error(transparent)]
    Remote(#[from] FigmaError),
}
