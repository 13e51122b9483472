//! Figma integration for figsync.
//!
//! - [`locator`]: Parse Figma URLs into a [`ResourceReference`]
//! - [`RemoteClient`]: The two API calls the sync pipeline needs
//! - [`FigmaClient`]: Blocking [`RemoteClient`] over the Figma REST API

mod client;
mod error;
pub mod locator;
mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT, FigmaClient};
pub use error::{FigmaError, RemoteErrorKind};
pub use locator::{ResourceReference, extract_file_id, extract_node_id};
pub use types::{
    Component, ComponentKind, ComponentMetadata, ComponentSet, DesignTokens, DocumentationLink,
    FileMetadata, ImagesResponse, Style, StyleType, TypographyToken, token_name,
};

/// Remote metadata and image-rendering service.
///
/// Implemented by [`FigmaClient`]; tests substitute in-memory fakes.
pub trait RemoteClient: Send + Sync {
    /// Fetch file metadata (components and component sets).
    ///
    /// # Errors
    ///
    /// Returns [`FigmaError::Unauthorized`], [`FigmaError::Forbidden`],
    /// [`FigmaError::NotFound`] or [`FigmaError::Api`] on non-success
    /// responses.
    fn file_metadata(&self, file_id: &str) -> Result<FileMetadata, FigmaError>;

    /// Render nodes to PNG at `scale` and return their image URLs.
    fn render_images(
        &self,
        file_id: &str,
        node_ids: &[&str],
        scale: f32,
    ) -> Result<ImagesResponse, FigmaError>;
}
