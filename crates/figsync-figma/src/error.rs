//! Error types for the Figma API client.

use std::fmt;

/// Error from Figma API operations.
#[derive(Debug, thiserror::Error)]
pub enum FigmaError {
    /// No access token configured.
    #[error(
        "Figma access token is required: set FIGMA_ACCESS_TOKEN or figma.access_token \
         (see https://www.figma.com/developers/api#access-tokens)"
    )]
    MissingToken,

    /// Token rejected (HTTP 401).
    #[error("Invalid Figma access token")]
    Unauthorized,

    /// Token lacks access to the file (HTTP 403).
    #[error("Access denied: the Figma token lacks permission for this file")]
    Forbidden,

    /// File or node does not exist or is not shared (HTTP 404).
    #[error("Figma file not found: check the URL and that the file is accessible")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("Figma API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Transport failure or undecodable response.
    #[error("HTTP request failed")]
    Http(#[from] ureq::Error),
}

impl FigmaError {
    /// Map a non-success HTTP status to an error.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Api { status, body },
        }
    }

    /// Coarse classification kept for diagnostic display.
    #[must_use]
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::Unauthorized => RemoteErrorKind::Unauthorized,
            Self::Forbidden => RemoteErrorKind::Forbidden,
            Self::NotFound => RemoteErrorKind::NotFound,
            Self::MissingToken | Self::Api { .. } | Self::Http(_) => RemoteErrorKind::Generic,
        }
    }
}

/// Remote failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// Everything else.
    Generic,
}

impl RemoteErrorKind {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Generic => "remote_error",
        }
    }
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            FigmaError::from_status(401, String::new()),
            FigmaError::Unauthorized
        ));
        assert!(matches!(
            FigmaError::from_status(403, String::new()),
            FigmaError::Forbidden
        ));
        assert!(matches!(
            FigmaError::from_status(404, String::new()),
            FigmaError::NotFound
        ));
        let err = FigmaError::from_status(500, "boom".to_owned());
        assert!(matches!(err, FigmaError::Api { status: 500, .. }));
        assert_eq!(err.to_string(), "Figma API error: 500 - boom");
    }

    #[test]
    fn test_kind_preserved() {
        assert_eq!(FigmaError::Forbidden.kind(), RemoteErrorKind::Forbidden);
        assert_eq!(FigmaError::MissingToken.kind(), RemoteErrorKind::Generic);
        assert_eq!(RemoteErrorKind::NotFound.to_string(), "not_found");
    }
}
