//! Node id encodings tried when requesting a render.
//!
//! URLs carry node ids as `12-34` while the image API keys them as `12:34`,
//! and links copied from different Figma clients are not consistent. Rather
//! than guessing, the renderer is asked with each candidate in order.

/// One textual transform of a node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdEncoding {
    /// The id exactly as extracted from the URL.
    AsExtracted,
    /// `-` replaced by `:`.
    DashesToColons,
    /// `:` replaced by `-`.
    ColonsToDashes,
}

impl NodeIdEncoding {
    /// Transforms in the order they are tried.
    pub const ORDER: [Self; 3] = [Self::AsExtracted, Self::DashesToColons, Self::ColonsToDashes];

    /// Apply the transform.
    #[must_use]
    pub fn apply(self, node_id: &str) -> String {
        match self {
            Self::AsExtracted => node_id.to_owned(),
            Self::DashesToColons => node_id.replace('-', ":"),
            Self::ColonsToDashes => node_id.replace(':', "-"),
        }
    }

    /// Distinct candidate ids for `node_id`, in [`Self::ORDER`].
    #[must_use]
    pub fn candidates(node_id: &str) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::with_capacity(Self::ORDER.len());
        for encoding in Self::ORDER {
            let candidate = encoding.apply(node_id);
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates
    }
}
