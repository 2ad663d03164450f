//! Error types for host operations

use thiserror::Error;

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// The kind of host resource a lookup failed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Taxonomy,
    PostType,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Taxonomy => write!(f, "taxonomy"),
            ResourceKind::PostType => write!(f, "post type"),
        }
    }
}

/// Errors that can occur at the host seam
#[derive(Debug, Error)]
pub enum HostError {
    /// Listing against a taxonomy or post type the host does not know.
    /// Propagated to the caller as a value, never a panic.
    #[error("{kind} not found: {name}")]
    NotFound { kind: ResourceKind, name: String },

    /// Option key unusable by the storage backend
    #[error("invalid option key: {key}")]
    InvalidKey { key: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl HostError {
    pub fn taxonomy_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: ResourceKind::Taxonomy,
            name: name.into(),
        }
    }

    pub fn post_type_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: ResourceKind::PostType,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = HostError::taxonomy_not_found("genre");
        assert_eq!(err.to_string(), "taxonomy not found: genre");
        let err = HostError::post_type_not_found("recipe");
        assert_eq!(err.to_string(), "post type not found: recipe");
    }
}
