//! Error types for the panel engine

use panelforge_host::HostError;
use panelforge_schema::SchemaError;
use thiserror::Error;

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur driving a panel end to end
#[derive(Debug, Error)]
pub enum PanelError {
    /// Render or submission against a page id the panel does not have
    #[error("page not found: {id}")]
    PageNotFound { id: String },

    /// Error from the host seam (storage, listings)
    #[error(transparent)]
    Host(#[from] HostError),

    /// Error loading the panel configuration
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
