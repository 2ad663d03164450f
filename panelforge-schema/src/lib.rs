//! Declarative settings-panel model
//!
//! `panelforge-schema` is a standalone, schema-only crate that describes
//! settings panels: pages made of sections made of fields. It knows nothing
//! about HTML or about any particular host platform — rendering lives in
//! `panelforge-render`, host integration in `panelforge-host`.
//!
//! # Architecture
//!
//! - **Schema-only**: owns the panel description and value-resolution rules,
//!   not stored values
//! - **Closed field set**: field kinds are a tagged enum, one variant per
//!   renderer; unknown tags parse to [`FieldKind::Unsupported`] instead of
//!   failing the whole configuration
//! - **Read-only after construction**: a [`PanelConfig`] is built once (in
//!   code or from YAML) and never mutated
//! - **Diagnostics, not rejection**: [`PanelConfig::validate`] reports
//!   duplicate or empty identifiers; construction never fails on them

pub mod config;
pub mod error;
pub mod types;
pub mod value;

pub use config::{ConfigIssue, MenuConfig, MenuLocation, PanelConfig, RequiredComponent};
pub use error::{Result, SchemaError};
pub use types::{Choice, ChoiceSource, Field, FieldKind, Page, Section};
pub use value::{resolve_value, OptionValue};
