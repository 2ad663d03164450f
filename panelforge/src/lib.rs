//! Declarative settings-panel generator
//!
//! Describe admin pages, sections, and fields once; `panelforge` renders
//! the HTML form controls, resolves current values (persisted → explicit →
//! default → fallback), and pushes submitted values back through the host
//! platform's options storage under a page-scoped whitelist.
//!
//! The workspace splits along its seams:
//!
//! - [`panelforge_schema`] — the panel description and resolution rules
//! - [`panelforge_host`] — traits the hosting platform implements, plus an
//!   in-memory host and a YAML file store
//! - [`panelforge_render`] — pure HTML rendering over a resolved snapshot
//! - this crate — the [`Panel`] engine tying the three together
//!
//! ```rust,ignore
//! let panel = Panel::new(PanelConfig::load("panel.yaml").await?);
//! let host = MemoryHost::new();
//! panel.register_menu(&host);
//! let html = panel.render(&host, &host, &host, "admin.php", None).await?;
//! ```

pub mod error;
pub mod notices;
pub mod panel;

pub use error::{PanelError, Result};
pub use notices::dependency_notice;
pub use panel::{Panel, Submission};

pub use panelforge_host as host;
pub use panelforge_render as render;
pub use panelforge_schema as schema;

pub use panelforge_host::{FileStore, MemoryHost};
pub use panelforge_schema::{
    Choice, ChoiceSource, Field, FieldKind, MenuConfig, MenuLocation, OptionValue, Page,
    PanelConfig, RequiredComponent, Section,
};
