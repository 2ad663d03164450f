//! Host-platform seam for panelforge
//!
//! The panel engine never talks to a CMS directly. Everything it needs from
//! the hosting platform — options storage, content listings, the media
//! library, menu registration, content-type registration, companion-plugin
//! status — goes through the traits in this crate.
//!
//! Two implementations ship here:
//!
//! - [`MemoryHost`] implements every trait in memory, for tests and for
//!   embedding the panel outside a real host
//! - [`FileStore`] implements [`OptionsStore`] over one YAML file per key
//!   with atomic writes

pub mod choices;
pub mod content;
pub mod error;
pub mod memory;
pub mod store;
pub mod traits;

pub use choices::{resolve_choices, timezones};
pub use content::{ensure_post_type, ensure_taxonomy, ContentLabels, PostTypeSpec, TaxonomySpec};
pub use error::{HostError, ResourceKind, Result};
pub use memory::MemoryHost;
pub use store::FileStore;
pub use traits::{
    ComponentEnv, ComponentStatus, ContentProvider, ContentRef, ContentRegistry, MediaLibrary,
    MenuEntry, MenuSink, OptionsStore,
};
