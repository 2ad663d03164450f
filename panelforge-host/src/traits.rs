//! The traits a hosting platform implements.
//!
//! All of them are object-safe; the panel engine takes `&dyn` references so
//! a host can mix and match its own implementations with the ones shipped
//! here.

use std::collections::HashMap;

use async_trait::async_trait;
use panelforge_schema::OptionValue;

use crate::content::{PostTypeSpec, TaxonomySpec};
use crate::error::Result;

/// A listed content item: persisted id plus human-readable title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef {
    pub id: String,
    pub title: String,
}

impl ContentRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// The host's options storage. Values are written only through form
/// submission handling and are never deleted by panel code.
#[async_trait]
pub trait OptionsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<OptionValue>>;

    async fn set(&self, key: &str, value: OptionValue) -> Result<()>;

    /// Bulk fetch for a page render. Absent keys are simply missing from
    /// the returned map.
    async fn load(&self, keys: &[&str]) -> Result<HashMap<String, OptionValue>> {
        let mut values = HashMap::new();
        for key in keys {
            if let Some(value) = self.get(key).await? {
                values.insert((*key).to_string(), value);
            }
        }
        Ok(values)
    }
}

/// Listing of host-managed content for dynamic choice sources.
///
/// Lookups against an unknown taxonomy or post type return
/// [`crate::HostError::NotFound`] — a typed error, not an empty success.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn pages(&self) -> Result<Vec<ContentRef>>;

    async fn users(&self) -> Result<Vec<ContentRef>>;

    async fn posts(&self, post_type: &str, limit: Option<usize>) -> Result<Vec<ContentRef>>;

    async fn terms(&self, taxonomy: &str) -> Result<Vec<ContentRef>>;
}

/// The host media library, for gallery previews.
pub trait MediaLibrary: Send + Sync {
    /// URL of an attachment, `None` when the id is unknown.
    fn attachment_url(&self, attachment_id: &str) -> Option<String>;
}

/// A menu registration handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    TopLevel {
        slug: String,
        menu_title: String,
        page_title: String,
        capability: String,
        icon: Option<String>,
        position: Option<u32>,
    },
    Submenu {
        parent_slug: String,
        slug: String,
        menu_title: String,
        page_title: String,
        capability: String,
    },
}

impl MenuEntry {
    pub fn slug(&self) -> &str {
        match self {
            MenuEntry::TopLevel { slug, .. } | MenuEntry::Submenu { slug, .. } => slug,
        }
    }
}

/// Receives menu registrations from the panel.
pub trait MenuSink: Send + Sync {
    fn register(&self, entry: MenuEntry);
}

/// The host's content-type registry.
pub trait ContentRegistry: Send + Sync {
    fn taxonomy_exists(&self, name: &str) -> bool;

    fn post_type_exists(&self, name: &str) -> bool;

    fn register_taxonomy(&self, spec: TaxonomySpec);

    fn register_post_type(&self, spec: PostTypeSpec);
}

/// Install state of a companion component, for dependency notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Active,
    /// Installed but not activated.
    Installed,
    Missing,
}

/// The host's view of companion components (other plugins the panel's
/// owner depends on).
pub trait ComponentEnv: Send + Sync {
    fn status(&self, slug: &str) -> ComponentStatus;

    /// Where the user activates an installed component.
    fn activation_url(&self, slug: &str) -> String;

    /// Where the user installs a missing component.
    fn install_url(&self, slug: &str) -> String;
}
