//! PanelConfig — the whole panel description plus derived lookups.
//!
//! The configuration is supplied once (in code or from a YAML file) and is
//! read-only afterwards. Page ordering, whitelist computation, and
//! current-page selection are derived views, recomputed per call.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::error::Result;
use crate::types::{Field, Page};

/// Where the panel hangs in the host admin menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MenuLocation {
    /// The panel is embedded elsewhere; no menu registration happens.
    #[default]
    None,
    TopLevel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<u32>,
    },
    Submenu {
        parent_slug: String,
    },
}

/// Menu registration settings for the panel as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    #[serde(default)]
    pub location: MenuLocation,
    #[serde(default = "MenuConfig::default_slug")]
    pub slug: String,
    #[serde(default = "MenuConfig::default_title")]
    pub menu_title: String,
    #[serde(default = "MenuConfig::default_title")]
    pub page_title: String,
    #[serde(default = "MenuConfig::default_capability")]
    pub capability: String,
}

impl MenuConfig {
    fn default_slug() -> String {
        "custom-settings".to_string()
    }

    fn default_title() -> String {
        "Settings".to_string()
    }

    fn default_capability() -> String {
        "manage_options".to_string()
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            location: MenuLocation::None,
            slug: Self::default_slug(),
            menu_title: Self::default_title(),
            page_title: Self::default_title(),
            capability: Self::default_capability(),
        }
    }
}

/// A companion component the panel depends on (dependency notices).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequiredComponent {
    pub slug: String,
    pub label: String,
}

/// A non-fatal configuration problem reported by [`PanelConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    /// Two whitelisted fields share an id — the persistence layer will
    /// silently overwrite one with the other.
    #[error("duplicate field id: {id}")]
    DuplicateFieldId { id: String },

    /// A field without an id renders but is never persisted.
    #[error("field without id in page '{page}', section '{section}'")]
    EmptyFieldId { page: String, section: String },

    /// Two sections of one page share an id.
    #[error("duplicate section id '{id}' in page '{page}'")]
    DuplicateSectionId { page: String, id: String },
}

/// The complete, immutable panel description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PanelConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Shown next to disabled controls when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_notice: Option<String>,
    /// Form action for submit-enabled pages; omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_components: Vec<RequiredComponent>,
}

impl PanelConfig {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn with_menu(mut self, menu: MenuConfig) -> Self {
        self.menu = menu;
        self
    }

    pub fn with_disabled_notice(mut self, notice: impl Into<String>) -> Self {
        self.disabled_notice = Some(notice.into());
        self
    }

    pub fn with_form_action(mut self, action: impl Into<String>) -> Self {
        self.form_action = Some(action.into());
        self
    }

    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&content)?;
        debug!(?path, pages = config.pages.len(), "panel config loaded");
        Ok(config)
    }

    /// Pages in display order.
    ///
    /// Pages without an explicit priority get defaults of 5, 10, 15… in
    /// declaration order (the counter advances for every page, explicit or
    /// not), then the whole list sorts stably ascending by effective
    /// priority.
    pub fn ordered_pages(&self) -> Vec<&Page> {
        let mut keyed: Vec<(u32, &Page)> = Vec::with_capacity(self.pages.len());
        let mut increment = 0u32;
        for page in &self.pages {
            increment += 5;
            keyed.push((page.priority.unwrap_or(increment), page));
        }
        keyed.sort_by_key(|(priority, _)| *priority);
        keyed.into_iter().map(|(_, page)| page).collect()
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// The page a tab parameter selects: the named page when it exists,
    /// else the first page in display order.
    pub fn current_page(&self, tab: Option<&str>) -> Option<&Page> {
        if let Some(id) = tab {
            if let Some(page) = self.page(id) {
                return Some(page);
            }
        }
        self.ordered_pages().first().copied()
    }

    /// All fields across all pages, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.pages.iter().flat_map(|p| p.fields())
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields().find(|f| f.id == id)
    }

    /// Non-empty field ids across the whole panel.
    pub fn option_ids(&self) -> Vec<&str> {
        self.fields()
            .map(|f| f.id.as_str())
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Page id → ids its persistence layer accepts. Fields without an id
    /// are skipped.
    pub fn whitelist(&self) -> IndexMap<&str, Vec<&str>> {
        let mut map = IndexMap::new();
        for page in &self.pages {
            let ids: Vec<&str> = page
                .fields()
                .map(|f| f.id.as_str())
                .filter(|id| !id.is_empty())
                .collect();
            map.insert(page.id.as_str(), ids);
        }
        map
    }

    /// Report duplicate and missing identifiers. Construction never fails
    /// on these; callers decide whether to log or reject.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let mut seen_fields: Vec<&str> = Vec::new();

        for page in &self.pages {
            let mut seen_sections: Vec<&str> = Vec::new();
            for section in &page.sections {
                if seen_sections.contains(&section.id.as_str()) {
                    issues.push(ConfigIssue::DuplicateSectionId {
                        page: page.id.clone(),
                        id: section.id.clone(),
                    });
                } else {
                    seen_sections.push(&section.id);
                }

                for field in &section.fields {
                    if field.id.is_empty() {
                        issues.push(ConfigIssue::EmptyFieldId {
                            page: page.id.clone(),
                            section: section.id.clone(),
                        });
                    } else if seen_fields.contains(&field.id.as_str()) {
                        issues.push(ConfigIssue::DuplicateFieldId {
                            id: field.id.clone(),
                        });
                    } else {
                        seen_fields.push(&field.id);
                    }
                }
            }
        }
        issues
    }
}
