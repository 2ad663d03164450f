//! Taxonomy and post-type registration specs.
//!
//! The host owns registration; this module builds complete specs from a
//! singular/plural pair the way hand-rolled registrations usually do, so
//! callers only override what differs.

use tracing::debug;

use crate::traits::ContentRegistry;

/// The label set a registration carries. Every label derives from the
/// singular/plural pair unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLabels {
    pub name: String,
    pub singular_name: String,
    pub menu_name: String,
    pub all_items: String,
    pub add_new: String,
    pub edit_item: String,
    pub new_item: String,
    pub view_item: String,
    pub search_items: String,
    pub not_found: String,
    pub parent: String,
}

impl ContentLabels {
    pub fn derive(singular: &str, plural: &str) -> Self {
        Self {
            name: plural.to_string(),
            singular_name: singular.to_string(),
            menu_name: singular.to_string(),
            all_items: plural.to_string(),
            add_new: format!("Add {singular}"),
            edit_item: format!("Edit {singular}"),
            new_item: format!("New {singular}"),
            view_item: format!("View {singular}"),
            search_items: format!("Search {plural}"),
            not_found: format!("No {plural} found"),
            parent: format!("Parent {singular}"),
        }
    }
}

/// A taxonomy registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomySpec {
    pub name: String,
    /// Post types the taxonomy attaches to.
    pub object_types: Vec<String>,
    pub description: String,
    pub public: bool,
    pub hierarchical: bool,
    pub labels: ContentLabels,
}

impl TaxonomySpec {
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        singular: &str,
        plural: &str,
    ) -> Self {
        Self {
            name: name.into(),
            object_types: vec![object_type.into()],
            description: format!("This is where you can create and manage {plural}."),
            public: true,
            hierarchical: false,
            labels: ContentLabels::derive(singular, plural),
        }
    }

    pub fn hierarchical(mut self) -> Self {
        self.hierarchical = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }

    pub fn with_labels(mut self, labels: ContentLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// A post-type registration request.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTypeSpec {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub hierarchical: bool,
    /// Host editor features the post type supports.
    pub supports: Vec<String>,
    pub menu_icon: Option<String>,
    pub labels: ContentLabels,
}

impl PostTypeSpec {
    pub fn new(name: impl Into<String>, singular: &str, plural: &str) -> Self {
        Self {
            name: name.into(),
            description: format!("This is where you can create and manage {plural}."),
            public: true,
            hierarchical: false,
            supports: ["title", "thumbnail", "editor", "author"]
                .map(String::from)
                .to_vec(),
            menu_icon: None,
            labels: ContentLabels::derive(singular, plural),
        }
    }

    pub fn with_supports<I, S>(mut self, supports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supports = supports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_menu_icon(mut self, icon: impl Into<String>) -> Self {
        self.menu_icon = Some(icon.into());
        self
    }

    pub fn with_labels(mut self, labels: ContentLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// Register a taxonomy unless the host already has one with that name.
/// Returns whether a registration happened.
pub fn ensure_taxonomy(registry: &dyn ContentRegistry, spec: TaxonomySpec) -> bool {
    if registry.taxonomy_exists(&spec.name) {
        debug!(name = %spec.name, "taxonomy already registered, skipping");
        return false;
    }
    registry.register_taxonomy(spec);
    true
}

/// Register a post type unless the host already has one with that name.
/// Returns whether a registration happened.
pub fn ensure_post_type(registry: &dyn ContentRegistry, spec: PostTypeSpec) -> bool {
    if registry.post_type_exists(&spec.name) {
        debug!(name = %spec.name, "post type already registered, skipping");
        return false;
    }
    registry.register_post_type(spec);
    true
}
