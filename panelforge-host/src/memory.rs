//! In-memory host implementation.
//!
//! Implements every host trait over plain maps. Used by the test suites
//! and by embedders that want a panel without a real CMS behind it.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use panelforge_schema::OptionValue;

use crate::content::{PostTypeSpec, TaxonomySpec};
use crate::error::{HostError, Result};
use crate::traits::{
    ComponentEnv, ComponentStatus, ContentProvider, ContentRef, ContentRegistry, MediaLibrary,
    MenuEntry, MenuSink, OptionsStore,
};

/// An in-memory host. Seed content with the `with_*` builders, then hand
/// it to the panel as any of the host traits.
#[derive(Default)]
pub struct MemoryHost {
    options: RwLock<HashMap<String, OptionValue>>,
    pages: Vec<ContentRef>,
    users: Vec<ContentRef>,
    posts: HashMap<String, Vec<ContentRef>>,
    terms: HashMap<String, Vec<ContentRef>>,
    media: HashMap<String, String>,
    active_components: Vec<String>,
    installed_components: Vec<String>,
    menu_entries: RwLock<Vec<MenuEntry>>,
    taxonomies: RwLock<HashMap<String, TaxonomySpec>>,
    post_types: RwLock<HashMap<String, PostTypeSpec>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_option(self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options
            .write()
            .expect("options lock")
            .insert(key.into(), value.into());
        self
    }

    pub fn with_page(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.pages.push(ContentRef::new(id, title));
        self
    }

    pub fn with_user(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.users.push(ContentRef::new(id, name));
        self
    }

    /// Seed a post. The post type becomes known even when empty — use an
    /// empty vec via repeated calls for a known-but-empty type.
    pub fn with_post(
        mut self,
        post_type: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.posts
            .entry(post_type.into())
            .or_default()
            .push(ContentRef::new(id, title));
        self
    }

    /// Make a post type known without seeding posts.
    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.posts.entry(post_type.into()).or_default();
        self
    }

    pub fn with_term(
        mut self,
        taxonomy: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.terms
            .entry(taxonomy.into())
            .or_default()
            .push(ContentRef::new(id, name));
        self
    }

    /// Make a taxonomy known without seeding terms.
    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.terms.entry(taxonomy.into()).or_default();
        self
    }

    pub fn with_media(mut self, id: impl Into<String>, url: impl Into<String>) -> Self {
        self.media.insert(id.into(), url.into());
        self
    }

    pub fn with_active_component(mut self, slug: impl Into<String>) -> Self {
        self.active_components.push(slug.into());
        self
    }

    pub fn with_installed_component(mut self, slug: impl Into<String>) -> Self {
        self.installed_components.push(slug.into());
        self
    }

    /// Menu entries registered so far.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.menu_entries.read().expect("menu lock").clone()
    }

    pub fn registered_taxonomy(&self, name: &str) -> Option<TaxonomySpec> {
        self.taxonomies
            .read()
            .expect("taxonomy lock")
            .get(name)
            .cloned()
    }

    pub fn registered_post_type(&self, name: &str) -> Option<PostTypeSpec> {
        self.post_types
            .read()
            .expect("post type lock")
            .get(name)
            .cloned()
    }
}

#[async_trait]
impl OptionsStore for MemoryHost {
    async fn get(&self, key: &str) -> Result<Option<OptionValue>> {
        Ok(self.options.read().expect("options lock").get(key).cloned())
    }

    async fn set(&self, key: &str, value: OptionValue) -> Result<()> {
        self.options
            .write()
            .expect("options lock")
            .insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl ContentProvider for MemoryHost {
    async fn pages(&self) -> Result<Vec<ContentRef>> {
        Ok(self.pages.clone())
    }

    async fn users(&self) -> Result<Vec<ContentRef>> {
        Ok(self.users.clone())
    }

    async fn posts(&self, post_type: &str, limit: Option<usize>) -> Result<Vec<ContentRef>> {
        let posts = self
            .posts
            .get(post_type)
            .ok_or_else(|| HostError::post_type_not_found(post_type))?;
        let mut posts = posts.clone();
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        Ok(posts)
    }

    async fn terms(&self, taxonomy: &str) -> Result<Vec<ContentRef>> {
        self.terms
            .get(taxonomy)
            .cloned()
            .ok_or_else(|| HostError::taxonomy_not_found(taxonomy))
    }
}

impl MediaLibrary for MemoryHost {
    fn attachment_url(&self, attachment_id: &str) -> Option<String> {
        self.media.get(attachment_id).cloned()
    }
}

impl MenuSink for MemoryHost {
    fn register(&self, entry: MenuEntry) {
        self.menu_entries.write().expect("menu lock").push(entry);
    }
}

impl ContentRegistry for MemoryHost {
    fn taxonomy_exists(&self, name: &str) -> bool {
        self.terms.contains_key(name)
            || self
                .taxonomies
                .read()
                .expect("taxonomy lock")
                .contains_key(name)
    }

    fn post_type_exists(&self, name: &str) -> bool {
        self.posts.contains_key(name)
            || self
                .post_types
                .read()
                .expect("post type lock")
                .contains_key(name)
    }

    fn register_taxonomy(&self, spec: TaxonomySpec) {
        self.taxonomies
            .write()
            .expect("taxonomy lock")
            .insert(spec.name.clone(), spec);
    }

    fn register_post_type(&self, spec: PostTypeSpec) {
        self.post_types
            .write()
            .expect("post type lock")
            .insert(spec.name.clone(), spec);
    }
}

impl ComponentEnv for MemoryHost {
    fn status(&self, slug: &str) -> ComponentStatus {
        if self.active_components.iter().any(|s| s == slug) {
            ComponentStatus::Active
        } else if self.installed_components.iter().any(|s| s == slug) {
            ComponentStatus::Installed
        } else {
            ComponentStatus::Missing
        }
    }

    fn activation_url(&self, slug: &str) -> String {
        format!("components.php?action=activate&component={slug}")
    }

    fn install_url(&self, slug: &str) -> String {
        format!("component-install.php?component={slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ensure_taxonomy;

    #[tokio::test]
    async fn options_round_trip() {
        let host = MemoryHost::new();
        assert_eq!(host.get("store_status").await.unwrap(), None);
        host.set("store_status", OptionValue::single("open"))
            .await
            .unwrap();
        assert_eq!(
            host.get("store_status").await.unwrap(),
            Some(OptionValue::single("open"))
        );
    }

    #[tokio::test]
    async fn load_skips_absent_keys() {
        let host = MemoryHost::new().with_option("a", "1");
        let values = host.load(&["a", "b"]).await.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["a"], OptionValue::single("1"));
    }

    #[tokio::test]
    async fn posts_honor_limit_and_unknown_type_errors() {
        let host = MemoryHost::new()
            .with_post("book", "1", "Dune")
            .with_post("book", "2", "Hyperion");
        assert_eq!(host.posts("book", Some(1)).await.unwrap().len(), 1);
        assert!(matches!(
            host.posts("recipe", None).await.unwrap_err(),
            HostError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn unknown_taxonomy_errors_known_empty_lists() {
        let host = MemoryHost::new().with_taxonomy("genre");
        assert!(host.terms("genre").await.unwrap().is_empty());
        assert!(host.terms("audience").await.is_err());
    }

    #[test]
    fn registry_skips_existing_taxonomy() {
        let host = MemoryHost::new().with_taxonomy("genre");
        let spec = TaxonomySpec::new("genre", "book", "Genre", "Genres");
        assert!(!ensure_taxonomy(&host, spec.clone()));
        assert!(host.registered_taxonomy("genre").is_none());

        let spec = TaxonomySpec::new("audience", "book", "Audience", "Audiences");
        assert!(ensure_taxonomy(&host, spec));
        assert!(host.registered_taxonomy("audience").is_some());
        assert!(host.taxonomy_exists("audience"));
    }

    #[test]
    fn component_status_ladder() {
        let host = MemoryHost::new()
            .with_active_component("woo")
            .with_installed_component("seo");
        assert_eq!(host.status("woo"), ComponentStatus::Active);
        assert_eq!(host.status("seo"), ComponentStatus::Installed);
        assert_eq!(host.status("cache"), ComponentStatus::Missing);
    }
}
