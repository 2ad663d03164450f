//! The Panel engine: config + host traits → rendered pages and stored
//! submissions.

use std::collections::HashMap;

use panelforge_host::{
    resolve_choices, ContentProvider, MediaLibrary, MenuEntry, MenuSink, OptionsStore,
};
use panelforge_render::{render_page, FieldContext};
use panelforge_schema::{
    resolve_value, FieldKind, MenuLocation, OptionValue, PanelConfig,
};
use tracing::{debug, warn};

use crate::error::{PanelError, Result};

/// Outcome of a form submission: which keys were stored and which were
/// rejected by the page whitelist.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub stored: Vec<String>,
    pub skipped: Vec<String>,
}

/// A settings panel. Built once from an immutable configuration; every
/// operation takes the host capabilities it needs as trait references.
pub struct Panel {
    config: PanelConfig,
}

impl Panel {
    /// Wrap a configuration. Configuration problems (duplicate or empty
    /// field ids) are logged as warnings, not rejected — the host's
    /// persistence layer is what ultimately suffers from them.
    pub fn new(config: PanelConfig) -> Self {
        for issue in config.validate() {
            warn!(%issue, "panel config diagnostic");
        }
        Self { config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Register the panel in the host admin menu, honoring the configured
    /// location. A `MenuLocation::None` panel registers nothing.
    pub fn register_menu(&self, sink: &dyn MenuSink) {
        let menu = &self.config.menu;
        let entry = match &menu.location {
            MenuLocation::None => return,
            MenuLocation::TopLevel { icon, position } => MenuEntry::TopLevel {
                slug: menu.slug.clone(),
                menu_title: menu.menu_title.clone(),
                page_title: menu.page_title.clone(),
                capability: menu.capability.clone(),
                icon: icon.clone(),
                position: *position,
            },
            MenuLocation::Submenu { parent_slug } => MenuEntry::Submenu {
                parent_slug: parent_slug.clone(),
                slug: menu.slug.clone(),
                menu_title: menu.menu_title.clone(),
                page_title: menu.page_title.clone(),
                capability: menu.capability.clone(),
            },
        };
        debug!(slug = %menu.slug, "registering panel menu");
        sink.register(entry);
    }

    /// Resolve the current value of one option: persisted → explicit →
    /// default → fallback, first non-empty. Ids the panel does not know
    /// still consult the store and the fallback.
    pub async fn option_value(
        &self,
        store: &dyn OptionsStore,
        id: &str,
        fallback: Option<&OptionValue>,
    ) -> Result<OptionValue> {
        let persisted = store.get(id).await?;
        Ok(match self.config.field(id) {
            Some(field) => field.resolve(persisted.as_ref(), fallback),
            None => resolve_value(persisted.as_ref(), None, None, fallback),
        })
    }

    /// Render one settings screen to HTML.
    ///
    /// `tab` selects the page (first page in display order when absent or
    /// unknown); `base` is the URL the nav tabs link back to. Persisted
    /// values are loaded in one pass, choice sources resolved per field —
    /// a failing source degrades that field to an empty choice list with a
    /// warning rather than failing the page.
    pub async fn render(
        &self,
        store: &dyn OptionsStore,
        provider: &dyn ContentProvider,
        media: &dyn MediaLibrary,
        base: &str,
        tab: Option<&str>,
    ) -> Result<String> {
        let page = self
            .config
            .current_page(tab)
            .ok_or_else(|| PanelError::PageNotFound {
                id: tab.unwrap_or_default().to_string(),
            })?;

        let ids: Vec<&str> = page
            .fields()
            .map(|f| f.id.as_str())
            .filter(|id| !id.is_empty())
            .collect();
        let persisted = store.load(&ids).await?;

        let mut contexts: HashMap<String, FieldContext> = HashMap::new();
        for field in page.fields() {
            if field.id.is_empty() {
                continue;
            }
            let value = field.resolve(persisted.get(&field.id), None);
            let mut ctx = FieldContext::new(value);

            if let Some(source) = field.kind.choices() {
                match resolve_choices(source, provider).await {
                    Ok(choices) => ctx.choices = choices,
                    Err(e) => {
                        warn!(field = %field.id, %e, "choice source failed, rendering empty choices");
                    }
                }
            }

            if matches!(field.kind, FieldKind::Gallery) {
                let mut urls = HashMap::new();
                for member in ctx.value.members() {
                    if let Some(url) = media.attachment_url(member) {
                        urls.insert(member.to_string(), url);
                    }
                }
                ctx.media_urls = urls;
            }

            contexts.insert(field.id.clone(), ctx);
        }

        Ok(render_page(&self.config, page, &contexts, base).into_string())
    }

    /// Store a form submission for one page. Only keys whitelisted for
    /// that page are written; the rest are reported back as skipped.
    /// Nothing is ever deleted.
    pub async fn apply_submission(
        &self,
        store: &dyn OptionsStore,
        page_id: &str,
        submitted: HashMap<String, OptionValue>,
    ) -> Result<Submission> {
        let page = self
            .config
            .page(page_id)
            .ok_or_else(|| PanelError::PageNotFound {
                id: page_id.to_string(),
            })?;
        let allowed: Vec<&str> = page
            .fields()
            .map(|f| f.id.as_str())
            .filter(|id| !id.is_empty())
            .collect();

        let mut outcome = Submission::default();
        for (key, value) in submitted {
            if allowed.contains(&key.as_str()) {
                store.set(&key, value).await?;
                outcome.stored.push(key);
            } else {
                warn!(key = %key, page = page_id, "submitted key not whitelisted, skipped");
                outcome.skipped.push(key);
            }
        }
        outcome.stored.sort();
        outcome.skipped.sort();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelforge_host::MemoryHost;
    use panelforge_schema::{Field, MenuConfig, Page, Section};

    fn config() -> PanelConfig {
        PanelConfig::new(vec![
            Page::new("general", "General").section(
                Section::new("status", "Status")
                    .field(
                        Field::new("store_status", "Store status", FieldKind::Text)
                            .with_default("open"),
                    )
                    .field(Field::new("notify_user", "Notify user", FieldKind::Checkbox)),
            ),
            Page::new("media", "Media").section(
                Section::new("images", "Images")
                    .field(Field::new("gallery_images", "Gallery", FieldKind::Gallery)),
            ),
        ])
    }

    #[tokio::test]
    async fn render_prefills_persisted_over_default() {
        let panel = Panel::new(config());
        let host = MemoryHost::new().with_option("store_status", "closed");
        let html = panel
            .render(&host, &host, &host, "admin.php", None)
            .await
            .unwrap();
        assert!(html.contains(r#"value="closed""#));
        assert!(!html.contains(r#"value="open""#));
    }

    #[tokio::test]
    async fn render_falls_back_to_default() {
        let panel = Panel::new(config());
        let host = MemoryHost::new();
        let html = panel
            .render(&host, &host, &host, "admin.php", None)
            .await
            .unwrap();
        assert!(html.contains(r#"value="open""#));
    }

    #[tokio::test]
    async fn render_selects_tab_and_resolves_media() {
        let panel = Panel::new(config());
        let host = MemoryHost::new()
            .with_option("gallery_images", vec!["4".to_string(), "9".to_string()])
            .with_media("4", "http://m/4.png");
        let html = panel
            .render(&host, &host, &host, "admin.php", Some("media"))
            .await
            .unwrap();
        assert_eq!(html.matches(r#"name="gallery_images[]""#).count(), 2);
        assert!(html.contains(r#"src="http://m/4.png""#));
    }

    #[tokio::test]
    async fn render_empty_panel_is_page_not_found() {
        let panel = Panel::new(PanelConfig::default());
        let host = MemoryHost::new();
        let err = panel
            .render(&host, &host, &host, "admin.php", None)
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::PageNotFound { .. }));
    }

    #[tokio::test]
    async fn option_value_resolution_chain() {
        let panel = Panel::new(config());
        let host = MemoryHost::new();

        // default only
        assert_eq!(
            panel
                .option_value(&host, "store_status", None)
                .await
                .unwrap(),
            OptionValue::single("open")
        );

        // persisted beats default
        host.set("store_status", OptionValue::single("closed"))
            .await
            .unwrap();
        assert_eq!(
            panel
                .option_value(&host, "store_status", None)
                .await
                .unwrap(),
            OptionValue::single("closed")
        );

        // unknown id: store then fallback
        let fallback = OptionValue::single("fallback");
        assert_eq!(
            panel
                .option_value(&host, "unknown", Some(&fallback))
                .await
                .unwrap(),
            fallback
        );
    }

    #[tokio::test]
    async fn submission_honors_page_whitelist() {
        let panel = Panel::new(config());
        let host = MemoryHost::new();

        let outcome = panel
            .apply_submission(
                &host,
                "general",
                HashMap::from([
                    ("store_status".to_string(), OptionValue::single("closed")),
                    // belongs to the media page, not general
                    ("gallery_images".to_string(), OptionValue::many(["4"])),
                    ("injected".to_string(), OptionValue::single("x")),
                ]),
            )
            .await
            .unwrap();

        assert_eq!(outcome.stored, vec!["store_status"]);
        assert_eq!(outcome.skipped, vec!["gallery_images", "injected"]);
        assert_eq!(
            host.get("store_status").await.unwrap(),
            Some(OptionValue::single("closed"))
        );
        assert_eq!(host.get("gallery_images").await.unwrap(), None);
    }

    #[tokio::test]
    async fn submission_to_unknown_page_errors() {
        let panel = Panel::new(config());
        let host = MemoryHost::new();
        let err = panel
            .apply_submission(&host, "nope", HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, PanelError::PageNotFound { .. }));
    }

    #[test]
    fn register_menu_honors_location() {
        let host = MemoryHost::new();

        // default location is None — nothing registered
        Panel::new(config()).register_menu(&host);
        assert!(host.menu_entries().is_empty());

        let mut menu = MenuConfig::default();
        menu.location = MenuLocation::TopLevel {
            icon: Some("store".into()),
            position: Some(30),
        };
        menu.slug = "store-hours".into();
        Panel::new(config().with_menu(menu)).register_menu(&host);

        let entries = host.menu_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug(), "store-hours");
        assert!(matches!(
            entries[0],
            MenuEntry::TopLevel {
                position: Some(30),
                ..
            }
        ));
    }
}
