//! Field-row rendering: one labeled row per field, one control per kind.

use std::collections::{HashMap, HashSet};

use maud::{html, Markup, PreEscaped};
use panelforge_schema::{Choice, Field, FieldKind, OptionValue};
use tracing::warn;

use crate::assets;

/// Pre-resolved render inputs for one field: its current value, the
/// concrete choice list (empty for choice-less kinds or failed sources),
/// and media URLs for gallery previews keyed by attachment id.
#[derive(Debug, Clone, Default)]
pub struct FieldContext {
    pub value: OptionValue,
    pub choices: Vec<Choice>,
    pub media_urls: HashMap<String, String>,
}

impl FieldContext {
    pub fn new(value: OptionValue) -> Self {
        Self {
            value,
            choices: Vec::new(),
            media_urls: HashMap::new(),
        }
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_media_urls(mut self, media_urls: HashMap<String, String>) -> Self {
        self.media_urls = media_urls;
        self
    }
}

/// Renders field rows. Holds the once-only guard for shared inline assets,
/// so create one renderer per page render.
pub struct Renderer {
    disabled_notice: Option<String>,
    emitted: HashSet<&'static str>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            disabled_notice: None,
            emitted: HashSet::new(),
        }
    }

    /// Text shown next to disabled controls.
    pub fn with_disabled_notice(mut self, notice: impl Into<String>) -> Self {
        self.disabled_notice = Some(notice.into());
        self
    }

    /// One labeled row: title, control, optional disabled notice, optional
    /// description. Never fails; degraded fields keep their label row.
    pub fn field_row(&mut self, field: &Field, ctx: &FieldContext) -> Markup {
        let mut classes = String::from("pf-field");
        if let Some(class) = &field.class {
            classes.push(' ');
            classes.push_str(class);
        }
        classes.push(' ');
        classes.push_str(field.kind.slug());

        html! {
            div class=(classes) {
                label class="pf-field-title" for=(field.id) { (field.title) }
                div class="pf-field-inputs" {
                    (self.control(field, ctx))
                    @if field.disabled {
                        @if let Some(notice) = &self.disabled_notice {
                            span class="pf-disabled-notice" { (notice) }
                        }
                    }
                    @if let Some(details) = &field.details {
                        p class="description" { (details) }
                    }
                }
            }
        }
    }

    fn control(&mut self, field: &Field, ctx: &FieldContext) -> Markup {
        if field.id.is_empty() {
            warn!(title = %field.title, "field without id, emitting no control");
            return html! {};
        }
        match &field.kind {
            FieldKind::Text => self.text(field, ctx),
            FieldKind::Textarea { rows } => self.textarea(field, ctx, (*rows).unwrap_or(4)),
            FieldKind::Number { min, max, step } => self.number(field, ctx, *min, *max, *step),
            FieldKind::Checkbox => self.checkbox(field, ctx),
            FieldKind::Radio { .. } => self.radio(field, ctx),
            FieldKind::Select { multiple, .. } => self.select(field, ctx, *multiple),
            FieldKind::ImageSelect { multiple, .. } => self.image_select(field, ctx, *multiple),
            FieldKind::Gallery => self.gallery(field, ctx),
            FieldKind::Unsupported => {
                warn!(field = %field.id, "unsupported field kind, emitting no control");
                html! {}
            }
        }
    }

    fn text(&self, field: &Field, ctx: &FieldContext) -> Markup {
        html! {
            input type="text" id=(field.id) name=(field.id)
                value=(ctx.value.as_single())
                placeholder=[field.placeholder.as_deref()]
                disabled[field.disabled];
        }
    }

    fn textarea(&self, field: &Field, ctx: &FieldContext, rows: u16) -> Markup {
        html! {
            textarea id=(field.id) name=(field.id) rows=(rows)
                placeholder=[field.placeholder.as_deref()]
                disabled[field.disabled] {
                (ctx.value.as_single())
            }
        }
    }

    fn number(
        &self,
        field: &Field,
        ctx: &FieldContext,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    ) -> Markup {
        html! {
            input type="number" id=(field.id) name=(field.id)
                value=(ctx.value.as_single())
                min=[min] max=[max] step=[step]
                disabled[field.disabled];
        }
    }

    fn checkbox(&self, field: &Field, ctx: &FieldContext) -> Markup {
        html! {
            input type="checkbox" id=(field.id) name=(field.id) value="yes"
                checked[!ctx.value.is_empty()]
                disabled[field.disabled];
        }
    }

    fn radio(&self, field: &Field, ctx: &FieldContext) -> Markup {
        html! {
            @for choice in &ctx.choices {
                label class="pf-choice" {
                    input type="radio" name=(field.id) value=(choice.value)
                        checked[ctx.value.contains(&choice.value)]
                        disabled[field.disabled];
                    " " (choice.display_label())
                }
            }
        }
    }

    fn select(&self, field: &Field, ctx: &FieldContext, multiple: bool) -> Markup {
        let name = input_name(&field.id, multiple);
        html! {
            select id=(field.id) name=(name) multiple[multiple] disabled[field.disabled] {
                @for choice in &ctx.choices {
                    option value=(choice.value) selected[ctx.value.contains(&choice.value)] {
                        (choice.display_label())
                    }
                }
            }
        }
    }

    fn image_select(&mut self, field: &Field, ctx: &FieldContext, multiple: bool) -> Markup {
        let input_type = if multiple { "checkbox" } else { "radio" };
        let name = input_name(&field.id, multiple);
        let grid = html! {
            div class="pf-image-select" {
                @for choice in &ctx.choices {
                    @let checked = ctx.value.contains(&choice.value);
                    label class=(if checked { "checked" } else { "" }) {
                        input type=(input_type) name=(name) value=(choice.value)
                            checked[checked] disabled[field.disabled];
                        img src=[choice.image.as_deref()];
                    }
                }
            }
        };
        let assets = self.image_select_assets();
        html! { (grid) (assets) }
    }

    /// Shared image-select style/script, at most once per renderer no
    /// matter how many image-select fields the page holds.
    fn image_select_assets(&mut self) -> Markup {
        if !self.emitted.insert("image-select") {
            return html! {};
        }
        html! {
            style { (PreEscaped(assets::IMAGE_SELECT_STYLE)) }
            script { (PreEscaped(assets::IMAGE_SELECT_SCRIPT)) }
        }
    }

    fn gallery(&self, field: &Field, ctx: &FieldContext) -> Markup {
        let preview_id = format!("pf-gallery-{}", field.id);
        let name = input_name(&field.id, true);
        html! {
            div id=(preview_id) class="pf-gallery-preview" {
                @for member in ctx.value.members() {
                    div draggable="true" {
                        span class="pf-gallery-remove" onclick="this.parentElement.remove()" { "×" }
                        @if let Some(url) = ctx.media_urls.get(member) {
                            img src=(url);
                        }
                        input type="hidden" name=(name) value=(member);
                    }
                }
            }
            button type="button" class="button pf-gallery-add"
                id=(format!("pf-gallery-add-{}", field.id)) disabled[field.disabled] {
                "Select Images"
            }
            style { (PreEscaped(assets::gallery_style(&preview_id))) }
            script { (PreEscaped(assets::gallery_script(&field.id, &preview_id))) }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-value controls submit repeated `{id}[]` inputs; single-value
/// controls submit `{id}`.
fn input_name(id: &str, multiple: bool) -> String {
    if multiple {
        format!("{id}[]")
    } else {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelforge_schema::ChoiceSource;

    fn render(field: &Field, ctx: &FieldContext) -> String {
        Renderer::new().field_row(field, ctx).into_string()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn known_kind_renders_one_labeled_input() {
        let field = Field::new("store_status", "Store status", FieldKind::Text)
            .with_default("open");
        let ctx = FieldContext::new(OptionValue::single("open"));
        let html = render(&field, &ctx);

        assert_eq!(count(&html, "<label"), 1);
        assert_eq!(count(&html, "<input"), 1);
        assert!(html.contains(r#"name="store_status""#));
        assert!(html.contains(r#"value="open""#));
    }

    #[test]
    fn unsupported_kind_renders_label_row_without_control() {
        let field = Field::new("legacy", "Legacy widget", FieldKind::Unsupported);
        let html = render(&field, &FieldContext::default());

        assert!(html.contains("Legacy widget"));
        assert_eq!(count(&html, "<label"), 1);
        assert_eq!(count(&html, "<input"), 0);
        assert_eq!(count(&html, "<select"), 0);
    }

    #[test]
    fn field_without_id_renders_no_control() {
        let field = Field::new("", "Broken", FieldKind::Text);
        let html = render(&field, &FieldContext::default());
        assert!(html.contains("Broken"));
        assert_eq!(count(&html, "<input"), 0);
    }

    #[test]
    fn values_are_escaped() {
        let field = Field::new("note", "Note", FieldKind::Text);
        let ctx = FieldContext::new(OptionValue::single("<script>alert(1)</script>"));
        let html = render(&field, &ctx);
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn gallery_emits_one_hidden_input_per_member() {
        let field = Field::new("gallery_images", "Gallery", FieldKind::Gallery);
        let ctx = FieldContext::new(OptionValue::many(["4", "9", ""]))
            .with_media_urls(HashMap::from([("4".to_string(), "http://m/4.png".to_string())]));
        let html = render(&field, &ctx);

        assert_eq!(count(&html, r#"name="gallery_images[]""#), 2);
        assert_eq!(count(&html, r#"type="hidden""#), 2);
        // only the member with a known attachment gets a preview image
        assert_eq!(count(&html, "<img"), 1);
        assert!(html.contains(r#"src="http://m/4.png""#));
    }

    #[test]
    fn multi_select_members_share_array_name() {
        let field = Field::new(
            "open_days",
            "Open days",
            FieldKind::Select {
                choices: ChoiceSource::fixed(vec![
                    Choice::new("mon"),
                    Choice::new("tue"),
                    Choice::new("wed"),
                ]),
                multiple: true,
            },
        );
        let ctx = FieldContext::new(OptionValue::many(["mon", "wed"])).with_choices(vec![
            Choice::new("mon"),
            Choice::new("tue"),
            Choice::new("wed"),
        ]);
        let html = render(&field, &ctx);

        assert!(html.contains(r#"name="open_days[]""#));
        assert!(html.contains("multiple"));
        assert_eq!(count(&html, "selected"), 2);
    }

    #[test]
    fn single_image_select_uses_radios_with_plain_name() {
        let choices = vec![
            Choice::with_image("light", "http://m/light.png"),
            Choice::with_image("dark", "http://m/dark.png"),
        ];
        let field = Field::new(
            "theme",
            "Theme",
            FieldKind::ImageSelect {
                choices: ChoiceSource::fixed(choices.clone()),
                multiple: false,
            },
        );
        let ctx = FieldContext::new(OptionValue::single("dark")).with_choices(choices);
        let html = render(&field, &ctx);

        assert_eq!(count(&html, r#"type="radio""#), 2);
        assert_eq!(count(&html, r#"name="theme""#), 2);
        assert!(!html.contains(r#"name="theme[]""#));
        assert_eq!(count(&html, r#"class="checked""#), 1);
    }

    #[test]
    fn multi_image_select_uses_checkboxes_with_array_name() {
        let choices = vec![Choice::with_image("a", "http://m/a.png")];
        let field = Field::new(
            "badges",
            "Badges",
            FieldKind::ImageSelect {
                choices: ChoiceSource::fixed(choices.clone()),
                multiple: true,
            },
        );
        let ctx = FieldContext::new(OptionValue::empty()).with_choices(choices);
        let html = render(&field, &ctx);

        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains(r#"name="badges[]""#));
    }

    #[test]
    fn image_select_assets_emitted_once_per_renderer() {
        let choices = vec![Choice::with_image("a", "http://m/a.png")];
        let make = |id: &str| {
            Field::new(
                id,
                id,
                FieldKind::ImageSelect {
                    choices: ChoiceSource::fixed(choices.clone()),
                    multiple: false,
                },
            )
        };
        let ctx = FieldContext::new(OptionValue::empty()).with_choices(choices.clone());

        let mut renderer = Renderer::new();
        let first = renderer.field_row(&make("one"), &ctx).into_string();
        let second = renderer.field_row(&make("two"), &ctx).into_string();

        assert_eq!(count(&first, "<style"), 1);
        assert_eq!(count(&second, "<style"), 0);
        assert_eq!(count(&second, "<script"), 0);
    }

    #[test]
    fn checkbox_checked_from_resolved_value() {
        let field = Field::new("notify", "Notify", FieldKind::Checkbox);
        let on = render(&field, &FieldContext::new(OptionValue::single("yes")));
        let off = render(&field, &FieldContext::new(OptionValue::empty()));
        assert!(on.contains("checked"));
        assert!(!off.contains("checked"));
    }

    #[test]
    fn disabled_field_shows_notice_when_configured() {
        let field = Field::new("premium", "Premium", FieldKind::Text).disabled();
        let ctx = FieldContext::default();

        let with_notice = Renderer::new()
            .with_disabled_notice("Available in Pro")
            .field_row(&field, &ctx)
            .into_string();
        assert!(with_notice.contains("Available in Pro"));
        assert!(with_notice.contains("disabled"));

        let without_notice = render(&field, &ctx);
        assert!(!without_notice.contains("pf-disabled-notice"));
    }

    #[test]
    fn details_render_as_description() {
        let field = Field::new("purge_days", "Purge after", FieldKind::Text)
            .with_details("Days before stale entries are removed.");
        let html = render(&field, &FieldContext::default());
        assert!(html.contains(r#"class="description""#));
        assert!(html.contains("Days before stale entries are removed."));
    }
}
