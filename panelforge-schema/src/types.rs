//! Core panel types: pages, sections, fields.
//!
//! All types serialize to/from YAML via serde. A field's kind is a tagged
//! enum — one variant per renderer — flattened into the field map, so a
//! YAML field reads naturally:
//!
//! ```yaml
//! id: store_status
//! title: Store status
//! kind: select
//! choices:
//!   source: static
//!   choices:
//!     - value: open
//!     - value: closed
//! ```

use serde::{Deserialize, Serialize};

use crate::value::OptionValue;

/// A single selectable choice in a radio, select, or image-select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Image URL for image-select grids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            image: None,
        }
    }

    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            image: None,
        }
    }

    pub fn with_image(value: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            image: Some(image.into()),
        }
    }

    /// The text shown to the user — explicit label, else the raw value.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Where the choices of a choice-bearing field come from.
///
/// Dynamic sources are resolved against the host's content listings at
/// render time; `static` carries the list inline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum ChoiceSource {
    Static { choices: Vec<Choice> },
    /// All pages known to the host, value = page id, label = title.
    Pages,
    /// All users known to the host, value = user id, label = display name.
    Users,
    /// Terms of one taxonomy. Unknown taxonomies surface a typed error.
    Terms { taxonomy: String },
    /// Posts of one post type. Unknown post types surface a typed error.
    Posts {
        post_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },
    /// Timezone identifiers with `/` rendered as ` > ` in labels.
    Timezones,
}

impl ChoiceSource {
    pub fn fixed(choices: Vec<Choice>) -> Self {
        Self::Static { choices }
    }
}

/// The kind of a field — selects the renderer and the value shape.
///
/// This is a closed set. Unknown tags deserialize to [`FieldKind::Unsupported`],
/// which renders the label row with no control rather than failing the
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rows: Option<u16>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Checkbox,
    Radio {
        choices: ChoiceSource,
    },
    Select {
        choices: ChoiceSource,
        #[serde(default)]
        multiple: bool,
    },
    /// Grid of images over hidden radio (single) or checkbox (multiple) inputs.
    ImageSelect {
        choices: ChoiceSource,
        #[serde(default)]
        multiple: bool,
    },
    /// Sortable media-attachment picker; stores a list of attachment ids.
    Gallery,
    #[serde(other)]
    Unsupported,
}

impl FieldKind {
    /// Whether the control submits repeated `{id}[]` inputs.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            FieldKind::Gallery
                | FieldKind::Select { multiple: true, .. }
                | FieldKind::ImageSelect { multiple: true, .. }
        )
    }

    /// The choice source, for kinds that have one.
    pub fn choices(&self) -> Option<&ChoiceSource> {
        match self {
            FieldKind::Radio { choices }
            | FieldKind::Select { choices, .. }
            | FieldKind::ImageSelect { choices, .. } => Some(choices),
            _ => None,
        }
    }

    /// Stable kebab-case name, used as a CSS class on the field row.
    pub fn slug(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Number { .. } => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Select { .. } => "select",
            FieldKind::ImageSelect { .. } => "image-select",
            FieldKind::Gallery => "gallery",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

/// A single configurable value: identifier, title, kind, and value sources.
///
/// The identifier doubles as the persisted key; it must be unique across the
/// whole panel or the persistence layer silently overwrites (reported by
/// [`crate::PanelConfig::validate`], not enforced).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    /// Persisted key. May be empty in a malformed descriptor — such fields
    /// render their label row, emit no input, and are never whitelisted.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Used when neither a persisted nor an explicit value exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<OptionValue>,
    /// Explicit value supplied by the caller; overrides the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text rendered as a description row under the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Extra CSS class on the field row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl Field {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            default: None,
            value: None,
            placeholder: None,
            details: None,
            class: None,
            disabled: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A named group of fields shown together under one heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

fn default_true() -> bool {
    true
}

/// A top-level settings screen composed of sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: String,
    pub title: String,
    /// Label in the nav-tab row; the title when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_label: Option<String>,
    /// Explicit ordering priority. Pages without one get strictly
    /// increasing defaults in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Whether the page form gets a submit button.
    #[serde(default = "default_true")]
    pub show_submit: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            nav_label: None,
            priority: None,
            show_submit: true,
            sections: Vec::new(),
        }
    }

    pub fn with_nav_label(mut self, label: impl Into<String>) -> Self {
        self.nav_label = Some(label.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn without_submit(mut self) -> Self {
        self.show_submit = false;
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn nav_label(&self) -> &str {
        self.nav_label.as_deref().unwrap_or(&self.title)
    }

    /// All fields of the page, in section order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_select_yaml() {
        let kind = FieldKind::Select {
            choices: ChoiceSource::fixed(vec![Choice::new("open"), Choice::new("closed")]),
            multiple: false,
        };
        let yaml = serde_yaml_ng::to_string(&kind).unwrap();
        assert!(yaml.contains("kind: select"));
        let parsed: FieldKind = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(kind, parsed);
    }

    #[test]
    fn unknown_kind_parses_to_unsupported() {
        let field: Field = serde_yaml_ng::from_str(
            r#"
id: legacy
title: Legacy widget
kind: wp-editor
"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::Unsupported);
        assert_eq!(field.id, "legacy");
    }

    #[test]
    fn field_yaml_reads_flattened_kind() {
        let field: Field = serde_yaml_ng::from_str(
            r#"
id: closing_note
title: Closing note
kind: textarea
rows: 6
details: Shown to visitors while the store is closed.
"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::Textarea { rows: Some(6) });
        assert_eq!(
            field.details.as_deref(),
            Some("Shown to visitors while the store is closed.")
        );
    }

    #[test]
    fn dynamic_choice_source_yaml() {
        let field: Field = serde_yaml_ng::from_str(
            r#"
id: notify_page
title: Notification page
kind: select
choices:
  source: pages
"#,
        )
        .unwrap();
        assert_eq!(field.kind.choices(), Some(&ChoiceSource::Pages));
    }

    #[test]
    fn multi_detection() {
        assert!(FieldKind::Gallery.is_multi());
        assert!(FieldKind::Select {
            choices: ChoiceSource::fixed(vec![]),
            multiple: true
        }
        .is_multi());
        assert!(!FieldKind::ImageSelect {
            choices: ChoiceSource::fixed(vec![]),
            multiple: false
        }
        .is_multi());
        assert!(!FieldKind::Text.is_multi());
    }

    #[test]
    fn page_show_submit_defaults_true() {
        let page: Page = serde_yaml_ng::from_str(
            r#"
id: general
title: General
"#,
        )
        .unwrap();
        assert!(page.show_submit);
        assert_eq!(page.nav_label(), "General");
    }

    #[test]
    fn choice_display_label_falls_back_to_value() {
        assert_eq!(Choice::new("open").display_label(), "open");
        assert_eq!(Choice::labeled("open", "Open now").display_label(), "Open now");
    }
}
