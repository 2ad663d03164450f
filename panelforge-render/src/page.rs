//! Whole-page assembly: heading, nav tabs, sections, submit form.

use std::collections::HashMap;

use maud::{html, Markup, PreEscaped};
use panelforge_schema::{Page, PanelConfig};

use crate::assets;
use crate::renderer::{FieldContext, Renderer};

/// The nav-tab row linking every page in display order. Links are
/// `{base}?tab={page_id}`; the current page gets the active class.
pub fn nav_tabs(config: &PanelConfig, current: &str, base: &str) -> Markup {
    html! {
        nav class="nav-tab-wrapper" {
            @for page in config.ordered_pages() {
                a href=(format!("{base}?tab={}", page.id))
                    class=(if page.id == current { "nav-tab nav-tab-active" } else { "nav-tab" }) {
                    (page.nav_label())
                }
            }
        }
    }
}

/// Section headings, descriptions, and field rows for one page.
///
/// `contexts` maps field ids to their pre-resolved render inputs; fields
/// missing from it render against an empty context.
pub fn render_sections(
    renderer: &mut Renderer,
    page: &Page,
    contexts: &HashMap<String, FieldContext>,
) -> Markup {
    let empty = FieldContext::default();
    html! {
        @for section in &page.sections {
            div class="pf-section-title" { (section.title) }
            @if let Some(description) = &section.description {
                p { (description) }
            }
            @for field in &section.fields {
                (renderer.field_row(field, contexts.get(&field.id).unwrap_or(&empty)))
            }
        }
    }
}

/// A full settings screen: heading, nav tabs, sections wrapped in a post
/// form with a submit button when the page asks for one, plus the base
/// field style.
pub fn render_page(
    config: &PanelConfig,
    page: &Page,
    contexts: &HashMap<String, FieldContext>,
    base: &str,
) -> Markup {
    let mut renderer = Renderer::new();
    if let Some(notice) = &config.disabled_notice {
        renderer = renderer.with_disabled_notice(notice);
    }
    let body = render_sections(&mut renderer, page, contexts);

    html! {
        div class="wrap" {
            h2 { (config.menu.page_title) }
            (nav_tabs(config, &page.id, base))
            @if page.show_submit {
                form class="pf-settings-form" method="post" action=[config.form_action.as_deref()] {
                    (body)
                    p class="submit" {
                        input type="submit" class="button button-primary" value="Save Changes";
                    }
                }
            } @else {
                (body)
            }
            style { (PreEscaped(assets::BASE_STYLE)) }
        }
    }
}
