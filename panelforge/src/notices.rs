//! Dependency notices for required companion components.

use maud::{html, Markup};
use panelforge_host::{ComponentEnv, ComponentStatus};
use panelforge_schema::RequiredComponent;

/// Build the admin notice for missing or inactive required components.
///
/// Returns `None` when every component is active. The notice names all
/// required components and carries one activate/install button per
/// component that needs attention.
pub fn dependency_notice(
    components: &[RequiredComponent],
    env: &dyn ComponentEnv,
) -> Option<Markup> {
    let mut buttons: Vec<(String, String)> = Vec::new();
    for component in components {
        match env.status(&component.slug) {
            ComponentStatus::Active => continue,
            ComponentStatus::Installed => buttons.push((
                env.activation_url(&component.slug),
                format!("Activate {}", component.label),
            )),
            ComponentStatus::Missing => buttons.push((
                env.install_url(&component.slug),
                format!("Install {}", component.label),
            )),
        }
    }
    if buttons.is_empty() {
        return None;
    }

    Some(html! {
        div class="notice notice-error is-dismissible" {
            p {
                "This panel requires "
                @for (i, component) in components.iter().enumerate() {
                    @if i > 0 { ", " }
                    strong { (component.label) }
                }
                " to be installed and activated."
            }
            p {
                @for (url, text) in &buttons {
                    a class="button-primary" href=(url) { (text) }
                    " "
                }
            }
        }
    })
}
