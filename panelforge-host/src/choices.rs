//! Choice-source resolution against a content provider.

use panelforge_schema::{Choice, ChoiceSource};

use crate::error::Result;
use crate::traits::{ContentProvider, ContentRef};

fn to_choices(refs: Vec<ContentRef>) -> Vec<Choice> {
    refs.into_iter()
        .map(|r| Choice::labeled(r.id, r.title))
        .collect()
}

/// Resolve a choice source to a concrete list.
///
/// Static and timezone sources never fail; dynamic sources propagate the
/// provider's errors (including `NotFound` for unknown taxonomies and post
/// types) so callers can decide whether to degrade.
pub async fn resolve_choices(
    source: &ChoiceSource,
    provider: &dyn ContentProvider,
) -> Result<Vec<Choice>> {
    match source {
        ChoiceSource::Static { choices } => Ok(choices.clone()),
        ChoiceSource::Pages => Ok(to_choices(provider.pages().await?)),
        ChoiceSource::Users => Ok(to_choices(provider.users().await?)),
        ChoiceSource::Terms { taxonomy } => Ok(to_choices(provider.terms(taxonomy).await?)),
        ChoiceSource::Posts { post_type, limit } => {
            Ok(to_choices(provider.posts(post_type, *limit).await?))
        }
        ChoiceSource::Timezones => Ok(timezones()),
    }
}

/// All timezone identifiers, labeled with `/` rendered as ` > `
/// ("Europe > Brussels").
pub fn timezones() -> Vec<Choice> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| Choice::labeled(tz.name(), tz.name().replace('/', " > ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;
    use crate::HostError;

    #[test]
    fn timezone_labels_use_breadcrumbs() {
        let zones = timezones();
        assert!(!zones.is_empty());
        let brussels = zones
            .iter()
            .find(|c| c.value == "Europe/Brussels")
            .expect("Europe/Brussels listed");
        assert_eq!(brussels.label.as_deref(), Some("Europe > Brussels"));
    }

    #[tokio::test]
    async fn static_source_passes_through() {
        let host = MemoryHost::new();
        let source = ChoiceSource::fixed(vec![Choice::new("open"), Choice::new("closed")]);
        let choices = resolve_choices(&source, &host).await.unwrap();
        assert_eq!(choices.len(), 2);
    }

    #[tokio::test]
    async fn dynamic_source_lists_provider_content() {
        let host = MemoryHost::new().with_page("12", "About us");
        let choices = resolve_choices(&ChoiceSource::Pages, &host).await.unwrap();
        assert_eq!(choices, vec![Choice::labeled("12", "About us")]);
    }

    #[tokio::test]
    async fn unknown_taxonomy_propagates_not_found() {
        let host = MemoryHost::new();
        let source = ChoiceSource::Terms {
            taxonomy: "genre".into(),
        };
        let err = resolve_choices(&source, &host).await.unwrap_err();
        assert!(matches!(err, HostError::NotFound { .. }));
    }
}
