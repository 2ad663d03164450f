//! Option values and the fixed resolution order.
//!
//! A value is either a single string or a list of strings (gallery,
//! multi-select). Empty strings and lists whose members are all empty count
//! as absent, so resolution can fall through them.

use serde::{Deserialize, Serialize};

use crate::types::Field;

/// A persisted or configured value for one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OptionValue {
    Single(String),
    Many(Vec<String>),
}

impl OptionValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }

    /// An absent value — resolution falls through it.
    pub fn empty() -> Self {
        Self::Single(String::new())
    }

    /// Empty string, empty list, or a list of empty strings.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::Many(items) => items.iter().all(|s| s.is_empty()),
        }
    }

    /// The value as one string — first non-empty member for lists.
    pub fn as_single(&self) -> &str {
        match self {
            Self::Single(s) => s,
            Self::Many(items) => items
                .iter()
                .map(String::as_str)
                .find(|s| !s.is_empty())
                .unwrap_or(""),
        }
    }

    /// Non-empty members, treating a single value as a one-element list.
    pub fn members(&self) -> Vec<&str> {
        match self {
            Self::Single(s) if s.is_empty() => Vec::new(),
            Self::Single(s) => vec![s.as_str()],
            Self::Many(items) => items
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.members().contains(&value)
    }
}

impl Default for OptionValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// First non-empty of {persisted, explicit, default, fallback}.
pub fn resolve_value(
    persisted: Option<&OptionValue>,
    explicit: Option<&OptionValue>,
    default: Option<&OptionValue>,
    fallback: Option<&OptionValue>,
) -> OptionValue {
    [persisted, explicit, default, fallback]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(OptionValue::empty)
}

impl Field {
    /// Resolve this field's current value against a persisted value and an
    /// optional caller fallback.
    pub fn resolve(
        &self,
        persisted: Option<&OptionValue>,
        fallback: Option<&OptionValue>,
    ) -> OptionValue {
        resolve_value(
            persisted,
            self.value.as_ref(),
            self.default.as_ref(),
            fallback,
        )
    }
}
