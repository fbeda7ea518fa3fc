//! Dashboard tabs

use std::str::FromStr;
use strum::IntoEnumIterator;
use thiserror::Error;

/// The four mutually exclusive panel groups.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum TabId {
    #[default]
    Overview,
    Model,
    Business,
    Features,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("unknown tab {0:?}, expected one of: overview, model, business, features")]
    Unknown(String),
}

impl TabId {
    /// Parses a tab id, rejecting anything outside the four known ids.
    pub fn parse(id: &str) -> Result<Self, TabError> {
        TabId::from_str(id).map_err(|_| TabError::Unknown(id.to_string()))
    }

    /// Navigation label: the id with its first letter capitalized.
    pub fn label(&self) -> String {
        let id = self.as_ref();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Position in the navigation bar.
    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Model => 1,
            TabId::Business => 2,
            TabId::Features => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        TabId::iter().nth(index)
    }

    /// Next tab to the right, wrapping.
    pub fn next(&self) -> Self {
        let count = TabId::iter().count();
        TabId::from_index((self.index() + 1) % count).unwrap_or_default()
    }

    /// Next tab to the left, wrapping.
    pub fn prev(&self) -> Self {
        let count = TabId::iter().count();
        TabId::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}
