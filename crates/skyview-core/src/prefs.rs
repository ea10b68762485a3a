//! User-facing preferences shared by the UI and the API client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Storage key under which the theme is persisted.
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme selected by a toggle control: checked means light.
    pub fn from_toggle(checked: bool) -> Self {
        if checked {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Whether a toggle control should be checked for this theme.
    pub fn is_light(&self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown preference value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownPreference {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownPreference {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub const STORAGE_KEY: &'static str = "language";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            other => Err(UnknownPreference {
                kind: "language",
                value: other.to_string(),
            }),
        }
    }
}
