use serde::{Deserialize, Serialize};
use std::fmt;

/// How the active background value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum BackgroundMode {
    /// Background image set from a CSS image reference.
    Static,
    /// Full-viewport looping video element.
    #[default]
    Live,
    /// Flat background color.
    Solid,
}

impl BackgroundMode {
    /// Lowercase name used in IPC payloads and DOM ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Static => "static",
            BackgroundMode::Live => "live",
            BackgroundMode::Solid => "solid",
        }
    }

    /// Parse an IPC mode string. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "static" => Some(BackgroundMode::Static),
            "live" => Some(BackgroundMode::Live),
            "solid" => Some(BackgroundMode::Solid),
            _ => None,
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category dropdown in the selection menu. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Static,
    Live,
    Solid,
}

impl MenuCategory {
    /// Lowercase name used in IPC payloads and DOM ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Static => "static",
            MenuCategory::Live => "live",
            MenuCategory::Solid => "solid",
        }
    }

    /// Parse an IPC category string. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "static" => Some(MenuCategory::Static),
            "live" => Some(MenuCategory::Live),
            "solid" => Some(MenuCategory::Solid),
            _ => None,
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active background: exactly one (mode, value) pair at any time.
///
/// The value is opaque and interpreted according to the mode: a CSS image
/// reference for `Static`, a media URL for `Live`, a color string for `Solid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundDescriptor {
    pub mode: BackgroundMode,
    pub value: String,
}

impl BackgroundDescriptor {
    pub fn new(mode: BackgroundMode, value: impl Into<String>) -> Self {
        Self {
            mode,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [
            BackgroundMode::Static,
            BackgroundMode::Live,
            BackgroundMode::Solid,
        ] {
            assert_eq!(BackgroundMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn mode_parse_rejects_unknown() {
        assert_eq!(BackgroundMode::parse("gradient"), None);
        assert_eq!(BackgroundMode::parse("Static"), None); // case-sensitive
        assert_eq!(BackgroundMode::parse(""), None);
    }

    #[test]
    fn mode_serde_uses_snake_case() {
        let json = serde_json::to_string(&BackgroundMode::Static).unwrap();
        assert_eq!(json, "\"static\"");
    }

    #[test]
    fn default_mode_is_live() {
        assert_eq!(BackgroundMode::default(), BackgroundMode::Live);
    }

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            MenuCategory::Static,
            MenuCategory::Live,
            MenuCategory::Solid,
        ] {
            assert_eq!(MenuCategory::parse(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn category_parse_rejects_unknown() {
        assert_eq!(MenuCategory::parse("upload"), None);
        assert_eq!(MenuCategory::parse("SOLID"), None);
    }
}
