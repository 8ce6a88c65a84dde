use dioxus::prelude::*;
use std::str::FromStr;

use crate::shared::constants::THEME_STORAGE_KEY;
use crate::shared::utils::dom;

/// Page colour scheme, stored in localStorage as `"light"` or `"dark"`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Label shown next to the toggle
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark Mode",
            Theme::Light => "Light Mode",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            _ => Ok(Theme::Dark), // Default to dark
        }
    }
}

/// Theme saved by a previous visit, dark when absent
pub fn stored_theme() -> Theme {
    dom::storage_get(THEME_STORAGE_KEY)
        .and_then(|saved| saved.parse().ok())
        .unwrap_or_default()
}

/// Put the theme class on `<body>`
pub fn apply_theme(theme: Theme) {
    dom::set_body_class(theme.as_str());
}

pub fn save_theme(theme: Theme) {
    dom::storage_set(THEME_STORAGE_KEY, theme.as_str());
}

/// Current theme, loaded from localStorage and applied on mount
pub fn use_theme() -> Signal<Theme> {
    let theme = use_signal(stored_theme);

    use_effect(move || {
        apply_theme(theme());
    });

    theme
}
