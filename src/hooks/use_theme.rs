use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

/// Colour scheme for the dashboard and its charts
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Theme preference, defaulting to the system colour scheme, persisted to
/// localStorage and mirrored to a `data-theme` attribute on `<html>`.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_preference().unwrap_or_else(system_preference));

    // Effect: apply to DOM and persist on change
    {
        let value = *theme;
        use_effect_with(value, move |theme| {
            apply_to_dom(*theme);
            save_preference(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = match *theme {
                Theme::Dark => Theme::Light,
                Theme::Light => Theme::Dark,
            };
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}

/// Detect the system's preferred colour scheme
fn system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

/// Apply the theme by setting a data-theme attribute on the document element
fn apply_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", theme.attribute());
    }
}

fn load_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        gloo::console::warn!(format!("Failed to save theme: {e:?}"));
    }
}
