use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// localStorage key holding the preference.
pub const STORAGE_KEY: &str = "theme-preference";

/// Attribute set on `<html>`, the stylesheet keys off it.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Name of the icon shown next to the switch.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "moon",
            Theme::Light => "sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown theme `{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(String::from(other))),
        }
    }
}

/// Where the preference is persisted. Both operations are best effort.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;

    fn save(&self, value: &str);
}

/// In-process store, used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(String::from(value))),
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(String::from(value));
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, value: &str) {
        (**self).save(value)
    }
}

/// The current theme together with the store it is persisted to.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Reads the stored preference, falling back to `default` when nothing
    /// (or garbage) is stored.
    pub fn load(store: S, default: Theme) -> Self {
        let current = match store.load() {
            Some(value) => value.parse().unwrap_or_else(|error| {
                log::warn!("ignoring stored theme: {}", error);
                default
            }),
            None => default,
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.save(theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::{apply_to_root, LocalStorage};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{Theme, ThemeStore, ROOT_ATTRIBUTE, STORAGE_KEY};

    /// `window.localStorage`, unavailable storage (private browsing, no
    /// window) reads as empty and ignores writes.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorage;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    impl ThemeStore for LocalStorage {
        fn load(&self) -> Option<String> {
            storage()?.get_item(STORAGE_KEY).ok()?
        }

        fn save(&self, value: &str) {
            let Some(storage) = storage() else {
                return;
            };
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("could not save the theme preference to localStorage");
            }
        }
    }

    pub fn apply_to_root(theme: Theme) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            if root.set_attribute(ROOT_ATTRIBUTE, theme.as_str()).is_err() {
                log::warn!("could not set {} on the root element", ROOT_ATTRIBUTE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_known_names() {
        assert_eq!(Ok(Theme::Dark), "dark".parse());
        assert_eq!(Ok(Theme::Light), "light".parse());
        assert_eq!(
            Err(UnknownTheme(String::from("Dark"))),
            "Dark".parse::<Theme>()
        );
    }

    #[test]
    fn falls_back_to_the_default() {
        let store = MemoryStore::default();
        assert_eq!(Theme::Light, ThemePreference::load(&store, Theme::Light).current());

        let store = MemoryStore::with("sepia");
        assert_eq!(Theme::Dark, ThemePreference::load(&store, Theme::Dark).current());
    }

    #[test]
    fn stored_value_wins_over_the_default() {
        let store = MemoryStore::with("light");
        assert_eq!(Theme::Light, ThemePreference::load(&store, Theme::Dark).current());
    }

    #[test]
    fn toggle_persists_immediately() {
        let store = MemoryStore::default();
        let mut preference = ThemePreference::load(&store, Theme::Dark);

        assert_eq!(Theme::Light, preference.toggle());
        assert_eq!(Some(String::from("light")), store.load());
    }

    #[test]
    fn toggling_twice_then_reloading_restores_the_theme() {
        for initial in [Theme::Dark, Theme::Light] {
            let store = MemoryStore::default();
            let mut preference = ThemePreference::load(&store, initial);
            preference.toggle();
            preference.toggle();
            drop(preference);

            let reloaded = ThemePreference::load(&store, initial.toggled());
            assert_eq!(initial, reloaded.current());
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!("\"light\"", serde_json::to_string(&Theme::Light).unwrap());
        assert_eq!("dark", Theme::Dark.to_string());
    }
}
