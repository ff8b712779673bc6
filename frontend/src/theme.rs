use chrono::Timelike;
use log::warn;
use web_sys::window;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Dark through the night, light during the day.
    pub fn for_hour(hour: u32) -> Theme {
        if hour >= config::NIGHT_STARTS_AT || hour < config::NIGHT_ENDS_AT {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Where the chosen theme survives reloads.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Where the theme is shown: the `dark` class on the root element.
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

/// Persisted preference if it is a known value, else time of day.
pub fn resolve_theme(store: &impl ThemeStore, hour: u32) -> Theme {
    store
        .load()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_else(|| Theme::for_hour(hour))
}

pub fn init_theme(store: &impl ThemeStore, target: &impl ThemeTarget, hour: u32) -> Theme {
    let theme = resolve_theme(store, hour);
    target.apply(theme);
    theme
}

pub fn toggle_theme(current: Theme, store: &impl ThemeStore, target: &impl ThemeTarget) -> Theme {
    let next = current.toggled();
    target.apply(next);
    store.save(next.as_str());
    next
}

pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
            if storage.set_item(config::THEME_STORAGE_KEY, value).is_err() {
                warn!("Could not persist theme preference");
            }
        }
    }
}

pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            warn!("Could not switch root element to {} theme", theme.as_str());
        }
    }
}

pub fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[derive(Default)]
    struct RootFlag(Cell<bool>);

    impl ThemeTarget for RootFlag {
        fn apply(&self, theme: Theme) {
            self.0.set(theme.is_dark());
        }
    }

    #[test]
    fn night_hours_are_dark() {
        assert_eq!(Theme::for_hour(18), Theme::Dark);
        assert_eq!(Theme::for_hour(23), Theme::Dark);
        assert_eq!(Theme::for_hour(0), Theme::Dark);
        assert_eq!(Theme::for_hour(5), Theme::Dark);
        assert_eq!(Theme::for_hour(6), Theme::Light);
        assert_eq!(Theme::for_hour(17), Theme::Light);
    }

    #[test]
    fn persisted_choice_beats_clock() {
        let store = MemoryStore::default();
        store.save("light");
        assert_eq!(resolve_theme(&store, 22), Theme::Light);
        store.save("dark");
        assert_eq!(resolve_theme(&store, 12), Theme::Dark);
    }

    #[test]
    fn unknown_persisted_value_is_ignored() {
        let store = MemoryStore::default();
        store.save("sepia");
        assert_eq!(resolve_theme(&store, 12), Theme::Light);
        assert_eq!(resolve_theme(&MemoryStore::default(), 2), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_storage_and_root_flag() {
        let store = MemoryStore::default();
        store.save("dark");
        let root = RootFlag::default();

        let original = init_theme(&store, &root, 12);
        assert_eq!(original, Theme::Dark);
        assert!(root.0.get());

        let once = toggle_theme(original, &store, &root);
        assert_eq!(once, Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));
        assert!(!root.0.get());

        let twice = toggle_theme(once, &store, &root);
        assert_eq!(twice, original);
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert!(root.0.get());
    }

    #[test]
    fn every_toggle_is_persisted() {
        let store = MemoryStore::default();
        let root = RootFlag::default();
        let theme = init_theme(&store, &root, 9);
        assert_eq!(store.load(), None);
        toggle_theme(theme, &store, &root);
        assert_eq!(store.load().as_deref(), Some("dark"));
    }
}
