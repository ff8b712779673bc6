/// Where form submissions are posted. The static host picks up `POST /`
/// bodies carrying a `form-name` field; `AKU_FORM_ENDPOINT` at build time
/// points a local build at a form host proxy instead.
pub fn get_form_endpoint() -> &'static str {
    option_env!("AKU_FORM_ENDPOINT").unwrap_or("/")
}

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Pixels scrolled before the navbar switches to its compact pill.
pub const NAV_COMPACT_THRESHOLD: f64 = 50.0;

pub const HERO_AUTOPLAY_MS: u32 = 6_000;

/// Delay before scrolling to a section after navigating back home, so the
/// home page has rendered its anchors.
pub const SECTION_SCROLL_DELAY_MS: u32 = 100;

/// Local hours treated as night when no theme has been chosen yet:
/// dark from `NIGHT_STARTS_AT` until `NIGHT_ENDS_AT` (exclusive).
pub const NIGHT_STARTS_AT: u32 = 18;
pub const NIGHT_ENDS_AT: u32 = 6;
