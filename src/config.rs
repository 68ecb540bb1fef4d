//! Runtime configuration from the environment.
//!
//! `.env` is loaded first (if present), then:
//!
//! - `WALKCAL_LANG`: output language (`fr`, `en`, or a locale tag like `en_US.UTF-8`)
//! - `WALKCAL_LOG`: tracing filter directive (default `warn`)
//!
//! Command-line flags take precedence over both.

use crate::domain::Locale;

pub const LANG_VAR: &str = "WALKCAL_LANG";
pub const LOG_VAR: &str = "WALKCAL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub log_filter: String,
    /// `WALKCAL_LANG` value that named no supported language.
    ///
    /// Config is read before logging is installed, so the front end reports it.
    pub unsupported_lang: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            unsupported_lang: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unknown languages fall back to the default locale and are kept in
    /// `unsupported_lang`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(tag) = lookup(LANG_VAR) {
            match Locale::from_tag(&tag) {
                Some(locale) => config.locale = locale,
                None => config.unsupported_lang = Some(tag),
            }
        }

        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    /// Apply a `--lang` override.
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}
