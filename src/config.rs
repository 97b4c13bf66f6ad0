use crate::translator::TranslateOptions;
use std::path::PathBuf;
use tracing::warn;

/// Path of the persisted dictionary
pub const STORE_ENV: &str = "LEXMAP_STORE";
pub const PREFER_PHRASES_ENV: &str = "LEXMAP_PREFER_PHRASES";
pub const MARK_UNKNOWN_ENV: &str = "LEXMAP_MARK_UNKNOWN";

pub const DEFAULT_STORE_FILE: &str = "lexmap-dictionary.json";

/// Runtime settings, resolved from the environment and then overridden by
/// command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub options: TranslateOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            options: TranslateOptions::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(path) = lookup(STORE_ENV).filter(|p| !p.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(PREFER_PHRASES_ENV) {
            config.options.prefer_phrases = parse_switch(PREFER_PHRASES_ENV, &value);
        }
        if let Some(value) = lookup(MARK_UNKNOWN_ENV) {
            config.options.mark_unknown = parse_switch(MARK_UNKNOWN_ENV, &value);
        }

        config
    }
}

/// `1`, `true`, `yes` and `on` switch a flag on; anything else leaves it off.
fn parse_switch(name: &str, value: &str) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            warn!("{} has unrecognised value '{}', treating it as off", name, other);
            false
        }
    }
}
