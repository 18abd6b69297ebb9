//! Runtime configuration from the environment.

use std::path::PathBuf;

use aanya_inventory::{DEFAULT_FILENAME_PREFIX, ExportOptions};

pub const EXPORT_PREFIX_ENV: &str = "AANYA_EXPORT_PREFIX";
pub const SEED_ENV: &str = "AANYA_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filename prefix for CSV exports.
    pub export_prefix: String,
    /// JSON seed file; the built-in sample list is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let export_prefix = get(EXPORT_PREFIX_ENV).unwrap_or_else(|| {
            tracing::debug!("{EXPORT_PREFIX_ENV} not set; using default export prefix");
            DEFAULT_FILENAME_PREFIX.to_string()
        });

        Self {
            export_prefix,
            seed_path: get(SEED_ENV).map(PathBuf::from),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_seed_override(mut self, seed: Option<PathBuf>) -> Self {
        if seed.is_some() {
            self.seed_path = seed;
        }
        self
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            filename_prefix: self.export_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_prefix_and_seed() {
        let config = Config::from_lookup(lookup_from(&[
            (EXPORT_PREFIX_ENV, "boutique"),
            (SEED_ENV, "/tmp/items.json"),
        ]));
        assert_eq!(config.export_prefix, "boutique");
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/items.json")));
        assert_eq!(config.export_options().filename_prefix, "boutique");
    }

    #[test]
    fn blank_values_are_ignored_and_flags_override() {
        let config = Config::from_lookup(lookup_from(&[(EXPORT_PREFIX_ENV, "  "), (SEED_ENV, "a.json")]))
            .with_seed_override(Some(PathBuf::from("b.json")));
        assert_eq!(config.export_prefix, DEFAULT_FILENAME_PREFIX);
        assert_eq!(config.seed_path, Some(PathBuf::from("b.json")));
    }
}
