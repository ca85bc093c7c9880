//! CLI configuration from environment.

use std::env;
use std::path::PathBuf;

const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Map definition loaded at startup
    pub map_file: Option<PathBuf>,
    /// Prompt shown by the interactive loop
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_file: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            map_file: var("ORIENTEERING_MAP").map(PathBuf::from),
            prompt: var("ORIENTEERING_PROMPT").unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn reads_map_and_prompt() {
        let vars: HashMap<&str, &str> = [
            ("ORIENTEERING_MAP", "maps/forest.json"),
            ("ORIENTEERING_PROMPT", "orienteering> "),
        ]
        .into();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.map_file, Some(PathBuf::from("maps/forest.json")));
        assert_eq!(config.prompt, "orienteering> ");
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = Config::from_lookup(|_| Some(String::new()));
        assert_eq!(config, Config::default());
    }
}
