use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml. Everything is optional; a missing or
/// malformed file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tag picker options, in display order
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tags: default_tags(),
            ui: UiConfig::default(),
        }
    }
}

fn default_tags() -> Vec<String> {
    vec![
        "work".to_string(),
        "personal".to_string(),
        "urgent".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme color overrides by field name (hex strings)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-tag colors (hex strings); iteration order follows the file
    #[serde(default)]
    pub tag_colors: IndexMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            tag_colors: IndexMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tags, vec!["work", "personal", "urgent"]);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.tag_colors.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let config: Config = toml::from_str(
            r##"
tags = ["errand", "deep"]

[ui]
show_key_hints = false

[ui.colors]
background = "#101010"

[ui.tag_colors]
errand = "#4488FF"
deep = "#44DDFF"
"##,
        )
        .unwrap();
        assert_eq!(config.tags, vec!["errand", "deep"]);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#101010");
        // IndexMap preserves the file's order
        let keys: Vec<&String> = config.ui.tag_colors.keys().collect();
        assert_eq!(keys, vec!["errand", "deep"]);
    }
}
