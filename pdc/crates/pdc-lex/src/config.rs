//! Lexer configuration.

use serde::{Deserialize, Serialize};

use crate::position::DEFAULT_TAB_WIDTH;

/// Settings that influence a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Columns a tab character advances the position by.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,
}

fn default_tab_width() -> u32 {
    DEFAULT_TAB_WIDTH
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_width() {
        assert_eq!(LexerConfig::default().tab_width, 4);
    }

    #[test]
    fn test_deserialize_missing_field_uses_default() {
        let config: LexerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LexerConfig::default());

        let config: LexerConfig = serde_json::from_str(r#"{"tab_width": 2}"#).unwrap();
        assert_eq!(config.tab_width, 2);
    }
}
