//! `[theme.outline]` configuration for the "on this page" outline.
//!
//! # Example
//!
//! ```toml
//! [theme.outline]
//! label = "Contents"
//! level = [2, 4]   # or `level = 2`, or `level = "deep"`
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Heading shown above the outline.
    pub label: String,

    /// Heading levels included in the outline.
    pub level: OutlineLevel,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            label: "On this page".into(),
            level: OutlineLevel::Range(2, 3),
        }
    }
}

/// Heading level selection: a single level, an inclusive range, or `"deep"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutlineLevel {
    Single(u8),
    Range(u8, u8),
    Keyword(OutlineKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKeyword {
    /// Levels 2 through 6.
    Deep,
}

impl OutlineLevel {
    /// Inclusive `(min, max)` heading levels.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Self::Single(n) => (n, n),
            Self::Range(min, max) => (min, max),
            Self::Keyword(OutlineKeyword::Deep) => (2, 6),
        }
    }
}

impl OutlineConfig {
    pub const LEVEL: FieldPath = FieldPath::new("theme.outline.level");

    /// Levels must lie in `1..=6` and form a non-empty range.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let (min, max) = self.level.bounds();
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            diag.error_with_hint(
                Self::LEVEL,
                format!("heading levels must be between 1 and 6, got [{min}, {max}]"),
                "use a number, a [min, max] pair or \"deep\"",
            );
        } else if min > max {
            diag.error(
                Self::LEVEL,
                format!("minimum level {min} is greater than maximum level {max}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.outline.label, "On this page");
        assert_eq!(config.theme.outline.level.bounds(), (2, 3));
    }

    #[test]
    fn test_level_forms() {
        let single = test_parse_config("[theme.outline]\nlevel = 2");
        assert_eq!(single.theme.outline.level, OutlineLevel::Single(2));

        let range = test_parse_config("[theme.outline]\nlevel = [2, 4]");
        assert_eq!(range.theme.outline.level.bounds(), (2, 4));

        let deep = test_parse_config("[theme.outline]\nlevel = \"deep\"");
        assert_eq!(deep.theme.outline.level.bounds(), (2, 6));
    }

    #[test]
    fn test_validate_range() {
        let mut diag = ConfigDiagnostics::new();
        OutlineConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());

        for level in [
            OutlineLevel::Single(0),
            OutlineLevel::Range(2, 7),
            OutlineLevel::Range(4, 2),
        ] {
            let mut diag = ConfigDiagnostics::new();
            OutlineConfig {
                level,
                ..Default::default()
            }
            .validate(&mut diag);
            assert!(diag.has_errors(), "{level:?} should be rejected");
        }
    }
}
