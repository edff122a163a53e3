use crate::error::{Result, ScopeError};
use std::fmt;
use std::str::FromStr;

/// A class selector that every scoped rule is nested under, e.g. `.dashboard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePrefix(String);

impl ScopePrefix {
    /// Normalizes a raw scope token. `dashboard` and `.dashboard` both give
    /// `.dashboard`.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let class = trimmed.strip_prefix('.').unwrap_or(trimmed);

        let invalid = class.is_empty()
            || class
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | ','));
        if invalid {
            return Err(ScopeError::InvalidPrefix(raw.to_string()));
        }

        Ok(ScopePrefix(format!(".{}", class)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ScopePrefix {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self> {
        ScopePrefix::new(s)
    }
}

impl AsRef<str> for ScopePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_missing_dot() {
        assert_eq!(ScopePrefix::new("dashboard").unwrap().as_str(), ".dashboard");
    }

    #[test]
    fn test_keeps_existing_dot() {
        assert_eq!(
            ScopePrefix::new(".meus-carros-page").unwrap().as_str(),
            ".meus-carros-page"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(ScopePrefix::new("  page \n").unwrap().to_string(), ".page");
    }

    #[test]
    fn test_rejects_empty_tokens() {
        assert!(matches!(
            ScopePrefix::new(""),
            Err(ScopeError::InvalidPrefix(_))
        ));
        assert!(matches!(
            ScopePrefix::new("."),
            Err(ScopeError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_rejects_selector_syntax() {
        for raw in ["my page", "a,b", "x{"] {
            assert!(ScopePrefix::new(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_parses_from_str() {
        let prefix: ScopePrefix = "cards".parse().unwrap();
        assert_eq!(prefix.as_ref(), ".cards");
    }
}
