//! Dotted scope-name identifiers.
//!
//! A scope name is a hierarchical lexical category such as
//! `source.rust.keyword.control`, split on `.` into ordered components.
//! The empty scope (zero components) is the universal root: it matches
//! everything and is the selector used by global theme settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A hierarchical scope identifier, immutable once constructed.
///
/// Serialized as its dotted string form. Interior empty components
/// (`"a..b"`) are rejected at parse time; only the fully empty string is
/// valid as the root scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScopeName {
    components: Vec<String>,
}

impl ScopeName {
    /// The universal root scope (no components).
    pub fn root() -> Self {
        Self::default()
    }

    /// The ordered path components of this scope.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for the universal root scope.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromStr for ScopeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        let components: Vec<String> = s.split('.').map(str::to_string).collect();
        if components.iter().any(|c| c.is_empty()) {
            return Err(ThemeError::EmptyScopeComponent {
                name: s.to_string(),
            });
        }
        Ok(Self { components })
    }
}

impl TryFrom<String> for ScopeName {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScopeName> for String {
    fn from(scope: ScopeName) -> Self {
        scope.to_string()
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        let scope: ScopeName = "source.rust.comment".parse().unwrap();
        assert_eq!(scope.components(), ["source", "rust", "comment"]);
        assert_eq!(scope.len(), 3);
        assert_eq!(scope.to_string(), "source.rust.comment");
    }

    #[test]
    fn test_empty_string_is_root() {
        let scope: ScopeName = "".parse().unwrap();
        assert!(scope.is_empty());
        assert_eq!(scope, ScopeName::root());
    }

    #[test]
    fn test_interior_empty_component_rejected() {
        assert!("a..b".parse::<ScopeName>().is_err());
        assert!(".a".parse::<ScopeName>().is_err());
        assert!("a.".parse::<ScopeName>().is_err());
        assert!(".".parse::<ScopeName>().is_err());
    }

    #[test]
    fn test_serde_string_repr() {
        let scope: ScopeName = "keyword.control".parse().unwrap();
        let json = serde_json::to_string(&scope).unwrap();
        assert_eq!(json, "\"keyword.control\"");
        let back: ScopeName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scope);
    }
}
