use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, uppercased stock ticker symbol.
///
/// All lookups and storage go through this type, so case normalization
/// happens exactly once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s: String = value.into();
        let s = s.trim().to_uppercase();
        if s.is_empty() {
            return Err("Symbol cannot be empty");
        }
        if s.len() > 10 {
            return Err("Symbol too long (max 10 chars)");
        }
        // Listed tickers are alphanumeric, with '.' and '-' for share classes
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err("Symbol must be alphanumeric");
        }
        Ok(Symbol(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Symbol {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_to_uppercase() {
        let s = Symbol::new("aapl").unwrap();
        assert_eq!(s.as_str(), "AAPL");
        assert_eq!(s, Symbol::new(" AAPL ").unwrap());
    }

    #[test]
    fn test_share_class_tickers() {
        assert!(Symbol::new("BRK.B").is_ok());
        assert!(Symbol::new("BF-B").is_ok());
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("   ").is_err());
        assert!(Symbol::new("TOOLONGSYMBOL").is_err());
        assert!(Symbol::new("AA PL").is_err());
    }
}
