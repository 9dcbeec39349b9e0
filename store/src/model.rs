//! Bookmark data model.
//!
//! [`Bookmark`] is the sole persisted entity. [`BookmarkField`] is the
//! closed set of columns an `update` may target; it is parsed once at the
//! boundary so raw user text never reaches SQL as a column name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A named alias mapped to a URI.
///
/// # Examples
///
/// ```
/// use lynx_store::Bookmark;
///
/// let bm = Bookmark::new("home", "https://example.com");
/// assert_eq!(bm.alias, "home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Unique short name identifying the bookmark.
    pub alias: String,
    /// The resource location stored for the alias.
    pub uri: String,
}

impl Bookmark {
    /// Creates a bookmark from an alias/uri pair.
    pub fn new(alias: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            uri: uri.into(),
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.alias, self.uri)
    }
}

/// Column an `update` operation may target.
///
/// Parsing is a case-sensitive exact match against `alias`/`uri`; anything
/// else (including the literal words `set` and `to` if mis-positioned) is
/// rejected as [`StoreError::InvalidField`] before a statement is prepared.
///
/// # Examples
///
/// ```
/// use lynx_store::BookmarkField;
///
/// let field: BookmarkField = "uri".parse().unwrap();
/// assert_eq!(field.column(), "uri");
/// assert!("Uri".parse::<BookmarkField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkField {
    /// The `alias` column (rename).
    Alias,
    /// The `uri` column.
    Uri,
}

impl BookmarkField {
    /// Returns the SQL column name for this field.
    pub fn column(self) -> &'static str {
        match self {
            BookmarkField::Alias => "alias",
            BookmarkField::Uri => "uri",
        }
    }
}

impl FromStr for BookmarkField {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "alias" => Ok(BookmarkField::Alias),
            "uri" => Ok(BookmarkField::Uri),
            other => Err(StoreError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for BookmarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parses_whitelisted_names() {
        assert_eq!("alias".parse::<BookmarkField>().unwrap(), BookmarkField::Alias);
        assert_eq!("uri".parse::<BookmarkField>().unwrap(), BookmarkField::Uri);
    }

    #[test]
    fn test_field_match_is_case_sensitive() {
        assert!("Alias".parse::<BookmarkField>().is_err());
        assert!("URI".parse::<BookmarkField>().is_err());
    }

    #[test]
    fn test_misplaced_keywords_are_rejected_not_guessed() {
        assert!("set".parse::<BookmarkField>().is_err());
        assert!("to".parse::<BookmarkField>().is_err());
    }

    #[test]
    fn test_unknown_field_error_carries_the_token() {
        let err = "color".parse::<BookmarkField>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(ref f) if f == "color"));
    }

    #[test]
    fn test_bookmark_display_is_alias_dash_uri() {
        let bm = Bookmark::new("home", "https://example.com");
        assert_eq!(bm.to_string(), "home - https://example.com");
    }
}
