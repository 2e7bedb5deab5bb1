//! Newtype wrappers for semantic IDs
//!
//! These types keep bookmark names and sheet names from being mixed up with
//! arbitrary display strings.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A bookmark name inside a word-processing document (the target of a TOC link).
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Word rejects bookmark names longer than this.
    pub const MAX_LEN: usize = 40;

    /// Creates a new AnchorId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this anchor ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a worksheet tab.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SheetName(Arc<str>);

impl SheetName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as it must appear inside a formula or defined name,
    /// e.g. `'Traceability Matrix'`.
    pub fn quoted(&self) -> String {
        format!("'{}'", self.0.replace('\'', "''"))
    }
}

impl From<&str> for SheetName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id_creation() {
        let id1 = AnchorId::new("_Toc_001_scope");
        let id2 = AnchorId::from("_Toc_001_scope");
        let id3 = AnchorId::from(String::from("_Toc_001_scope"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "_Toc_001_scope");
    }

    #[test]
    fn test_sheet_name_quoting() {
        assert_eq!(SheetName::from("Coverage Summary").quoted(), "'Coverage Summary'");
        assert_eq!(SheetName::from("Bob's").quoted(), "'Bob''s'");
    }

    #[test]
    fn test_type_safety() {
        let anchor = AnchorId::new("test");
        let sheet = SheetName::new("test");

        // Different types, same underlying text.
        assert_eq!(anchor.as_str(), sheet.as_str());
    }
}
