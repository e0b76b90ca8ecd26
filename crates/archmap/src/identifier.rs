//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with a string-interner based approach.
//! Nodes are keyed by `Id`, and edges and clusters refer to nodes by `Id`,
//! so the same handful of identifiers is compared and hashed many times per run.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// Two `Id`s created from the same string are equal and share storage.
///
/// # Examples
///
/// ```
/// use archmap::identifier::Id;
///
/// let gateway = Id::new("api_gateway");
/// let storage = Id::new("s3_bucket");
///
/// assert_ne!(gateway, storage);
/// assert_eq!(gateway, "api_gateway");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("api_gateway");
        let id2 = Id::new("api_gateway");
        let id3 = Id::new("s3_bucket");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "api_gateway");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("cloudwatch");
        assert_eq!(format!("{}", id), "cloudwatch");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "vector_index".into();
        let id2 = Id::new("vector_index");

        assert_eq!(id1, id2);
        assert_eq!(id1, "vector_index");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id3, "copy_test");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("secrets_manager");

        assert!(id == "secrets_manager");
        assert!(id != "ssm_parameter_store");

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "non-empty");
    }
}
