//! Core types for SQL Stitcher
//!
//! This module defines the data model shared by the loader, the patch rules,
//! and the assembler: the source-file manifest entry and the keyed content
//! map the whole pipeline operates on.

use std::collections::HashMap;

use crate::error::{StitchError, StitchResult};

// ============================================================================
// SourceFile
// ============================================================================

/// One entry of the source manifest: a path relative to the configured root
/// directory plus the short key it is stored under in the [`ContentMap`].
///
/// The key doubles as the section label in the assembled output's
/// `BEGIN:`/`END:` banners, so keys must be unique across the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the root directory
    pub rel_path: &'static str,

    /// Short identifier used as the content-map key and banner label
    pub key: &'static str,
}

impl SourceFile {
    /// Create a new manifest entry
    pub const fn new(rel_path: &'static str, key: &'static str) -> Self {
        Self { rel_path, key }
    }
}

// ============================================================================
// ContentMap
// ============================================================================

/// Keyed map of loaded file contents.
///
/// Built once by the loader, mutated in place by each patch rule, and read in
/// manifest order by the assembler. Contents are never re-read from disk
/// after load. Looking up a key that was never loaded is a hard error
/// ([`StitchError::ContentMissing`]) rather than a silent skip — a missing
/// entry means the assembled artifact would be incomplete.
#[derive(Debug, Clone, Default)]
pub struct ContentMap {
    entries: HashMap<String, String>,
}

impl ContentMap {
    /// Create an empty content map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store content under a key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(key.into(), content.into());
    }

    /// Get the content for a key
    pub fn get(&self, key: &str) -> StitchResult<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| StitchError::content_missing(key))
    }

    /// Replace the content for an existing key.
    ///
    /// Unlike [`insert`](ContentMap::insert), this fails if the key was never
    /// loaded — patch rules may only rewrite entries that exist.
    pub fn set(&mut self, key: &str, content: impl Into<String>) -> StitchResult<()> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = content.into();
                Ok(())
            }
            None => Err(StitchError::content_missing(key)),
        }
    }

    /// Check whether a key has been loaded
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of loaded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_file_new() {
        let entry = SourceFile::new("migrations/002_enums.sql", "002_enums");
        assert_eq!(entry.rel_path, "migrations/002_enums.sql");
        assert_eq!(entry.key, "002_enums");
    }

    #[test]
    fn test_content_map_insert_get() {
        let mut map = ContentMap::new();
        map.insert("002_enums", "-- enums\n");

        assert_eq!(map.get("002_enums").unwrap(), "-- enums\n");
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("002_enums"));
    }

    #[test]
    fn test_content_map_get_missing_is_error() {
        let map = ContentMap::new();
        let err = map.get("012_integrations_tables").unwrap_err();
        assert!(matches!(err, StitchError::ContentMissing(_)));
        assert_eq!(
            err.to_string(),
            "No content loaded for key '012_integrations_tables'"
        );
    }

    #[test]
    fn test_content_map_set_replaces_existing() {
        let mut map = ContentMap::new();
        map.insert("009_rls_policies", "original");

        map.set("009_rls_policies", "patched").unwrap();
        assert_eq!(map.get("009_rls_policies").unwrap(), "patched");
    }

    #[test]
    fn test_content_map_set_missing_is_error() {
        let mut map = ContentMap::new();
        let err = map.set("011_app_settings", "patched").unwrap_err();
        assert!(matches!(err, StitchError::ContentMissing(_)));
    }

    #[test]
    fn test_content_map_empty() {
        let map = ContentMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }
}
