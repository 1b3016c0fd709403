// src/enricher/cache.rs
// =============================================================================
// The resolution cache: link text -> resolution state.
//
// Each key is in one of three states:
// - absent:   never requested
// - Pending:  a fetch has been triggered but has not landed yet
// - Resolved: metadata is available
//
// The Pending marker is what gives us "at most one fetch per link": a
// re-invocation that sees Pending (or Resolved) skips the key entirely.
//
// Merge rules:
// - the first Resolved write for a key wins
// - writing the same value again is a no-op
// - a later, different write for an already-resolved key is ignored
// Entries are only ever added; nothing is evicted while the cache lives.
// =============================================================================

use std::collections::HashMap;

use crate::resolver::LinkMetadata;

// Resolution state for one distinct link text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    /// Fetch triggered, result not yet merged
    Pending,
    /// Metadata available; immutable from here on
    Resolved(LinkMetadata),
}

// Cache of resolved link metadata, scoped to one subject (one text body
// binding). A new subject means a new cache.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, ResolutionState>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved metadata for a link, if the fetch has landed
    pub fn get(&self, locator: &str) -> Option<&LinkMetadata> {
        match self.entries.get(locator) {
            Some(ResolutionState::Resolved(metadata)) => Some(metadata),
            _ => None,
        }
    }

    /// True when the key is pending OR resolved - either way, no new fetch
    /// should be triggered for it
    pub fn is_known(&self, locator: &str) -> bool {
        self.entries.contains_key(locator)
    }

    /// Marks a key as in-flight. Does nothing if the key is already known,
    /// so a pending or resolved entry is never downgraded.
    pub fn mark_pending(&mut self, locator: &str) {
        self.entries
            .entry(locator.to_string())
            .or_insert(ResolutionState::Pending);
    }

    /// Merges a resolution result. Idempotent: the first resolved value for
    /// a key sticks, later writes (same or different) change nothing.
    pub fn merge(&mut self, locator: String, metadata: LinkMetadata) {
        if matches!(self.entries.get(&locator), Some(ResolutionState::Resolved(_))) {
            return;
        }
        self.entries
            .insert(locator, ResolutionState::Resolved(metadata));
    }

    /// Number of keys with resolved metadata
    pub fn resolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|state| matches!(state, ResolutionState::Resolved(_)))
            .count()
    }

    /// Total number of known keys, pending included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str) -> LinkMetadata {
        LinkMetadata {
            title: title.to_string(),
            favicon: None,
        }
    }

    #[test]
    fn test_absent_key_is_unknown() {
        let cache = ResolutionCache::new();
        assert!(!cache.is_known("https://a.com"));
        assert_eq!(cache.get("https://a.com"), None);
    }

    #[test]
    fn test_pending_is_known_but_not_resolved() {
        let mut cache = ResolutionCache::new();
        cache.mark_pending("https://a.com");

        assert!(cache.is_known("https://a.com"));
        assert_eq!(cache.get("https://a.com"), None);
        assert_eq!(cache.resolved_count(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_merge_resolves_pending() {
        let mut cache = ResolutionCache::new();
        cache.mark_pending("https://a.com");
        cache.merge("https://a.com".to_string(), metadata("A"));

        assert_eq!(cache.get("https://a.com").unwrap().title, "A");
        assert_eq!(cache.resolved_count(), 1);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut cache = ResolutionCache::new();
        cache.merge("https://a.com".to_string(), metadata("A"));
        cache.merge("https://a.com".to_string(), metadata("A"));

        assert_eq!(cache.get("https://a.com").unwrap().title, "A");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_resolved_value_wins() {
        let mut cache = ResolutionCache::new();
        cache.merge("https://a.com".to_string(), metadata("first"));
        cache.merge("https://a.com".to_string(), metadata("second"));

        assert_eq!(cache.get("https://a.com").unwrap().title, "first");
    }

    #[test]
    fn test_mark_pending_never_downgrades_resolved() {
        let mut cache = ResolutionCache::new();
        cache.merge("https://a.com".to_string(), metadata("A"));
        cache.mark_pending("https://a.com");

        assert_eq!(cache.get("https://a.com").unwrap().title, "A");
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut cache = ResolutionCache::new();
        cache.merge("https://a.com".to_string(), metadata("A"));
        cache.merge("https://b.com".to_string(), metadata("B"));

        assert_eq!(cache.get("https://a.com").unwrap().title, "A");
        assert_eq!(cache.get("https://b.com").unwrap().title, "B");
        assert_eq!(cache.resolved_count(), 2);
    }
}
