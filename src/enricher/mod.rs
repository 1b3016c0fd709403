// src/enricher/mod.rs
// =============================================================================
// The orchestrator: ties scanner, resolver, cache and renderer together.
//
// Submodules:
// - cache: link text -> resolution state (pending/resolved)
// - render: the output node contract (text and enriched-link nodes)
//
// One Enricher owns one subject - one text-body binding and its cache. Each
// call re-scans the current text, resolves only the links the cache has not
// seen, merges results as they complete (in any order), and renders. Links
// resolved on an earlier call are never fetched again; a new subject means
// constructing a new Enricher.
//
// Concurrency model: resolutions for distinct links run as independent
// async operations with no ordering between completions, but the cache is
// only touched from this task - no locks anywhere.
// =============================================================================

mod cache;
mod render;

pub use cache::{ResolutionCache, ResolutionState};
pub use render::{
    render, EnrichedLink, LinkTarget, Marker, Node, TargetAttrs, DEFAULT_LINK_COLOR,
};

use futures::stream::{self, StreamExt};

use crate::resolver::{LinkMetadata, Resolver};
use crate::scanner;

// How many links we resolve at once. Each resolve walks its own relay
// chain sequentially, so this bounds outstanding connections too.
const MAX_CONCURRENT_RESOLVES: usize = 8;

// The link enrichment pipeline for one subject
pub struct Enricher {
    resolver: Resolver,
    cache: ResolutionCache,
}

impl Enricher {
    pub fn new(resolver: Resolver) -> Self {
        Enricher {
            resolver,
            cache: ResolutionCache::new(),
        }
    }

    // Ensures every distinct link in the text has a cache entry, fetching
    // only the ones not already known (pending or resolved).
    //
    // Returns the number of fetches this call actually issued - zero when
    // the text is unchanged and fully resolved.
    pub async fn ensure_resolved(&mut self, text: &str) -> usize {
        // Dedup happens naturally here: the first occurrence marks the key
        // pending, repeats of the same link see is_known() and skip.
        // Marking BEFORE any await is what makes re-triggering safe.
        let mut misses = Vec::new();
        for span in scanner::scan(text) {
            if !self.cache.is_known(&span.text) {
                self.cache.mark_pending(&span.text);
                misses.push(span.text);
            }
        }

        let fetched = misses.len();
        if fetched == 0 {
            return 0;
        }

        // Resolve all misses concurrently; results arrive in completion
        // order, which is fine because each merge is keyed and idempotent
        let resolver = &self.resolver;
        let results: Vec<(String, LinkMetadata)> = stream::iter(misses.into_iter().map(|locator| {
            async move {
                let metadata = resolver.resolve(&locator).await;
                (locator, metadata)
            }
        }))
        .buffer_unordered(MAX_CONCURRENT_RESOLVES)
        .collect()
        .await;

        for (locator, metadata) in results {
            self.cache.merge(locator, metadata);
        }

        fetched
    }

    // The full pipeline: resolve what's missing, then render the node
    // sequence for the current text
    pub async fn enrich(
        &mut self,
        text: &str,
        target: LinkTarget,
        color: Option<&str>,
    ) -> Vec<Node> {
        self.ensure_resolved(text).await;
        render(text, &self.cache, target, color)
    }

    /// Read access to the cache (diagnostics and tests)
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}
