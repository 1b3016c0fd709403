// src/resolver/mod.rs
// =============================================================================
// This module resolves display metadata (title + favicon) for a link.
//
// Submodules:
// - fetch: retrieves the target page through a chain of public relay services
// - extract: pulls title and favicon out of the fetched HTML
//
// The one rule here: resolve() NEVER fails. Every failure mode degrades to a
// usable result -
// - typed files (known extension) resolve offline to their decoded filename
// - pages resolve via the relay chain when any relay cooperates
// - everything else falls back to the host name plus a favicon-service URL
//
// Rust concepts:
// - async fn for network I/O
// - Option chaining (?, and_then) instead of exceptions
// - A struct owning its HTTP client, cheap to share across tasks
// =============================================================================

mod extract;
mod fetch;

pub use fetch::{default_relays, Relay, RELAY_TIMEOUT};

use percent_encoding::percent_decode_str;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::icons;

// Resolved display metadata for one distinct link text
//
// Immutable once produced; repeated occurrences of the same link share one
// instance through the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetadata {
    /// Human-readable label: page title or decoded filename
    pub title: String,
    /// Absolute favicon URL, if one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

// Resolves metadata for individual links
//
// Stateless across calls: it holds only the HTTP client (connection pool)
// and the relay list. Caching lives in the enricher, not here.
pub struct Resolver {
    client: Client,
    relays: Vec<Relay>,
}

impl Resolver {
    /// Resolver with the standard relay chain
    pub fn new() -> Self {
        Self::with_relays(default_relays())
    }

    /// Resolver with a custom relay chain (tests use an empty one to force
    /// the fallback path without touching the network)
    pub fn with_relays(relays: Vec<Relay>) -> Self {
        // One shared client, reused for every attempt (connection pooling).
        // The client-level timeout is a backstop; each attempt also runs
        // under its own hard deadline in fetch.rs
        let client = Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Resolver { client, relays }
    }

    /// Resolver that never opens a connection: typed files and host-name
    /// fallbacks only
    pub fn offline() -> Self {
        Self::with_relays(Vec::new())
    }

    // Resolves one link to displayable metadata. Total: always returns a
    // usable value, never an error.
    pub async fn resolve(&self, locator: &str) -> LinkMetadata {
        // Typed-file short circuit: known extension means we can label the
        // link from its filename alone - fast, offline, deterministic
        if let Some(extension) = icons::file_extension(locator) {
            if icons::icon_for(&extension).is_some() {
                return LinkMetadata {
                    title: decoded_filename(locator),
                    favicon: None,
                };
            }
        }

        // Page path: relay chain, then extraction; any gap falls through
        // to the host-name fallback
        match self.resolve_page(locator).await {
            Some(metadata) => metadata,
            None => {
                debug!(locator, "using host-name fallback");
                fallback_metadata(locator)
            }
        }
    }

    async fn resolve_page(&self, locator: &str) -> Option<LinkMetadata> {
        let html = fetch::fetch_via_relays(&self.client, &self.relays, locator).await?;
        extract::extract_metadata(&html, locator)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

// The final path segment of the link, percent-decoded for display
// ("my%20doc.pdf" -> "my doc.pdf"). Falls back to the raw link text when
// the path has no usable segment.
fn decoded_filename(locator: &str) -> String {
    let segment = Url::parse(locator)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|segments| segments.last().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty());

    match segment {
        Some(segment) => percent_decode_str(&segment)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .unwrap_or(segment),
        None => locator.to_string(),
    }
}

// Host-based metadata for when every relay failed (or there were none):
// the host name as title plus the public favicon-service URL for that host.
// A link whose host cannot even be parsed keeps its raw text as title.
fn fallback_metadata(locator: &str) -> LinkMetadata {
    match Url::parse(locator)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
    {
        Some(host) => LinkMetadata {
            favicon: Some(favicon_service_url(&host)),
            title: host,
        },
        None => LinkMetadata {
            title: locator.to_string(),
            favicon: None,
        },
    }
}

// Public favicon-by-domain renderer, used both as the default favicon and
// as the no-favicon-found fallback
pub(crate) fn favicon_service_url(host: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={}&sz=32", host)
}
