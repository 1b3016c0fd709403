// src/lib.rs
// =============================================================================
// beauty-link: find https:// links in plain text and enrich them for display.
//
// Pipeline:
//   scanner  - locate link spans without disturbing the surrounding text
//   icons    - classify links as "typed files" via their path extension
//   resolver - fetch title + favicon through a chain of relay services,
//              degrading gracefully all the way down to a host-name label
//   enricher - cache resolutions per subject and render the final node
//              sequence (literal text interleaved with enriched links)
//   fonts    - the one-time symbol-font stylesheet for icon glyphs
//
// The re-exports below are the public API; module internals stay private.
// =============================================================================

pub mod enricher;
pub mod fonts;
pub mod icons;
pub mod resolver;
pub mod scanner;

pub use enricher::{
    EnrichedLink, Enricher, LinkTarget, Marker, Node, ResolutionCache, TargetAttrs,
    DEFAULT_LINK_COLOR,
};
pub use resolver::{LinkMetadata, Relay, Resolver, RELAY_TIMEOUT};
pub use scanner::{scan, segments, LocatorSpan, Segment};
