// src/scanner.rs
// =============================================================================
// This module finds https:// links embedded in free-form text.
//
// How it works:
// - A link starts at a literal "https://" prefix and runs greedily to the
//   next whitespace character (or the end of the text)
// - We record each match with its byte offset so the surrounding text can be
//   reconstructed exactly
// - http:// is deliberately NOT matched - insecure links stay plain text
//
// Rust concepts:
// - &str slicing with byte offsets (safe because we only cut at match and
//   whitespace boundaries, which are always char boundaries)
// - Enums: Segment models "either plain text or a link"
// - Iterators and pattern matching
// =============================================================================

use serde::{Deserialize, Serialize};

// The only scheme we recognize. Everything else is plain text.
const SCHEME: &str = "https://";

// A single link occurrence inside the scanned text
//
// Spans are produced in ascending offset order and never overlap, because the
// scan is a single left-to-right pass that jumps past each match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorSpan {
    /// The matched link text, exactly as it appears in the input
    pub text: String,
    /// Byte offset of the match within the input
    pub start: usize,
}

// One piece of the segmented input: either literal text between links,
// or a link span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    Locator(LocatorSpan),
}

impl Segment {
    /// The raw text this segment covers, link or not
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(t) => t,
            Segment::Locator(span) => &span.text,
        }
    }
}

// Scans text for https:// links
//
// Returns spans ordered by start offset. A bare "https://" with nothing after
// it is not a link - there must be at least one non-whitespace character
// following the scheme.
//
// Example:
//   scan("Visit https://example.com now")
//   -> [LocatorSpan { text: "https://example.com", start: 6 }]
pub fn scan(text: &str) -> Vec<LocatorSpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    // Find each occurrence of the scheme, then extend the match greedily
    while let Some(offset) = text[i..].find(SCHEME) {
        let start = i + offset;
        let rest = &text[start..];

        // The match runs to the next whitespace char or the end of input
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());

        if len > SCHEME.len() {
            spans.push(LocatorSpan {
                text: rest[..len].to_string(),
                start,
            });
            i = start + len;
        } else {
            // Bare scheme with nothing after it - skip past and keep looking
            i = start + SCHEME.len();
        }
    }

    spans
}

// Splits text into an alternating sequence of literal segments and link spans
//
// Guarantees:
// - Concatenating every segment (in order) reproduces the input exactly
// - Zero-length literal segments between/around links are omitted
// - Input with no links (including empty input) yields one Text segment
//   equal to the whole input
pub fn segments(text: &str) -> Vec<Segment> {
    let mut parts = Vec::new();
    let mut last = 0;

    for span in scan(text) {
        if span.start > last {
            parts.push(Segment::Text(text[last..span.start].to_string()));
        }
        last = span.start + span.text.len();
        parts.push(Segment::Locator(span));
    }

    if last < text.len() {
        parts.push(Segment::Text(text[last..].to_string()));
    }

    // Empty input still produces one (empty) literal segment
    if parts.is_empty() {
        parts.push(Segment::Text(text.to_string()));
    }

    parts
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why byte offsets and not char indices?
//    - &str slicing in Rust works on byte offsets
//    - Slicing is only safe on char boundaries; both "https://" matches and
//      whitespace positions are always boundaries, so every cut here is safe
//
// 2. What is find() returning?
//    - Option<usize>: Some(byte offset) of the first match, or None
//    - It accepts string patterns AND char-predicate functions, which is why
//      find(char::is_whitespace) works
//
// 3. Why return owned Strings in LocatorSpan?
//    - Spans outlive the scan call (they flow into the cache and renderer)
//    - Borrowing from the input would tie every downstream type to its
//      lifetime; owning keeps the API simple
// -----------------------------------------------------------------------------
