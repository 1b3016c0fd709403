// src/enricher/render.rs
// =============================================================================
// The renderer output contract: turns text + resolved metadata into an
// ordered sequence of nodes, each either literal text or an enriched link.
//
// Enrichment per link:
// - display title: resolved title if cached, the raw link text otherwise,
//   truncated to 60 chars + "..." when longer
// - marker: file-type icon for typed files, else the favicon, else nothing
// - target attributes derived from the click-behavior policy
// - link color, overridable per call
//
// Invariant: concatenating the text segments and link texts in order
// reproduces the input exactly. Enrichment decorates, it never rewrites.
// =============================================================================

use serde::Serialize;
use std::str::FromStr;

use crate::icons;
use crate::resolver::LinkMetadata;
use crate::scanner::{segments, Segment};

use super::cache::ResolutionCache;

/// Default link color when no override is given
pub const DEFAULT_LINK_COLOR: &str = "#646cff";

/// Titles longer than this are cut and marked with an ellipsis
const TITLE_MAX_CHARS: usize = 60;
const ELLIPSIS: &str = "...";

// How a clicked link should open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkTarget {
    /// Open in a new tab (the default)
    NewTab,
    /// Open in a new window with an explicit size
    NewWindow,
    /// Open in the same context
    SelfTarget,
}

impl FromStr for LinkTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-tab" => Ok(LinkTarget::NewTab),
            "new-window" => Ok(LinkTarget::NewWindow),
            "self" => Ok(LinkTarget::SelfTarget),
            other => Err(format!(
                "unknown target '{}' (expected new-tab, new-window or self)",
                other
            )),
        }
    }
}

// Anchor attributes implementing a click-behavior policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetAttrs {
    pub target: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
    /// window.open feature string for the explicit-size policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_features: Option<&'static str>,
}

impl LinkTarget {
    pub fn attributes(self) -> TargetAttrs {
        match self {
            LinkTarget::NewTab => TargetAttrs {
                target: "_blank",
                rel: Some("noopener noreferrer"),
                window_features: None,
            },
            LinkTarget::NewWindow => TargetAttrs {
                target: "_blank",
                rel: Some("noopener noreferrer"),
                window_features: Some("noopener,noreferrer,width=800,height=600"),
            },
            LinkTarget::SelfTarget => TargetAttrs {
                target: "_self",
                rel: None,
                window_features: None,
            },
        }
    }
}

// Visual marker shown next to the link title
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    /// Category icon for a typed file
    Icon {
        glyph: &'static str,
        color: &'static str,
    },
    /// Site favicon (absolute URL)
    Favicon { url: String },
    /// No marker; presentation layer shows its generic link glyph
    None,
}

// One enriched link, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedLink {
    /// The link exactly as it appeared in the input
    pub locator: String,
    pub display_title: String,
    pub marker: Marker,
    pub target: TargetAttrs,
    pub color: String,
}

// One output node: literal text or an enriched link
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Text { text: String },
    Link(EnrichedLink),
}

impl Node {
    /// The input text this node covers (for round-trip checks)
    pub fn source_text(&self) -> &str {
        match self {
            Node::Text { text } => text,
            Node::Link(link) => &link.locator,
        }
    }
}

// Renders the node sequence for a text body against a resolution cache
//
// Links without a cached result yet (or with unresolvable metadata) fall
// back to their raw text as the title, so rendering is always possible.
pub fn render(
    text: &str,
    cache: &ResolutionCache,
    target: LinkTarget,
    color: Option<&str>,
) -> Vec<Node> {
    let color = color.unwrap_or(DEFAULT_LINK_COLOR);

    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => Node::Text { text },
            Segment::Locator(span) => {
                let metadata = cache.get(&span.text);

                let title = metadata
                    .map(|m| m.title.as_str())
                    .unwrap_or(&span.text);

                Node::Link(EnrichedLink {
                    display_title: truncate_title(title),
                    marker: marker_for(&span.text, metadata),
                    target: target.attributes(),
                    color: color.to_string(),
                    locator: span.text,
                })
            }
        })
        .collect()
}

// Picks the marker: typed-file icon first, then favicon, then nothing
fn marker_for(locator: &str, metadata: Option<&LinkMetadata>) -> Marker {
    if let Some(entry) = icons::file_extension(locator).and_then(|ext| icons::icon_for(&ext)) {
        return Marker::Icon {
            glyph: entry.glyph,
            color: entry.color,
        };
    }

    if let Some(url) = metadata.and_then(|m| m.favicon.clone()) {
        return Marker::Favicon { url };
    }

    Marker::None
}

// Cuts a title to 60 characters + "..." - counted in chars, so multi-byte
// titles never get split mid-character
fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let cut: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}{}", cut, ELLIPSIS)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(entries: &[(&str, &str, Option<&str>)]) -> ResolutionCache {
        let mut cache = ResolutionCache::new();
        for (locator, title, favicon) in entries {
            cache.merge(
                locator.to_string(),
                LinkMetadata {
                    title: title.to_string(),
                    favicon: favicon.map(str::to_string),
                },
            );
        }
        cache
    }

    #[test]
    fn test_short_title_passes_through() {
        assert_eq!(truncate_title("hello"), "hello");

        let exactly_sixty = "x".repeat(60);
        assert_eq!(truncate_title(&exactly_sixty), exactly_sixty);
    }

    #[test]
    fn test_long_title_is_cut_to_sixty_plus_ellipsis() {
        let long = "y".repeat(75);
        let display = truncate_title(&long);

        assert_eq!(display.len(), 63);
        assert_eq!(&display[..60], "y".repeat(60));
        assert!(display.ends_with("..."));
    }

    #[test]
    fn test_new_tab_attributes() {
        let attrs = LinkTarget::NewTab.attributes();
        assert_eq!(attrs.target, "_blank");
        assert_eq!(attrs.rel, Some("noopener noreferrer"));
        assert_eq!(attrs.window_features, None);
    }

    #[test]
    fn test_new_window_attributes() {
        let attrs = LinkTarget::NewWindow.attributes();
        assert_eq!(attrs.target, "_blank");
        assert_eq!(
            attrs.window_features,
            Some("noopener,noreferrer,width=800,height=600")
        );
    }

    #[test]
    fn test_self_attributes() {
        let attrs = LinkTarget::SelfTarget.attributes();
        assert_eq!(attrs.target, "_self");
        assert_eq!(attrs.rel, None);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("new-tab".parse::<LinkTarget>(), Ok(LinkTarget::NewTab));
        assert_eq!("new-window".parse::<LinkTarget>(), Ok(LinkTarget::NewWindow));
        assert_eq!("self".parse::<LinkTarget>(), Ok(LinkTarget::SelfTarget));
        assert!("popup".parse::<LinkTarget>().is_err());
    }

    #[test]
    fn test_render_uses_cached_title() {
        let cache = cache_with(&[("https://a.com", "Site A", None)]);
        let nodes = render("see https://a.com", &cache, LinkTarget::NewTab, None);

        assert_eq!(nodes.len(), 2);
        match &nodes[1] {
            Node::Link(link) => {
                assert_eq!(link.display_title, "Site A");
                assert_eq!(link.locator, "https://a.com");
                assert_eq!(link.color, DEFAULT_LINK_COLOR);
            }
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_render_unresolved_link_shows_raw_text() {
        let cache = ResolutionCache::new();
        let nodes = render("https://a.com", &cache, LinkTarget::NewTab, None);

        match &nodes[0] {
            Node::Link(link) => assert_eq!(link.display_title, "https://a.com"),
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_file_icon_beats_favicon() {
        // Even with a favicon in the cache, a typed file shows its
        // category icon
        let cache = cache_with(&[(
            "https://a.com/doc.pdf",
            "doc.pdf",
            Some("https://a.com/fav.ico"),
        )]);
        let nodes = render("https://a.com/doc.pdf", &cache, LinkTarget::NewTab, None);

        match &nodes[0] {
            Node::Link(link) => assert!(matches!(link.marker, Marker::Icon { .. })),
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_favicon_marker_for_pages() {
        let cache = cache_with(&[("https://a.com", "A", Some("https://a.com/fav.ico"))]);
        let nodes = render("https://a.com", &cache, LinkTarget::NewTab, None);

        match &nodes[0] {
            Node::Link(link) => assert_eq!(
                link.marker,
                Marker::Favicon {
                    url: "https://a.com/fav.ico".to_string()
                }
            ),
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_no_marker_without_metadata() {
        let cache = ResolutionCache::new();
        let nodes = render("https://a.com", &cache, LinkTarget::NewTab, None);

        match &nodes[0] {
            Node::Link(link) => assert_eq!(link.marker, Marker::None),
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_color_override() {
        let cache = ResolutionCache::new();
        let nodes = render("https://a.com", &cache, LinkTarget::NewTab, Some("#ff0000"));

        match &nodes[0] {
            Node::Link(link) => assert_eq!(link.color, "#ff0000"),
            other => panic!("expected link node, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_through_nodes() {
        let cache = ResolutionCache::new();
        let input = "a https://x.com b https://y.com/f.pdf c";
        let nodes = render(input, &cache, LinkTarget::NewTab, None);

        let rebuilt: String = nodes.iter().map(Node::source_text).collect();
        assert_eq!(rebuilt, input);
    }
}
