// src/resolver/extract.rs
// =============================================================================
// This module extracts a title and favicon from fetched page HTML.
//
// We use the `scraper` crate (html5ever underneath) with CSS selectors,
// mirroring what a browser's querySelector would find:
//
// Title priority:   og:title > twitter:title > <title> > the link text itself
// Favicon priority: rel="icon" > rel="shortcut icon" > rel="apple-touch-icon"
//
// A favicon reference can be absolute, protocol-relative (//cdn...),
// root-relative (/favicon.ico) or plain relative; we resolve all of them
// against the page origin. No reference at all means the favicon-service
// fallback keyed by host.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::{favicon_service_url, LinkMetadata};

// Extracts metadata from page HTML
//
// Returns None only when the link itself cannot be parsed (no origin to
// resolve against) - the caller then takes the host-name fallback path.
pub fn extract_metadata(html: &str, locator: &str) -> Option<LinkMetadata> {
    let url = Url::parse(locator).ok()?;
    let host = url.host_str()?.to_string();
    // ascii_serialization gives "https://example.com" with no trailing slash
    let origin = url.origin().ascii_serialization();

    let document = Html::parse_document(html);

    let title = meta_content(&document, r#"meta[property="og:title"]"#)
        .or_else(|| meta_content(&document, r#"meta[name="twitter:title"]"#))
        .or_else(|| title_text(&document))
        .unwrap_or_else(|| locator.to_string())
        .trim()
        .to_string();

    let favicon = match favicon_href(&document) {
        Some(href) => resolve_favicon(&origin, &href),
        None => favicon_service_url(&host),
    };

    Some(LinkMetadata {
        title,
        favicon: Some(favicon),
    })
}

// Content attribute of the first element matching the selector, skipping
// empty values so the priority chain can keep going
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    // Selectors here are constants and known to be valid
    let selector = Selector::parse(selector).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

// Text of the document's <title> element
fn title_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

// First favicon reference declared by the page, in priority order
fn favicon_href(document: &Html) -> Option<String> {
    for selector in [
        r#"link[rel="icon"]"#,
        r#"link[rel="shortcut icon"]"#,
        r#"link[rel="apple-touch-icon"]"#,
    ] {
        let selector = Selector::parse(selector).unwrap();
        if let Some(href) = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
        {
            return Some(href.trim().to_string());
        }
    }

    None
}

// Resolves a favicon reference to an absolute URL against the page origin
//
// Examples (origin = "https://example.com"):
//   "https://cdn.com/i.png" -> unchanged
//   "//cdn.com/i.png"       -> "https://cdn.com/i.png"
//   "/favicon.ico"          -> "https://example.com/favicon.ico"
//   "favicon.ico"           -> "https://example.com/favicon.ico"
fn resolve_favicon(origin: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{}", rest)
    } else if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}
