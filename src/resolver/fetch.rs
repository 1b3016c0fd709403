// src/resolver/fetch.rs
// =============================================================================
// This module fetches a page's HTML through public CORS-relay services.
//
// Why relays at all?
// - The metadata lives on arbitrary third-party origins
// - Each relay wraps the target URL as a query parameter and fetches it on
//   our behalf, so one flaky relay never takes the feature down
//
// Policy:
// - Relays are tried strictly in order, one outstanding connection at a time
// - Each attempt runs under a 5 second hard deadline; on any failure
//   (non-success status, timeout, transport error, empty body) we move on
// - The first relay that produces a usable payload wins
// - Worst case latency is the SUM of the per-relay deadlines (~15s), which we
//   accept in exchange for minimal connection load
//
// Response shapes:
// - Some relays return the raw document
// - allorigins wraps it in a JSON envelope: {"contents": "<html>..."}
// We handle both.
// =============================================================================

use anyhow::{anyhow, bail, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Hard deadline for one relay attempt
pub const RELAY_TIMEOUT: Duration = Duration::from_secs(5);

// Percent-encoding set equivalent to JavaScript's encodeURIComponent:
// alphanumerics and - _ . ! ~ * ' ( ) pass through, everything else escapes
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// One relay service endpoint
//
// All three standard relays take the target URL appended to a fixed prefix,
// so a prefix string is the whole configuration.
#[derive(Debug, Clone)]
pub struct Relay {
    /// Short name used in diagnostics
    pub name: &'static str,
    prefix: &'static str,
}

impl Relay {
    /// Builds the relay request URL for a target link
    pub fn request_url(&self, locator: &str) -> String {
        format!("{}{}", self.prefix, utf8_percent_encode(locator, COMPONENT))
    }
}

// The standard relay chain, in priority order
pub fn default_relays() -> Vec<Relay> {
    vec![
        Relay {
            name: "allorigins",
            prefix: "https://api.allorigins.win/get?url=",
        },
        Relay {
            name: "corsproxy",
            prefix: "https://corsproxy.io/?",
        },
        Relay {
            name: "codetabs",
            prefix: "https://api.codetabs.com/v1/proxy?quest=",
        },
    ]
}

// Walks the relay chain until one returns a usable payload
//
// Returns the page HTML, or None when every relay failed. Failures are
// logged at debug level only - the caller degrades gracefully, nothing
// propagates.
pub async fn fetch_via_relays(client: &Client, relays: &[Relay], locator: &str) -> Option<String> {
    for relay in relays {
        let request_url = relay.request_url(locator);

        match fetch_one(client, &request_url).await {
            Ok(body) => {
                let html = unwrap_envelope(body);
                if html.trim().is_empty() {
                    debug!(relay = relay.name, locator, "relay returned empty payload");
                    continue;
                }
                debug!(relay = relay.name, locator, "relay responded");
                return Some(html);
            }
            Err(reason) => {
                debug!(relay = relay.name, locator, %reason, "relay failed");
            }
        }
    }

    None
}

// One bounded attempt against one relay URL
//
// The deadline covers the entire attempt, headers and body both; on expiry
// the request future is dropped (abandoned, not retried).
async fn fetch_one(client: &Client, request_url: &str) -> Result<String> {
    let attempt = async {
        let response = client.get(request_url).send().await?;

        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }

        Ok(response.text().await?)
    };

    match timeout(RELAY_TIMEOUT, attempt).await {
        Ok(result) => result,
        Err(_) => Err(anyhow!("timed out after {:?}", RELAY_TIMEOUT)),
    }
}

// Unwraps the JSON envelope shape if present, otherwise returns the body as-is
//
// A body counts as an envelope only when it parses as a JSON object with a
// string "contents" field; raw HTML never parses that way.
fn unwrap_envelope(body: String) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(&body) {
        if let Some(serde_json::Value::String(contents)) = map.get("contents") {
            return contents.clone();
        }
    }

    body
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::time::timeout?
//    - Wraps a future with a deadline; if it doesn't finish in time you get
//      Err(Elapsed) and the inner future is DROPPED (the request is abandoned)
//    - This is how we guarantee a relay can never hold us past 5 seconds
//
// 2. Why try relays one at a time instead of racing them?
//    - Racing would be faster when the first relay is down, but it opens
//      three connections for every single link, every time
//    - Sequential attempts keep at most one connection per link in flight
//
// 3. Why Option<String> instead of Result for fetch_via_relays?
//    - "All relays failed" is an expected outcome, not an error - the caller
//      has a deterministic fallback and nothing to report upward
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_encodes_target() {
        let relay = Relay {
            name: "allorigins",
            prefix: "https://api.allorigins.win/get?url=",
        };
        let url = relay.request_url("https://example.com/a b?c=d&e=f");

        assert_eq!(
            url,
            "https://api.allorigins.win/get?url=https%3A%2F%2Fexample.com%2Fa%20b%3Fc%3Dd%26e%3Df"
        );
    }

    #[test]
    fn test_component_set_matches_encode_uri_component() {
        // encodeURIComponent leaves these unescaped
        let encoded = utf8_percent_encode("AZaz09-_.!~*'()", COMPONENT).to_string();
        assert_eq!(encoded, "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_default_relay_order() {
        let relays = default_relays();
        let names: Vec<_> = relays.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["allorigins", "corsproxy", "codetabs"]);
    }

    #[test]
    fn test_unwrap_json_envelope() {
        let body = r#"{"contents":"<html><title>hi</title></html>","status":{"http_code":200}}"#;
        assert_eq!(
            unwrap_envelope(body.to_string()),
            "<html><title>hi</title></html>"
        );
    }

    #[test]
    fn test_raw_html_passes_through() {
        let body = "<html><title>hi</title></html>";
        assert_eq!(unwrap_envelope(body.to_string()), body);
    }

    #[test]
    fn test_json_without_contents_passes_through() {
        let body = r#"{"status": 200}"#;
        assert_eq!(unwrap_envelope(body.to_string()), body);
    }

    #[tokio::test]
    async fn test_empty_relay_chain_yields_none() {
        let client = Client::new();
        let result = fetch_via_relays(&client, &[], "https://example.com").await;
        assert!(result.is_none());
    }
}
