// src/icons/classify.rs
// =============================================================================
// Extension classification for links.
//
// We parse the link with the `url` crate and look only at the path component,
// so query strings and fragments can never leak into the extension
// ("https://x.com/a.pdf?download=1" still classifies as "pdf").
//
// This function is total: malformed links simply classify as "no extension",
// they never produce an error.
// =============================================================================

use url::Url;

// Extracts the final path extension of a link, lower-cased
//
// Returns None when:
// - the link does not parse as a URL
// - the path contains no '.'
// - the '.' is the last character of the path
//
// Examples:
//   file_extension("https://x.com/a.PDF")   -> Some("pdf")
//   file_extension("https://x.com/readme")  -> None
//   file_extension("https://x.com/weird.")  -> None
//   file_extension("not a url")             -> None
pub fn file_extension(locator: &str) -> Option<String> {
    let url = Url::parse(locator).ok()?;
    let path = url.path();

    let last_dot = path.rfind('.')?;
    if last_dot + 1 == path.len() {
        return None;
    }

    Some(path[last_dot + 1..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extension() {
        assert_eq!(file_extension("https://example.com/report.pdf"), Some("pdf".to_string()));
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(file_extension("https://x.com/a.PDF"), Some("pdf".to_string()));
    }

    #[test]
    fn test_no_dot_in_path() {
        assert_eq!(file_extension("https://example.com/readme"), None);
        assert_eq!(file_extension("https://example.com"), None);
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(file_extension("https://example.com/weird."), None);
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(
            file_extension("https://example.com/a.zip?sig=x.y.z"),
            Some("zip".to_string())
        );
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(
            file_extension("https://example.com/doc.txt#section.2"),
            Some("txt".to_string())
        );
    }

    #[test]
    fn test_malformed_link_is_none() {
        assert_eq!(file_extension("not a url"), None);
        assert_eq!(file_extension(""), None);
        assert_eq!(file_extension("https://"), None);
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            file_extension("https://example.com/releases/v1.2/app.tar"),
            Some("tar".to_string())
        );
    }
}
