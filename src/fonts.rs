// src/fonts.rs
// =============================================================================
// One-time symbol-font side effect.
//
// The file-type icons are Nerd Font glyphs, so whatever surface displays
// them needs the Symbols Nerd Font @font-face rules. Building that
// stylesheet is a process-wide, guaranteed-once operation: the first call
// constructs it, every later call hands back the same reference. It is
// triggered explicitly by the consumer (e.g. the emit-css subcommand),
// never implicitly on load.
// =============================================================================

use std::sync::OnceLock;
use tracing::debug;

/// Font stack for rendering the icon glyphs
pub const FONT_FAMILY: &str =
    "\"Symbols Nerd Font Mono\", \"Symbols Nerd Font\", \"FiraCode Nerd Font\", monospace";

const NERD_FONT_CDN: &str =
    "https://cdn.jsdelivr.net/gh/ryanoasis/nerd-fonts@v3.1.1/patched-fonts/NerdFontsSymbolsOnly";

static STYLESHEET: OnceLock<String> = OnceLock::new();

// Returns the @font-face stylesheet for the symbol fonts, building it at
// most once per process
pub fn nerd_font_css() -> &'static str {
    STYLESHEET
        .get_or_init(|| {
            debug!("building nerd-font stylesheet");
            build_css()
        })
        .as_str()
}

fn build_css() -> String {
    format!(
        r#"/* beauty-link: Nerd Font Symbols */
@font-face {{
  font-family: 'Symbols Nerd Font';
  src: url('{cdn}/SymbolsNerdFont-Regular.ttf') format('truetype');
  font-weight: normal;
  font-style: normal;
  font-display: swap;
}}

@font-face {{
  font-family: 'Symbols Nerd Font Mono';
  src: url('{cdn}/SymbolsNerdFontMono-Regular.ttf') format('truetype');
  font-weight: normal;
  font-style: normal;
  font-display: swap;
}}
"#,
        cdn = NERD_FONT_CDN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_contains_both_faces() {
        let css = nerd_font_css();
        assert!(css.contains("'Symbols Nerd Font'"));
        assert!(css.contains("'Symbols Nerd Font Mono'"));
        assert!(css.contains("SymbolsNerdFont-Regular.ttf"));
        assert!(css.contains("SymbolsNerdFontMono-Regular.ttf"));
    }

    #[test]
    fn test_built_exactly_once() {
        // Same allocation handed back on every call
        let first = nerd_font_css();
        let second = nerd_font_css();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_font_family_leads_with_mono_variant() {
        assert!(FONT_FAMILY.starts_with("\"Symbols Nerd Font Mono\""));
    }
}
