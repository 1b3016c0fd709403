// src/icons/table.rs
// =============================================================================
// The static extension -> icon lookup table.
//
// Glyphs are Nerd Font symbol codepoints (rendered with the font from
// src/fonts.rs); colors are the conventional brand/category colors as
// 6-hex-digit strings.
//
// This is constant, versioned data: loaded with the binary, never mutated.
// An extension missing from this table means "not a typed file" and the link
// is treated as a regular page.
// =============================================================================

use serde::Serialize;

// Icon + color for one file category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTypeIcon {
    /// Nerd Font glyph (a single codepoint)
    pub glyph: &'static str,
    /// Display color, "#rrggbb"
    pub color: &'static str,
}

const fn icon(glyph: &'static str, color: &'static str) -> FileTypeIcon {
    FileTypeIcon { glyph, color }
}

// Looks up the icon for a lower-cased extension (no leading dot)
//
// Returns None for unknown extensions.
pub fn icon_for(extension: &str) -> Option<FileTypeIcon> {
    let entry = match extension {
        // Documents
        "pdf" => icon("\u{f0226}", "#e74856"),
        "doc" | "docx" => icon("\u{f022c}", "#2b579a"),
        "xls" | "xlsx" => icon("\u{f021b}", "#207245"),
        "ppt" | "pptx" => icon("\u{f0227}", "#d24726"),
        "txt" => icon("\u{f0219}", "#6c757d"),

        // Archives
        "zip" | "rar" | "7z" | "tar" | "gz" => icon("\u{f05c4}", "#e89f1c"),

        // Images
        "jpg" | "jpeg" | "png" | "gif" | "webp" => icon("\u{f021f}", "#a855f7"),
        "svg" => icon("\u{f0721}", "#f97316"),

        // Videos
        "mp4" | "avi" | "mov" | "mkv" | "webm" => icon("\u{f0567}", "#ec4899"),

        // Audio
        "mp3" | "wav" | "flac" | "ogg" => icon("\u{f0223}", "#10b981"),

        // Code
        "js" => icon("\u{f031e}", "#f0db4f"),
        "ts" => icon("\u{f06e6}", "#3178c6"),
        "jsx" | "tsx" => icon("\u{f0708}", "#61dafb"),
        "py" => icon("\u{f0320}", "#3776ab"),
        "java" => icon("\u{f0b37}", "#007396"),
        "php" => icon("\u{f031f}", "#777bb4"),
        "rb" => icon("\u{f0d2d}", "#cc342d"),
        "go" => icon("\u{f07d3}", "#00add8"),
        "rs" => icon("\u{f1617}", "#dea584"),
        "html" => icon("\u{f031d}", "#e34c26"),
        "css" => icon("\u{f031c}", "#264de4"),
        "json" => icon("\u{f0626}", "#f7df1e"),
        "xml" => icon("\u{f05c0}", "#ff6600"),
        "yaml" | "yml" => icon("\u{f0219}", "#cb171e"),
        "md" => icon("\u{f0354}", "#083fa1"),
        "sql" => icon("\u{f01bc}", "#00758f"),
        "sh" => icon("\u{f018d}", "#89e051"),

        _ => return None,
    };

    Some(entry)
}
