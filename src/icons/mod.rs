// src/icons/mod.rs
// =============================================================================
// This module decides whether a link points at a "typed file" - a resource
// whose path extension maps to a known file category (document, archive,
// image, video, audio, code).
//
// Submodules:
// - classify: extracts the lower-cased path extension from a link
// - table: the static extension -> icon/color lookup table
//
// Typed files are enriched offline (filename + category icon); everything
// else goes through the metadata resolver.
// =============================================================================

mod classify;
mod table;

pub use classify::file_extension;
pub use table::{icon_for, FileTypeIcon};
