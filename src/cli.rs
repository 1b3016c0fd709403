// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "beauty-link",
    version = "0.1.0",
    about = "Enrich bare https:// links in text with titles, favicons and file-type icons",
    long_about = "beauty-link scans a piece of text for https:// links and replaces each with an \
                  enriched, displayable link: a page title or decoded filename, a favicon or \
                  file-type icon, and click-target attributes. Metadata is fetched through \
                  public relay services and cached, so repeated runs over the same text never \
                  re-fetch."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (enrich, scan, emit-css)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enrich every https:// link found in the text
    ///
    /// Example: beauty-link enrich "Visit https://example.com" --target new-window
    Enrich {
        /// The text to scan and enrich
        text: String,

        /// How links should open: new-tab, new-window or self
        #[arg(long, default_value = "new-tab")]
        target: String,

        /// Custom link color (e.g. "#ff8800"); defaults to the built-in accent
        #[arg(long)]
        color: Option<String>,

        /// Output the enriched node sequence as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Skip the relay services entirely: typed files and host-name
        /// fallbacks only, no network
        #[arg(long)]
        offline: bool,
    },

    /// Only scan: print the link spans found in the text
    ///
    /// Example: beauty-link scan "See https://example.com and https://test.com"
    Scan {
        /// The text to scan
        text: String,

        /// Output the spans as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the Nerd Font @font-face stylesheet needed to display the
    /// file-type icon glyphs
    EmitCss,
}
