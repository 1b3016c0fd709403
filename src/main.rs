// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Initialize diagnostic logging (off unless RUST_LOG enables it)
// 3. Run the requested pipeline stage and print the output
// 4. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands};

use beauty_link::{fonts, scanner, Enricher, LinkTarget, Marker, Node, Resolver};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Diagnostic logging to stderr; silent unless RUST_LOG says otherwise
    // (e.g. RUST_LOG=beauty_link=debug shows relay failures and fallbacks)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            text,
            target,
            color,
            json,
            offline,
        } => handle_enrich(&text, &target, color.as_deref(), json, offline).await,
        Commands::Scan { text, json } => handle_scan(&text, json),
        Commands::EmitCss => {
            println!("{}", fonts::nerd_font_css());
            Ok(0)
        }
    }
}

// Handles the 'enrich' subcommand: the full pipeline over one text body
async fn handle_enrich(
    text: &str,
    target: &str,
    color: Option<&str>,
    json: bool,
    offline: bool,
) -> Result<i32> {
    let target: LinkTarget = target.parse().map_err(|e: String| anyhow!(e))?;

    let resolver = if offline {
        Resolver::offline()
    } else {
        Resolver::new()
    };

    let mut enricher = Enricher::new(resolver);
    let nodes = enricher.enrich(text, target, color).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        print_nodes(&nodes);
    }

    Ok(0)
}

// Handles the 'scan' subcommand: link spans only, no resolution
fn handle_scan(text: &str, json: bool) -> Result<i32> {
    let spans = scanner::scan(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(0);
    }

    if spans.is_empty() {
        println!("No https:// links found");
        return Ok(0);
    }

    println!("{:<8} {}", "OFFSET", "LINK");
    println!("{}", "=".repeat(70));
    for span in &spans {
        println!("{:<8} {}", span.start, span.text);
    }
    println!("\n🔗 {} link(s) found", spans.len());

    Ok(0)
}

// Prints the enriched node sequence as a human-readable table
fn print_nodes(nodes: &[Node]) {
    println!("{:<6} {:<44} {:<30}", "KIND", "DISPLAY", "MARKER");
    println!("{}", "=".repeat(82));

    for node in nodes {
        match node {
            Node::Text { text } => {
                println!("{:<6} {:<44} {:<30}", "text", display_excerpt(text), "");
            }
            Node::Link(link) => {
                let marker = match &link.marker {
                    Marker::Icon { glyph, color } => format!("{} {}", glyph, color),
                    Marker::Favicon { url } => display_excerpt(url),
                    Marker::None => "-".to_string(),
                };
                println!(
                    "{:<6} {:<44} {:<30}",
                    "link",
                    display_excerpt(&link.display_title),
                    marker
                );
            }
        }
    }

    let link_count = nodes
        .iter()
        .filter(|n| matches!(n, Node::Link(_)))
        .count();

    println!();
    println!("📊 Summary:");
    println!("   🔗 Links enriched: {}", link_count);
    println!("   📋 Total nodes: {}", nodes.len());
}

// Truncates a value so the table columns stay aligned
fn display_excerpt(value: &str) -> String {
    let flat = value.replace('\n', "␤");
    if flat.chars().count() > 41 {
        let cut: String = flat.chars().take(41).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}
