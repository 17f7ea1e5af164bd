//! `qljson` CLI — parse, normalize and query QlJson files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse QlJson to pretty-printed JSON (stdin → stdout)
//! echo '{name: "Alice", age: 30}' | qljson parse
//!
//! # Parse from file to file, compact output
//! qljson parse -i config.qljson -o config.json --compact
//!
//! # Read a nested value as JSON
//! qljson get server.port -i config.qljson
//!
//! # Check for a key (exit status 0 if present, 1 if not)
//! qljson has server.tls -i config.qljson
//!
//! # Show the normalized form
//! qljson normalize -i config.qljson
//!
//! # Treat bare words as strings
//! echo '{mode: fast}' | qljson --spaceless-strings parse
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=qljson=debug` for parser events.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qljson::{Document, ParseContext};
use std::io::{self, Read};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qljson", version, about = "QlJson (relaxed JSON) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Return unrecognised bare tokens as strings instead of failing
    #[arg(long, global = true)]
    spaceless_strings: bool,

    /// Maximum nesting depth of objects and arrays
    #[arg(long, global = true, default_value_t = qljson::context::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse QlJson and print it as JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the normalized form (whitespace and comments stripped)
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dotted path as JSON (`null` if unresolved)
    Get {
        /// Dotted path, e.g. `server.port` or `hosts.0`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print whether a dotted path resolves; exits 1 when it does not
    Has {
        /// Dotted path, e.g. `server.tls`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = ParseContext::default()
        .with_spaceless_strings(cli.spaceless_strings)
        .with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
        } => {
            let doc = load_document(input.as_deref(), &ctx)?;
            let json = if compact {
                serde_json::to_string(doc.root())?
            } else {
                serde_json::to_string_pretty(doc.root())?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Normalize { input } => {
            let source = read_input(input.as_deref())?;
            let normalized =
                qljson::normalize(&source).context("Failed to normalize QlJson input")?;
            write_output(None, &normalized)?;
        }
        Commands::Get { path, input } => {
            let doc = load_document(input.as_deref(), &ctx)?;
            let json = serde_json::to_string_pretty(doc.get(&path))?;
            write_output(None, &json)?;
        }
        Commands::Has { path, input } => {
            let doc = load_document(input.as_deref(), &ctx)?;
            let present = doc.has(&path);
            println!("{}", present);
            if !present {
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_document(path: Option<&str>, ctx: &ParseContext) -> Result<Document> {
    let source = read_input(path)?;
    debug!(bytes = source.len(), "read qljson input");
    Document::parse_with(&source, ctx).context("Failed to parse QlJson input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
