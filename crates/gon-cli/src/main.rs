//! `gon` CLI — check, format, query and convert GON files from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (exit status 1 on a structural error)
//! gon check -i settings.gon
//!
//! # Re-emit in canonical layout (stdin → stdout)
//! cat settings.gon | gon fmt
//!
//! # Read one value by dotted path
//! gon get window.size.0 -i settings.gon
//!
//! # Print the node-by-node debug dump
//! gon dump -i settings.gon
//!
//! # Convert to JSON
//! gon json --pretty -i settings.gon -o settings.json
//!
//! # Keep going past errors, logging them instead
//! gon --lenient -v fmt -i broken.gon
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gon_core::{Document, Kind, Loader, LogAndContinue};
use log::{debug, LevelFilter};
use std::io::{self, Read};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gon", version, about = "GON (Glaiel Object Notation) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log errors and continue with a best-effort tree instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Enable debug logging (otherwise RUST_LOG decides, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is well formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Re-emit a document in canonical layout
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the value at a dotted path (e.g. `window.size.0`)
    Get {
        /// Dotted path; numeric segments index arrays
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print every node with its name and kind
    Dump {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Convert a document to JSON
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loader = if cli.lenient {
        Loader::with_hook(Arc::new(LogAndContinue))
    } else {
        Loader::new()
    };

    match cli.command {
        Commands::Check { input } => {
            let doc = parse_input(&loader, input.as_deref())?;
            println!("ok: {} top-level members", doc.root().children().count());
        }
        Commands::Fmt { input, output } => {
            let doc = parse_input(&loader, input.as_deref())?;
            let text = doc.to_text().context("Failed to format document")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Get { path, input } => {
            let doc = parse_input(&loader, input.as_deref())?;
            let value = doc.root().lookup(&path);
            if value.is_shared_null() {
                bail!("No value at path '{}'", path);
            }
            match value.kind() {
                Kind::String => println!("{}", value.as_str_or("")),
                _ => println!("{}", value.to_text().trim_end()),
            }
        }
        Commands::Dump { input } => {
            let doc = parse_input(&loader, input.as_deref())?;
            print!("{}", doc.root().debug_dump());
        }
        Commands::Json {
            input,
            output,
            pretty,
        } => {
            let doc = parse_input(&loader, input.as_deref())?;
            let root = doc.root();
            let json = if pretty {
                gon_core::to_json_pretty(&root)
            } else {
                gon_core::to_json(&root)
            }
            .context("Failed to convert GON to JSON")?;
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
    }

    Ok(())
}

/// `-v` forces debug level; otherwise `RUST_LOG` applies with a `warn` default.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn parse_input(loader: &Loader, path: Option<&str>) -> Result<Document> {
    let text = read_input(path)?;
    let source = path.unwrap_or("<stdin>");
    debug!("parsing {source}");
    loader
        .load_from_buffer(&text)
        .with_context(|| format!("Failed to parse GON from {source}"))
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
            print!("{}", content);
        }
    }
    Ok(())
}
