//! `cjson` CLI: format, minify, check and query JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","tags":["a","b"]}' | cjson format
//!
//! # Minify from file to file
//! cjson minify -i data.json -o data.min.json
//!
//! # Validate, rejecting anything after the top-level value
//! cjson --strict check -i data.json
//!
//! # Read one entry by dotted path (list elements by index)
//! cjson get servers.0.port -i config.json
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) to see parser diagnostics on stderr.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use compound_json::{DeserializeOptions, Deserializer, Value};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cjson",
    version,
    about = "Format, minify, check and query JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reject any non-whitespace content after the top-level value
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum nesting depth of compounds and lists
    #[arg(long, global = true, default_value_t = compound_json::deserializer::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log parser diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-serialize JSON with 4-space indentation
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-serialize JSON without whitespace
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that the input parses, reporting the root type
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dotted path such as `servers.0.port`
    Get {
        /// Dot-separated keys and list indices
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let deserializer = Deserializer::with_options(DeserializeOptions {
        max_depth: cli.max_depth,
        allow_trailing_content: !cli.strict,
    });

    match cli.command {
        Commands::Format { input, output } => {
            let value = read_document(&deserializer, input.as_deref())?;
            let text = compound_json::serialize(&value, true).context("Failed to serialize JSON")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Minify { input, output } => {
            let value = read_document(&deserializer, input.as_deref())?;
            let text = compound_json::serialize(&value, false).context("Failed to serialize JSON")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Check { input } => {
            let value = read_document(&deserializer, input.as_deref())?;
            println!("valid ({})", describe(&value));
        }
        Commands::Get { path, input } => {
            let value = read_document(&deserializer, input.as_deref())?;
            let found = resolve_path(&value, &path)?;
            let text = compound_json::serialize(found, false).context("Failed to serialize JSON")?;
            println!("{text}");
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `-v` forces debug level; otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(deserializer: &Deserializer, path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    deserializer
        .deserialize(&text)
        .context("Failed to parse JSON")
}

/// Root type plus its size, e.g. `compound, 3 entries`.
fn describe(value: &Value) -> String {
    match value {
        Value::Compound(c) => format!("compound, {} entries", c.len()),
        Value::List(l) => format!("list, {} elements", l.len()),
        other => other.type_name().to_string(),
    }
}

/// Walk `path` through compounds (by key) and lists (by index) using verified
/// lookups, so a missing entry reports which one.
fn resolve_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            bail!("Empty segment in path '{}'", path);
        }
        current = match current {
            Value::Compound(compound) => compound
                .get_verified::<&Value>(segment)
                .with_context(|| format!("Failed to resolve '{}'", path))?,
            Value::List(list) => {
                let index: usize = segment
                    .parse()
                    .with_context(|| format!("'{}' is not a list index", segment))?;
                list.get_verified::<&Value>(index)
                    .with_context(|| format!("Failed to resolve '{}'", path))?
            }
            other => bail!(
                "Cannot look up '{}' inside a {} value",
                segment,
                other.type_name()
            ),
        };
        debug!(segment, found = current.type_name(), "resolved path segment");
    }
    Ok(current)
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
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
