use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use pathlite::cache::PathCache;
use pathlite::config::Config;
use pathlite::file::loader::{load_document, load_document_from_stdin};
use pathlite::jsonpath::Evaluator;

/// pathlite - query YAML and JSON documents with compact path expressions
#[derive(Parser)]
#[command(name = "pathlite")]
#[command(version)]
#[command(about = "Query YAML and JSON documents with path expressions", long_about = None)]
struct Cli {
    /// Path expression, e.g. "$[2]..['name','id']"
    expression: String,

    /// Document to query (omit to read from stdin)
    file: Option<String>,

    /// Print the compiled tokens instead of evaluating
    #[arg(short, long)]
    tokens: bool,

    /// Output format: yaml or json (default from config)
    #[arg(short, long)]
    format: Option<String>,

    /// Print only the first match
    #[arg(long)]
    first: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();
    let cache = PathCache::with_capacity(config.cache_capacity);

    let path = cache
        .get_or_compile(&cli.expression)
        .with_context(|| format!("Cannot compile '{}'", cli.expression))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tokens {
        for token in &path.tokens {
            writeln!(out, "{:?}", token)?;
        }
        return Ok(());
    }

    let document = match &cli.file {
        Some(file_path) => load_document(file_path)?,
        None => load_document_from_stdin()?,
    };

    let evaluator = Evaluator::new(&document);
    let mut matches = evaluator.evaluate(&path.tokens);
    log::debug!("'{}' matched {} node(s)", path, matches.len());
    if cli.first || config.first_only {
        matches.truncate(1);
    }

    let json = match cli.format.as_deref() {
        Some(format) if format.eq_ignore_ascii_case("json") => true,
        Some(format) if format.eq_ignore_ascii_case("yaml") => false,
        Some(format) => anyhow::bail!("Unknown output format '{}', expected yaml or json", format),
        None => config.json_output(),
    };

    if json {
        for value in matches {
            writeln!(out, "{}", serde_json::to_string(value)?)?;
        }
    } else {
        for value in matches {
            write!(out, "---\n{}", serde_yaml::to_string(value)?)?;
        }
    }

    Ok(())
}
