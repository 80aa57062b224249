//! Command-line front end: segment domains and print one JSON line each.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use domseg::host::{host_from_url, looks_like_url};
use domseg::{Config, DomainParser};

/// Segment domain names into dictionary words, numbers, dashes and symbols.
#[derive(Debug, Parser)]
#[command(name = "domseg", version, about)]
struct Cli {
    /// Domains or URLs to segment; read from stdin when omitted
    domains: Vec<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list, one word per line (overrides the config)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Public Suffix List file (overrides the config)
    #[arg(short, long)]
    suffix_list: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = cli.dictionary {
        config.resources.dictionary = Some(path);
    }
    if let Some(path) = cli.suffix_list {
        config.resources.suffix_list = Some(path);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.output.pretty |= cli.pretty;

    init_logging(&config.logging.level);

    let resources = config
        .load_resources()
        .context("failed to load segmentation resources")?;
    let parser = resources.parser();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.domains.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            emit(&mut out, &config, &process(&parser, input, &config))?;
        }
    } else {
        for input in &cli.domains {
            emit(&mut out, &config, &process(&parser, input, &config))?;
        }
    }

    info!("done");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse one input into its JSON record. Rejections become error records.
fn process(parser: &DomainParser<'_>, input: &str, config: &Config) -> Value {
    match parse_input(parser, input) {
        Ok(mut value) => {
            if !config.output.include_alternate {
                if let Some(object) = value.as_object_mut() {
                    object.remove("alternate");
                }
            }
            value
        }
        Err(e) => {
            debug!(input, error = %e, "input rejected");
            json!({ "input": input, "error": e.to_string() })
        }
    }
}

fn parse_input(parser: &DomainParser<'_>, input: &str) -> Result<Value> {
    let host = if looks_like_url(input) {
        host_from_url(input)?
    } else {
        input.to_string()
    };

    let domain = parser.parse(&host)?;
    let value = serde_json::to_value(&domain).context("failed to serialize parsed domain")?;
    Ok(value)
}

fn emit<W: Write>(out: &mut W, config: &Config, value: &Value) -> Result<()> {
    let line = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{}", line)?;
    Ok(())
}
