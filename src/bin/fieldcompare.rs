//! fieldcompare: Compare JSON records from several platforms field by field
//!
//! Each input file holds one JSON document; the i-th file is labeled with the
//! i-th platform name.
//!
//! Usage:
//!   # Compare four product exports, markdown table to stdout
//!   fieldcompare magento.json woocommerce.json shopify.json lightspeed.json
//!
//!   # Custom platform names, JSON output
//!   fieldcompare --platforms Shopify,BigCommerce a.json b.json --format json
//!
//!   # Only rows under the "variants" field
//!   fieldcompare --filter '^variants' *.json
//!
//!   # Read one of the inputs from stdin
//!   curl -s https://example.com/product.json | fieldcompare - local.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use fieldcompare::input::{load_value, read_value};
use fieldcompare::{logging, CompareConfig, ComparisonBuilder, MarkdownTable};
use regex::Regex;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fieldcompare")]
#[command(about = "Compare JSON records from several platforms field by field", long_about = None)]
struct Args {
    /// Input files, one per platform in platform order ("-" reads stdin)
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<String>,

    /// Comma-separated platform names (default: Magento,WooCommerce,Shopify,Lightspeed)
    #[arg(long)]
    platforms: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Compact JSON output (no pretty-printing)
    #[arg(long)]
    compact: bool,

    /// Only keep rows whose field path matches this regular expression
    #[arg(long)]
    filter: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.platforms {
        Some(names) => CompareConfig::new(names.split(',').map(|s| s.trim().to_string())),
        None => CompareConfig::default(),
    };
    config.validate().context("Invalid --platforms")?;

    let filter = args
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("Invalid --filter expression")?;

    let inputs = load_inputs(&args.inputs)?;
    info!(inputs = inputs.len(), platforms = config.platforms.len(), "comparing");

    let mut results = ComparisonBuilder::new(config.clone()).build(&inputs)?;
    if let Some(filter) = &filter {
        results.retain(|result| filter.is_match(result.key.as_str()));
    }

    let output = match args.format {
        OutputFormat::Markdown => MarkdownTable::new(&config.platforms).render(&results),
        OutputFormat::Json if args.compact => serde_json::to_string(&results)?,
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
    };

    print!("{}", output);
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Load every input in order; stdin may be used at most once
fn load_inputs(paths: &[String]) -> Result<Vec<Value>> {
    if paths.iter().filter(|p| p.as_str() == "-").count() > 1 {
        bail!("stdin (\"-\") can only be given once");
    }

    paths
        .iter()
        .map(|path| {
            if path == "-" {
                read_value(std::io::stdin().lock()).context("Failed to load JSON from stdin")
            } else {
                load_value(path)
            }
        })
        .collect()
}
