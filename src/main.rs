use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bloom_eval::{BloomFilter, Evaluator, WordList};

/// Measure Bloom filter accuracy against an exact word list.
///
/// Loads every word of the reference list into the filter and into an
/// exact ground-truth set, then classifies every query word into a
/// true/false positive/negative bucket.
#[derive(Parser)]
#[clap(name = "bloom-eval")]
struct Args {
    /// Reference word list loaded into the filter and the ground truth.
    reference: PathBuf,

    /// Query word list checked against the filter.
    queries: PathBuf,

    /// Bit-array length of the filter.
    #[clap(long, default_value_t = 206_237_738)]
    size: u64,

    /// Number of salted hash rounds per word.
    #[clap(long, default_value_t = 10)]
    hashes: u64,

    /// Print "maybe"/"no" for every query word.
    #[clap(long)]
    verdicts: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let filter = BloomFilter::new(args.size, args.hashes)?;
    let mut evaluator = Evaluator::new(filter);

    info!(size = args.size, hashes = args.hashes, "loading reference word list");
    let loaded = evaluator.load(WordList::open(&args.reference)?)?;
    info!(
        loaded,
        fill_ratio = evaluator.filter().fill_ratio(),
        "reference word list loaded"
    );

    let queries = WordList::open(&args.queries)?;
    let matrix = if args.verdicts {
        evaluator.run_with(queries, |_, predicted| {
            println!("{}", if predicted { "maybe" } else { "no" });
        })?
    } else {
        evaluator.run(queries)?
    };
    info!(queries = matrix.total(), "query word list evaluated");

    println!("{matrix}");
    Ok(())
}
