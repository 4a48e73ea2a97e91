use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::prelude::*;

/// Write a small deterministic ngram corpus to try `ngram-sieve` on.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output directory (created if missing)
    #[arg(default_value = "data/clean")]
    out_dir: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One CSV per "volume shard"; each row is a year token with counts.
fn write_shard(path: &Path, first_year: u32, last_year: u32, rng: &mut StdRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["ngram", "match_count", "volume_count"])?;

    let mut rows = 0;
    for year in first_year..=last_year {
        // not every year shows up in every shard
        if rng.random_range(0..4) == 0 {
            continue;
        }
        let volumes = rng.random_range(1..40u64);
        let matches = volumes + rng.random_range(0..volumes * 5);
        writer.write_record([year.to_string(), matches.to_string(), volumes.to_string()])?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let shards = [
        ("1-grams-1800-1899.csv", 1800, 1899),
        ("1-grams-1900-1999.csv", 1900, 1999),
        ("1-grams-2000.csv.bak", 1990, 2000),
    ];
    for (name, first, last) in shards {
        let path = args.out_dir.join(name);
        let rows = write_shard(&path, first, last, &mut rng)?;
        log::info!("{name}: {rows} rows");
        println!("Wrote {rows} rows to {}", path.display());
    }

    // Not selected by the scanner: the name has no "csv" in it.
    let ignored = args.out_dir.join("README.txt");
    std::fs::write(&ignored, "ngram,match_count,volume_count\n1880,1,1\n")
        .with_context(|| format!("writing {}", ignored.display()))?;
    println!("Wrote decoy {}", ignored.display());

    Ok(())
}
