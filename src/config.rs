use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::data::model::TargetSet;

pub const DEFAULT_BASE_DIRECTORY: &str = "./data/clean";
pub const DEFAULT_TARGET_YEARS: [&str; 3] = ["1880", "1912", "1973"];

// ---------------------------------------------------------------------------
// Error policy
// ---------------------------------------------------------------------------

/// What to do when a single file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first error.
    #[default]
    AbortOnError,
    /// Record the failure for that file and move on to the next one.
    SkipAndContinue,
}

// ---------------------------------------------------------------------------
// ScanConfig – everything a run needs
// ---------------------------------------------------------------------------

/// Run configuration. Defaults reproduce the fixed behaviour: scan
/// `./data/clean` for the years 1880, 1912 and 1973, abort on first error,
/// print full records.
///
/// JSON form (all keys optional):
/// ```json
/// {
///   "baseDirectory": "./data/clean",
///   "targetYears": ["1880", "1912", "1973"],
///   "errorPolicy": "skip-and-continue",
///   "columns": ["match_count"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ScanConfig {
    pub base_directory: PathBuf,
    pub target_years: Vec<String>,
    pub error_policy: ErrorPolicy,
    /// Columns to print for each match. `None` prints the whole record;
    /// an empty list prints only the year and the ngram.
    pub columns: Option<Vec<String>>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from(DEFAULT_BASE_DIRECTORY),
            target_years: DEFAULT_TARGET_YEARS.iter().map(|y| y.to_string()).collect(),
            error_policy: ErrorPolicy::default(),
            columns: None,
        }
    }
}

impl ScanConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolve the final config: defaults, then `--config`, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(dir) = &cli.base_dir {
            config.base_directory = dir.clone();
        }
        if !cli.years.is_empty() {
            config.target_years = cli.years.clone();
        }
        if let Some(policy) = cli.policy {
            config.error_policy = policy;
        }
        if cli.year_only {
            config.columns = Some(Vec::new());
        } else if !cli.columns.is_empty() {
            config.columns = Some(cli.columns.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_years.is_empty() {
            bail!("at least one target year is required");
        }
        Ok(())
    }

    pub fn target_set(&self) -> TargetSet {
        TargetSet::new(self.target_years.iter().cloned())
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Report rows of ngram CSV files whose `ngram` is one of the target years.
///
/// Every entry of the base directory whose name contains "csv" is scanned,
/// including names like `a.csv.bak` or `csvfile.txt`.
#[derive(Debug, Parser)]
#[command(name = "ngram-sieve", version, about)]
pub struct Cli {
    /// JSON config file (keys: baseDirectory, targetYears, errorPolicy, columns)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the data files [default: ./data/clean]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Target year; repeat for several [default: 1880 1912 1973]
    #[arg(short, long = "year", value_name = "YEAR")]
    pub years: Vec<String>,

    /// What to do when a file cannot be read [default: abort-on-error]
    #[arg(short, long, value_enum)]
    pub policy: Option<ErrorPolicy>,

    /// Only print these columns of each match; repeat for several
    #[arg(long = "column", value_name = "NAME", conflicts_with = "year_only")]
    pub columns: Vec<String>,

    /// Print only the year and ngram of each match
    #[arg(long)]
    pub year_only: bool,
}
