use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{ErrorPolicy, ScanConfig};
use crate::data::discovery::discover_files;
use crate::data::filter::Sieve;
use crate::data::model::DataFile;
use crate::error::ScanError;
use crate::report::Report;

// ---------------------------------------------------------------------------
// Per-file outcomes
// ---------------------------------------------------------------------------

/// Result of scanning one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub file: String,
    /// Matches emitted before the file finished (or failed).
    pub matches: usize,
    /// Set when the file could not be scanned to the end.
    pub error: Option<ScanError>,
}

/// Outcomes of every file that was attempted, in processing order.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl ScanSummary {
    pub fn total_matches(&self) -> usize {
        self.outcomes.iter().map(|o| o.matches).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.error.is_some())
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Discover the data files of `config.base_directory` and scan them all.
pub fn run<W: Write>(config: &ScanConfig, report: &mut Report<W>) -> Result<ScanSummary> {
    report.starting()?;

    let files = discover_files(&config.base_directory)?;
    log::info!(
        "{} data file(s) in {}",
        files.len(),
        config.base_directory.display()
    );
    report.selected(&files)?;

    let sieve = Sieve::new(config.target_set());
    log::debug!("targets: {:?}", sieve.targets().iter().collect::<Vec<_>>());
    scan_files(&sieve, &files, config.error_policy, report)
}

/// Scan `files` in order, writing every match to `report` as soon as it is
/// found.
///
/// With [`ErrorPolicy::AbortOnError`] the first failing file ends the run with
/// an error and later files are never opened. With
/// [`ErrorPolicy::SkipAndContinue`] the failure is recorded in that file's
/// outcome and the next file is scanned.
pub fn scan_files<W: Write>(
    sieve: &Sieve,
    files: &[DataFile],
    policy: ErrorPolicy,
    report: &mut Report<W>,
) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for file in files {
        report.trying(file)?;

        let mut matches = 0;
        let mut error = None;
        match sieve.open(file) {
            Ok(scan) => {
                for result in scan {
                    match result {
                        Ok(m) => {
                            report.matched(&m)?;
                            matches += 1;
                        }
                        Err(e) => {
                            error = Some(e);
                            break;
                        }
                    }
                }
            }
            Err(e) => error = Some(e),
        }

        match error {
            None => log::info!("{file}: {matches} match(es)"),
            Some(e) if policy == ErrorPolicy::AbortOnError => {
                return Err(e).with_context(|| format!("scan aborted at {}", file.name));
            }
            Some(ref e) => log::warn!("skipping rest of {file}: {}", e.describe()),
        }

        summary.outcomes.push(FileOutcome {
            file: file.name.clone(),
            matches,
            error,
        });
    }

    Ok(summary)
}
