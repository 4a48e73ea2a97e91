use crate::error::ScanError;

use super::loader::{open_table, TableReader};
use super::model::{DataFile, Match, TargetSet, MATCH_FIELD};

// ---------------------------------------------------------------------------
// Sieve – matches records against the target set
// ---------------------------------------------------------------------------

/// Row filter bound to a fixed [`TargetSet`].
#[derive(Debug, Clone)]
pub struct Sieve {
    targets: TargetSet,
}

impl Sieve {
    pub fn new(targets: TargetSet) -> Self {
        Sieve { targets }
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Open one data file and return a lazy stream of its matches.
    pub fn open(&self, file: &DataFile) -> Result<FileScan<'_>, ScanError> {
        Ok(FileScan {
            table: open_table(file)?,
            targets: &self.targets,
            done: false,
        })
    }

    /// Lazily scan `files` in order, stopping after the first error.
    pub fn matches<'a>(&'a self, files: &'a [DataFile]) -> Matches<'a> {
        Matches {
            sieve: self,
            files: files.iter(),
            current: None,
            done: false,
        }
    }
}

// ---------------------------------------------------------------------------
// FileScan – matches within a single file
// ---------------------------------------------------------------------------

/// Matches of one file, in row order. Finished after yielding an error.
pub struct FileScan<'a> {
    table: TableReader,
    targets: &'a TargetSet,
    done: bool,
}

impl Iterator for FileScan<'_> {
    type Item = Result<Match, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let (row, record) = match self.table.next()? {
                Ok(item) => item,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            let Some(ngram) = record.get(MATCH_FIELD) else {
                self.done = true;
                return Some(Err(ScanError::Schema {
                    file: self.table.file().to_string(),
                    row,
                    field: MATCH_FIELD,
                }));
            };

            if let Some(year) = self.targets.find(ngram) {
                let year = year.to_string();
                let ngram = ngram.to_string();
                return Some(Ok(Match {
                    file: self.table.file().to_string(),
                    year,
                    ngram,
                    row,
                    record,
                }));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Matches – abort-on-error stream across files
// ---------------------------------------------------------------------------

/// Matches across several files. Each file is opened only once the previous
/// one is exhausted; the first error is yielded and ends the stream.
pub struct Matches<'a> {
    sieve: &'a Sieve,
    files: std::slice::Iter<'a, DataFile>,
    current: Option<FileScan<'a>>,
    done: bool,
}

impl Iterator for Matches<'_> {
    type Item = Result<Match, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if let Some(scan) = self.current.as_mut() {
                match scan.next() {
                    Some(Ok(m)) => return Some(Ok(m)),
                    Some(Err(e)) => {
                        self.done = true;
                        self.current = None;
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }

            let Some(file) = self.files.next() else {
                self.done = true;
                break;
            };
            match self.sieve.open(file) {
                Ok(scan) => self.current = Some(scan),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
