use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ScanError – everything that can stop a scan
// ---------------------------------------------------------------------------

/// Failures raised while discovering or filtering data files.
///
/// Under the default abort-on-error policy any of these ends the run; output
/// already written stays on screen.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The base directory could not be listed.
    #[error("cannot list directory {}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A selected file could not be opened for reading.
    #[error("cannot open {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data row has no value for the match field.
    #[error("{file}: row {row} has no '{field}' field")]
    Schema {
        file: String,
        row: usize,
        field: &'static str,
    },

    /// The delimited data itself is malformed (ragged rows, bad UTF-8, ...).
    #[error("{file}: malformed delimited data")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    /// Short label used in the summary line and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::FileSystem { .. } => "filesystem",
            ScanError::FileAccess { .. } => "file access",
            ScanError::Schema { .. } => "schema",
            ScanError::Parse { .. } => "parse",
        }
    }

    /// The message followed by its source chain, `outer: inner: ...`.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_io_cause() {
        let err = ScanError::FileAccess {
            path: PathBuf::from("data/clean/a.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.kind(), "file access");
        assert_eq!(err.describe(), "cannot open data/clean/a.csv: gone");
    }

    #[test]
    fn schema_message_names_the_field() {
        let err = ScanError::Schema {
            file: "words.csv".into(),
            row: 4,
            field: "ngram",
        };
        assert_eq!(err.to_string(), "words.csv: row 4 has no 'ngram' field");
        assert_eq!(err.describe(), err.to_string());
    }
}
