use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

use super::model::{DataFile, Record};

// ---------------------------------------------------------------------------
// Header-labelled table reader
// ---------------------------------------------------------------------------

/// Lazy reader over one delimited file.
///
/// The header row is read when the table is opened, so every [`Record`]
/// yielded afterwards is keyed by exactly those column names. Rows of a
/// different width are rejected by the `csv` reader and surface as
/// [`ScanError::Parse`]. The file handle is released when the reader drops.
pub struct TableReader {
    file: String,
    path: PathBuf,
    headers: csv::StringRecord,
    rows: csv::StringRecordsIntoIter<File>,
    row_no: usize,
}

/// Open `file` and read its header row.
///
/// An empty file yields an empty header and no rows.
pub fn open_table(file: &DataFile) -> Result<TableReader, ScanError> {
    let handle = File::open(&file.path).map_err(|source| ScanError::FileAccess {
        path: file.path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(handle);
    let headers = reader
        .headers()
        .map_err(|source| read_error(&file.name, &file.path, source))?
        .clone();

    let table = TableReader {
        file: file.name.clone(),
        path: file.path.clone(),
        headers,
        rows: reader.into_records(),
        row_no: 0,
    };
    log::debug!("{file}: columns {:?}", table.headers().iter().collect::<Vec<_>>());
    Ok(table)
}

impl TableReader {
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn headers(&self) -> &csv::StringRecord {
        &self.headers
    }
}

impl Iterator for TableReader {
    /// `(1-based data row number, record)`
    type Item = Result<(usize, Record), ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.rows.next()?;
        self.row_no += 1;
        Some(match result {
            Ok(row) => Ok((self.row_no, Record::from_row(&self.headers, &row))),
            Err(source) => Err(read_error(&self.file, &self.path, source)),
        })
    }
}

/// I/O failures underneath the reader (e.g. the entry is a directory) mean
/// the file could not be read at all; everything else is malformed data.
fn read_error(file: &str, path: &Path, source: csv::Error) -> ScanError {
    if !source.is_io_error() {
        return ScanError::Parse {
            file: file.to_string(),
            source,
        };
    }
    let source = match source.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, format!("{other:?}")),
    };
    ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
