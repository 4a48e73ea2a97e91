use std::io::{self, Write};

use crate::data::model::{DataFile, Match};
use crate::run::ScanSummary;

// ---------------------------------------------------------------------------
// Text report written to stdout (or any writer in tests)
// ---------------------------------------------------------------------------

/// Human-readable progress and match lines.
pub struct Report<W: Write> {
    out: W,
    columns: Option<Vec<String>>,
}

impl<W: Write> Report<W> {
    /// `columns`: `None` prints whole records, `Some(list)` only those columns.
    pub fn new(out: W, columns: Option<Vec<String>>) -> Self {
        Self { out, columns }
    }

    pub fn starting(&mut self) -> io::Result<()> {
        writeln!(self.out, "Starting...")
    }

    pub fn selected(&mut self, files: &[DataFile]) -> io::Result<()> {
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        writeln!(self.out, "Files: [{}]", names.join(", "))
    }

    pub fn trying(&mut self, file: &DataFile) -> io::Result<()> {
        writeln!(self.out, "Trying {}", file.name)
    }

    pub fn matched(&mut self, m: &Match) -> io::Result<()> {
        write!(self.out, "{}: {} matched ngram {}", m.file, m.year, m.ngram)?;
        let projected = match &self.columns {
            None => return writeln!(self.out, " {}", m.record),
            Some(cols) => m.record.project(cols),
        };
        if projected.is_empty() {
            writeln!(self.out)
        } else {
            writeln!(self.out, " {projected}")
        }
    }

    pub fn summary(&mut self, summary: &ScanSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "Done: {} file(s) scanned, {} match(es), {} failed",
            summary.outcomes.len(),
            summary.total_matches(),
            summary.failures().count()
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use std::path::Path;

    fn sample_match() -> Match {
        let headers = csv::StringRecord::from(vec!["ngram", "match_count", "volume_count"]);
        let row = csv::StringRecord::from(vec!["1880", "5", "3"]);
        Match {
            file: "sample.csv".into(),
            year: "1880".into(),
            ngram: "1880".into(),
            row: 1,
            record: Record::from_row(&headers, &row),
        }
    }

    fn render(columns: Option<Vec<String>>) -> String {
        let mut report = Report::new(Vec::new(), columns);
        report.matched(&sample_match()).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn full_record_by_default() {
        assert_eq!(
            render(None),
            "sample.csv: 1880 matched ngram 1880 {ngram: 1880, match_count: 5, volume_count: 3}\n"
        );
    }

    #[test]
    fn projected_columns() {
        assert_eq!(
            render(Some(vec!["match_count".into()])),
            "sample.csv: 1880 matched ngram 1880 {match_count: 5}\n"
        );
        assert_eq!(render(Some(Vec::new())), "sample.csv: 1880 matched ngram 1880\n");
    }

    #[test]
    fn progress_lines() {
        let base = Path::new("data");
        let files = vec![DataFile::new(base, "a.csv"), DataFile::new(base, "c.csv.bak")];

        let mut report = Report::new(Vec::new(), None);
        report.starting().unwrap();
        report.selected(&files).unwrap();
        report.trying(&files[0]).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        assert_eq!(text, "Starting...\nFiles: [a.csv, c.csv.bak]\nTrying a.csv\n");
    }
}
