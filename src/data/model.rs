use std::fmt;
use std::path::{Path, PathBuf};

/// Column every data file must carry; its value is compared against the targets.
pub const MATCH_FIELD: &str = "ngram";

// ---------------------------------------------------------------------------
// TargetSet – the years we are looking for
// ---------------------------------------------------------------------------

/// Ordered set of ngram values searched for during a run.
///
/// Duplicates are dropped on construction (first occurrence wins), so a record
/// can never match more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    values: Vec<String>,
}

impl TargetSet {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        TargetSet { values: unique }
    }

    /// Return the target equal to `ngram`, if any.
    ///
    /// Exact, case-sensitive comparison; whitespace is significant.
    pub fn find(&self, ngram: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|target| target.as_str() == ngram)
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// DataFile – one selected input file
// ---------------------------------------------------------------------------

/// A delimited table on disk, selected by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    /// Entry name as listed in the base directory.
    pub name: String,
    /// `base_directory/name`.
    pub path: PathBuf,
}

impl DataFile {
    pub fn new(base_directory: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = base_directory.join(&name);
        DataFile { name, path }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ---------------------------------------------------------------------------
// Record – one row of a data file
// ---------------------------------------------------------------------------

/// A parsed data row: `(column name, value)` pairs in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Pair up a header row with a data row of the same width.
    pub fn from_row(headers: &csv::StringRecord, row: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Record { fields }
    }

    /// Value of `column`. With a repeated header name the rightmost column
    /// wins; `fields` and `Display` still show every column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Keep only `columns`, in the order given. Unknown columns are skipped.
    pub fn project(&self, columns: &[String]) -> Record {
        let fields = columns
            .iter()
            .filter_map(|col| self.get(col).map(|value| (col.clone(), value.to_string())))
            .collect();
        Record { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

// ---------------------------------------------------------------------------
// Match – what the filter emits
// ---------------------------------------------------------------------------

/// A record whose ngram equals one of the targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Name of the file the record came from.
    pub file: String,
    /// The target value that matched.
    pub year: String,
    /// The record's ngram value (always equal to `year`).
    pub ngram: String,
    /// 1-based data row number, not counting the header.
    pub row: usize,
    pub record: Record,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(values.to_vec())
    }

    #[test]
    fn target_set_drops_duplicates_in_order() {
        let targets = TargetSet::new(["1912", "1880", "1912"]);
        assert_eq!(targets.iter().collect::<Vec<_>>(), vec!["1912", "1880"]);
    }

    #[test]
    fn target_set_matches_exactly() {
        let targets = TargetSet::new(["1880", "1912", "1973"]);
        assert_eq!(targets.find("1912"), Some("1912"));
        assert_eq!(targets.find("1880 "), None);
        assert_eq!(targets.find(" 1880"), None);
        assert_eq!(targets.find("1881"), None);
        assert_eq!(targets.find(""), None);
    }

    #[test]
    fn record_keeps_header_order() {
        let headers = row(&["ngram", "match_count", "volume_count"]);
        let record = Record::from_row(&headers, &row(&["1880", "5", "3"]));

        assert_eq!(
            record.fields().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["ngram", "match_count", "volume_count"]
        );
        assert_eq!(record.get("match_count"), Some("5"));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.to_string(), "{ngram: 1880, match_count: 5, volume_count: 3}");
    }

    #[test]
    fn repeated_column_resolves_to_the_last_one() {
        let headers = row(&["ngram", "count", "ngram"]);
        let record = Record::from_row(&headers, &row(&["1880", "7", "1999"]));

        assert_eq!(record.get("ngram"), Some("1999"));
        assert_eq!(record.to_string(), "{ngram: 1880, count: 7, ngram: 1999}");
        assert_eq!(record.project(&["ngram".into()]).to_string(), "{ngram: 1999}");
    }

    #[test]
    fn projection_follows_requested_order() {
        let headers = row(&["ngram", "match_count", "volume_count"]);
        let record = Record::from_row(&headers, &row(&["1880", "5", "3"]));

        let narrowed = record.project(&["volume_count".into(), "nope".into(), "ngram".into()]);
        assert_eq!(narrowed.to_string(), "{volume_count: 3, ngram: 1880}");
        assert!(record.project(&[]).is_empty());
    }

    #[test]
    fn data_file_joins_base_directory() {
        let file = DataFile::new(Path::new("data/clean"), "a.csv");
        assert_eq!(file.path, Path::new("data/clean").join("a.csv"));
        assert_eq!(file.to_string(), "a.csv");
    }
}
