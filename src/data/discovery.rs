use std::path::Path;

use crate::error::ScanError;

use super::model::DataFile;

/// Substring that marks a directory entry as a data file.
///
/// This is a plain `contains` test, not an extension check: `csvfile.txt` and
/// `a.csv.bak` are selected too. Corpora have been curated against this
/// behaviour, so tightening it would change which files get scanned.
pub const FILE_MARKER: &str = "csv";

/// List `base_directory` (non-recursively) and return every entry whose name
/// contains [`FILE_MARKER`], in the order the directory listing yields them.
pub fn discover_files(base_directory: &Path) -> Result<Vec<DataFile>, ScanError> {
    let fs_error = |source| ScanError::FileSystem {
        path: base_directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(base_directory).map_err(fs_error)? {
        let entry = entry.map_err(fs_error)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if is_data_file(&name) {
            log::debug!("selected {name}");
            files.push(DataFile {
                name: name.into_owned(),
                path: entry.path(),
            });
        } else {
            log::debug!("ignored {name}");
        }
    }
    Ok(files)
}

pub fn is_data_file(name: &str) -> bool {
    name.contains(FILE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[DataFile]) -> Vec<String> {
        let mut names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn selects_names_containing_marker() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.csv", "b.txt", "c.csv.bak"] {
            std::fs::write(dir.path().join(name), "ngram\n").unwrap();
        }

        let files = discover_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.csv", "c.csv.bak"]);
        for file in &files {
            assert_eq!(file.path, dir.path().join(&file.name));
        }
    }

    #[test]
    fn keeps_directory_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z.csv", "notes.md", "m.csv", "a.csv.bak", "csvfile.txt", "b.tsv"] {
            std::fs::write(dir.path().join(name), "ngram\n").unwrap();
        }

        let listed: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains("csv"))
            .collect();
        let discovered: Vec<String> = discover_files(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(discovered.len(), 4);
        assert_eq!(discovered, listed);
    }

    #[test]
    fn marker_is_a_substring_match() {
        assert!(is_data_file("csvfile.txt"));
        assert!(is_data_file("1-grams.csv"));
        assert!(!is_data_file("1-grams.CSV"));
        assert!(!is_data_file("notes.tsv"));
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.csv"), "ngram\n").unwrap();
        std::fs::write(dir.path().join("top.csv"), "ngram\n").unwrap();

        let files = discover_files(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.csv"]);
    }

    #[test]
    fn empty_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("readme.md"), "hi").unwrap();

        assert!(discover_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = discover_files(&missing).unwrap_err();
        assert!(matches!(err, ScanError::FileSystem { ref path, .. } if *path == missing));
    }
}
