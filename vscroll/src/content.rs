//! Item sources: lines of a file, or generated filler text.

use std::path::Path;

const LOREM: &str = "Lorem, ipsum dolor sit amet consectetur adipisicing elit. Dolore dolorum \
    adipisci quisquam, modi reiciendis explicabo nam, ea nulla nemo error eligendi amet eius. \
    Repellendus rem esse incidunt, nemo ratione libero.";

/// `count` numbered filler items: `"0. Lorem, ipsum …"`, `"1. Lorem, ipsum …"`, ….
pub fn sample_items(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{i}. {LOREM}")).collect()
}

/// Every line of the file at `path`, trailing newlines stripped.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not valid UTF-8.
pub fn load_items(path: &Path) -> std::io::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(raw.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_are_numbered() {
        let items = sample_items(3);
        assert_eq!(items.len(), 3);
        assert!(items[0].starts_with("0. Lorem, ipsum"));
        assert!(items[2].starts_with("2. "));
        assert!(items[2].ends_with("ratione libero."));
    }

    #[test]
    fn load_items_splits_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "alpha\nbeta\r\ngamma\n").unwrap();
        assert_eq!(load_items(&path).unwrap(), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn load_items_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_items(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
