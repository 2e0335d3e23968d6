//! Loading word lists to fill a tree with.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Reads at most `limit` lines from the UTF-8 file at `path`, without their line endings.
///
/// # Errors
///
/// [`BstError::Io`][crate::BstError::Io] if the file can't be opened or a line can't be read
/// (including invalid UTF-8).
pub fn read_lines(path: impl AsRef<Path>, limit: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let lines = reader
        .lines()
        .take(limit)
        .collect::<std::io::Result<Vec<_>>>()?;

    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BstError;

    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "linked-bst-{}-{}",
            std::process::id(),
            name
        ));
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn test_read_lines() {
        let path = temp_file("words", "apple\nbanana\r\ncherry\n");
        let words = read_lines(&path, 10).expect("read words");
        std::fs::remove_file(&path).ok();

        assert_eq!(words, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_read_lines_limit() {
        let path = temp_file("limited", "a\nb\nc\nd\n");
        let words = read_lines(&path, 2).expect("read words");
        std::fs::remove_file(&path).ok();

        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let result = read_lines("/definitely/not/a/word/list.txt", 10);

        assert!(matches!(result, Err(BstError::Io(_))));
    }
}
