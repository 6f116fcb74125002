//! Input file readers for the domain list and the resolver list.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads a line-per-entry list file.
///
/// Entries are trimmed; blank lines and `#` comment lines are skipped.
/// No further validation is done: a malformed domain is passed through and
/// surfaces as a query failure.
pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[tokio::test]
    async fn test_read_lines_skips_comments_and_blanks() {
        let file = write_temp("# resolvers\n8.8.8.8\n\n   \n1.1.1.1\n  # trailing comment\n");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["8.8.8.8", "1.1.1.1"]);
    }

    #[tokio::test]
    async fn test_read_lines_trims_whitespace() {
        let file = write_temp("  example.com  \n\texample.org\n");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["example.com", "example.org"]);
    }

    #[tokio::test]
    async fn test_read_lines_preserves_order() {
        let file = write_temp("b.com\na.com\nc.com\n");
        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["b.com", "a.com", "c.com"]);
    }

    #[tokio::test]
    async fn test_read_lines_missing_file() {
        let result = read_lines(Path::new("/nonexistent/domains.txt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_lines_empty_file() {
        let file = write_temp("");
        let lines = read_lines(file.path()).await.unwrap();
        assert!(lines.is_empty());
    }
}
