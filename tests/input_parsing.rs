//! Tests for input list parsing (comments, blank lines, ordering).

use dns_batch::input::read_lines;
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn test_domain_list_mixed_comments_and_blanks() {
    let file = write_temp(
        "# Header\n\nexample.com\n# Middle comment\n   \nrust-lang.org\n# Footer\n",
    );
    let domains = read_lines(file.path()).await.unwrap();
    assert_eq!(domains, vec!["example.com", "rust-lang.org"]);
}

#[tokio::test]
async fn test_server_list_order_defines_fallback_priority() {
    let file = write_temp("9.9.9.9\n8.8.8.8\n1.1.1.1\n");
    let servers = read_lines(file.path()).await.unwrap();
    // Order must be preserved exactly: it is the fallback priority order
    assert_eq!(servers, vec!["9.9.9.9", "8.8.8.8", "1.1.1.1"]);
}

#[tokio::test]
async fn test_malformed_entries_pass_through() {
    // Malformed domains are not validated at read time; they surface later
    // as query failures
    let file = write_temp("not a domain!\nexample.com\n");
    let domains = read_lines(file.path()).await.unwrap();
    assert_eq!(domains, vec!["not a domain!", "example.com"]);
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let result = read_lines(std::path::Path::new("/no/such/file.txt")).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
