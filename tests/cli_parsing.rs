//! Tests for command-line parsing and defaults.

use clap::Parser;
use dns_batch::{Config, OnConflict};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["dns_batch", "domains.txt"]).unwrap();
    assert_eq!(config.domains, PathBuf::from("domains.txt"));
    assert_eq!(config.types, "A,AAAA,CNAME");
    assert_eq!(config.servers, PathBuf::from("dns_servers.txt"));
    assert_eq!(config.output, PathBuf::from("dns_records.csv"));
    assert_eq!(config.on_conflict, OnConflict::Ask);
    assert_eq!(config.timeout_seconds, 5);
}

#[test]
fn test_domains_file_is_required() {
    let result = Config::try_parse_from(["dns_batch"]);
    assert!(result.is_err());
}

#[test]
fn test_short_types_flag() {
    let config = Config::try_parse_from(["dns_batch", "domains.txt", "-t", "MX,TXT"]).unwrap();
    assert_eq!(config.record_types(), vec!["MX", "TXT"]);
}

#[test]
fn test_on_conflict_values() {
    for (value, expected) in [
        ("ask", OnConflict::Ask),
        ("overwrite", OnConflict::Overwrite),
        ("append", OnConflict::Append),
        ("cancel", OnConflict::Cancel),
    ] {
        let config =
            Config::try_parse_from(["dns_batch", "domains.txt", "--on-conflict", value]).unwrap();
        assert_eq!(config.on_conflict, expected);
    }
}

#[test]
fn test_invalid_on_conflict_rejected() {
    let result = Config::try_parse_from(["dns_batch", "domains.txt", "--on-conflict", "merge"]);
    assert!(result.is_err());
}

#[test]
fn test_custom_paths_and_timeout() {
    let config = Config::try_parse_from([
        "dns_batch",
        "hosts.txt",
        "--servers",
        "resolvers.txt",
        "--output",
        "out.csv",
        "--timeout-seconds",
        "2",
    ])
    .unwrap();
    assert_eq!(config.domains, PathBuf::from("hosts.txt"));
    assert_eq!(config.servers, PathBuf::from("resolvers.txt"));
    assert_eq!(config.output, PathBuf::from("out.csv"));
    assert_eq!(config.timeout_seconds, 2);
}
