//! Generated dumps fed back through the migrate command.

use std::collections::HashSet;
use std::fs;

use crm_cli::generate::{GenerateOptions, LEGACY_COLUMNS, generate_dump};
use crm_cli::migrate::{MigrateOptions, run_migration};

#[test]
fn generated_dump_migrates_with_consistent_counts() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = GenerateOptions::new(dir.path().join("raw").join("customer_dump.csv"));
    options.count = 400;
    let generated = generate_dump(&options).unwrap();
    assert_eq!(generated.records, 400);

    let report = run_migration(&MigrateOptions::new(&generated.output)).unwrap();

    let result = &report.result;
    assert!(result.is_consistent());
    assert_eq!(result.input_count, 400);
    assert_eq!(result.accepted.len() + result.rejected.len(), 400);
    assert!(result.soft_failures.is_empty());

    let ids: Vec<i64> = result
        .accepted
        .iter()
        .filter_map(|customer| customer.source_system_id)
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.first(), Some(&1_000));

    let emails: HashSet<&str> = result.accepted.iter().map(|c| c.email.as_str()).collect();
    assert_eq!(
        emails.len() + generated.duplicate_emails,
        result.accepted.len()
    );
}

#[test]
fn dump_is_semicolon_separated_with_legacy_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = GenerateOptions::new(dir.path().join("dump.csv"));
    options.count = 5;
    generate_dump(&options).unwrap();

    let contents = fs::read_to_string(dir.path().join("dump.csv")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(LEGACY_COLUMNS.join(";").as_str()));
    let first = lines.next().unwrap();
    assert!(first.starts_with("1000;"));
    assert_eq!(first.split(';').count(), LEGACY_COLUMNS.len());
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn same_seed_writes_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, seed: u64| {
        let mut options = GenerateOptions::new(dir.path().join(name));
        options.count = 100;
        options.seed = seed;
        fs::read_to_string(generate_dump(&options).unwrap().output).unwrap()
    };

    assert_eq!(write("a.csv", 42), write("b.csv", 42));
    assert_ne!(write("a.csv", 42), write("c.csv", 43));
}

#[test]
fn empty_dump_still_has_a_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = GenerateOptions::new(dir.path().join("empty.csv"));
    options.count = 0;
    let generated = generate_dump(&options).unwrap();

    assert_eq!(generated.records, 0);
    let contents = fs::read_to_string(&generated.output).unwrap();
    assert_eq!(contents.trim_end(), LEGACY_COLUMNS.join(";"));
}
