//! End-to-end runs of the migrate command against files on disk.

use std::fs;
use std::path::Path;

use crm_cli::migrate::{MigrateOptions, load_mapping, run_migration};
use crm_core::Execution;
use crm_model::{CanonicalField, RejectedRecord};
use crm_output::{ACCEPTED_FILE_NAME, REJECTED_FILE_NAME, WriteMode};

const DUMP: &str = "client_id;full_name;email;phone;registration_date;account_status\n\
                    1000;Grace Hopper;g@h.com;;15/01/2024;Y\n\
                    1001;Jane;bademail;;2024-01-15;N\n\
                    1002;Ada Lovelace;ada@example.org;007-555-0100;2024-01-15;MAYBE\n\
                    1003;Alan Turing;alan@example.org;;;0\n";

fn write_dump(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("customer_dump.csv");
    fs::write(&path, DUMP).unwrap();
    path
}

#[test]
fn migrates_dump_and_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dump(dir.path());

    let report = run_migration(&MigrateOptions::new(&input)).unwrap();

    let summary = report.result.summary();
    assert_eq!(summary.input, 4);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.soft_failures, 0);
    assert_eq!(report.output_dir, dir.path().join("output"));

    let outputs = report.outputs.expect("outputs written");
    let csv = fs::read_to_string(&outputs.accepted_csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Grace,Hopper,g@h.com,,2024-01-15,true,1000");
    assert_eq!(lines[2], "Alan,Turing,alan@example.org,,,false,1003");

    let rejected: Vec<RejectedRecord> =
        serde_json_from_file(&outputs.rejection_report);
    let indices: Vec<usize> = rejected.iter().map(|r| r.record_index).collect();
    assert_eq!(indices, vec![1, 2]);
    let jane_fields: Vec<&str> = rejected[0].errors.iter().map(|e| e.field.as_str()).collect();
    assert!(jane_fields.contains(&"first_name"));
    assert!(jane_fields.contains(&"last_name"));
    assert!(jane_fields.contains(&"email"));
    assert_eq!(rejected[1].errors.len(), 1);
    assert_eq!(rejected[1].errors[0].field, "is_active");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dump(dir.path());
    let mut options = MigrateOptions::new(&input);
    options.dry_run = true;

    let report = run_migration(&options).unwrap();

    assert!(report.outputs.is_none());
    assert_eq!(report.result.accepted.len(), 2);
    assert!(!dir.path().join("output").exists());
}

#[test]
fn append_mode_accumulates_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dump(dir.path());
    let out = dir.path().join("load");
    let mut options = MigrateOptions::new(&input);
    options.output_dir = Some(out.clone());
    options.write_mode = WriteMode::Append;
    options.execution = Execution::Sequential;

    run_migration(&options).unwrap();
    run_migration(&options).unwrap();

    let csv = fs::read_to_string(out.join(ACCEPTED_FILE_NAME)).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(out.join(REJECTED_FILE_NAME).exists());
}

#[test]
fn custom_mapping_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.json");
    fs::write(
        &input,
        r#"[{"id": 7, "name": "Hopper,Grace", "mail": "g@h.com", "active": true}]"#,
    )
    .unwrap();
    let mapping = dir.path().join("mapping.toml");
    fs::write(
        &mapping,
        r#"
[rename]
id = "source_system_id"
mail = "email"
active = "is_active"

[[split]]
legacy = "name"
targets = ["last_name", "first_name"]
rule = { delimiter = "," }
"#,
    )
    .unwrap();
    let mut options = MigrateOptions::new(&input);
    options.mapping = Some(mapping);
    options.dry_run = true;

    let report = run_migration(&options).unwrap();

    assert_eq!(report.result.accepted.len(), 1);
    let customer = &report.result.accepted[0];
    assert_eq!(customer.first_name, "Grace");
    assert_eq!(customer.last_name, "Hopper");
    assert_eq!(customer.source_system_id, Some(7));
    assert!(customer.is_active);
}

#[test]
fn strict_mode_rejects_unreadable_dates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dump.csv");
    fs::write(
        &input,
        "full_name,email,registration_date,account_status\n\
         Grace Hopper,g@h.com,sometime,Y\n",
    )
    .unwrap();

    let lenient = {
        let mut options = MigrateOptions::new(&input);
        options.dry_run = true;
        run_migration(&options).unwrap()
    };
    assert_eq!(lenient.result.accepted.len(), 1);
    assert_eq!(lenient.result.accepted[0].registration_date, None);
    assert_eq!(lenient.result.summary().soft_failures, 1);
    assert_eq!(lenient.result.soft_failures[0].raw, "sometime");

    let mut options = MigrateOptions::new(&input);
    options.dry_run = true;
    options.strict = true;
    let strict = run_migration(&options).unwrap();
    assert_eq!(strict.result.rejected.len(), 1);
    assert_eq!(strict.result.summary().soft_failures, 0);
    assert_eq!(
        strict.result.rejected[0].errors[0].field,
        CanonicalField::RegistrationDate.as_str()
    );
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_migration(&MigrateOptions::new(dir.path().join("absent.csv"))).unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn default_mapping_when_no_file_given() {
    let spec = load_mapping(None).unwrap();
    assert!(spec.unproduced_required_fields().is_empty());
}

fn serde_json_from_file(path: &Path) -> Vec<RejectedRecord> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
