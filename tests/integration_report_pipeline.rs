//! Integration tests for the full load / store / report pipeline
//!
//! These tests drive the public surface the way the CLI does: seed or
//! write an input file, load it under an explicit policy, replace the
//! store, and write the report back out.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use recfile_processor::app::services::aggregator;
use recfile_processor::app::services::record_store::RecordStore;
use recfile_processor::app::services::report_file::{ReportReader, ReportWriter};
use recfile_processor::{
    Grade, InventoryItem, LoadOptions, LoadPolicy, RecordSchema, StudentResult,
};

fn seed_inventory() -> Vec<InventoryItem> {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    };
    vec![
        InventoryItem::new(1, "Laptop Computer", 25, date(2025, 7, 15)),
        InventoryItem::new(2, "Office Chair", 50, date(2025, 7, 20)),
        InventoryItem::new(3, "Wireless Mouse", 100, date(2025, 7, 25)),
        InventoryItem::new(4, "Monitor 24 inch", 30, date(2025, 8, 1)),
        InventoryItem::new(5, "USB Cable", 200, date(2025, 8, 5)),
    ]
}

/// Seed, save, clear, reload: the session cycle of the inventory log
#[test]
fn test_inventory_save_clear_reload_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.txt");

    let mut store = RecordStore::new();
    for item in seed_inventory() {
        store.append(item.to_record());
    }
    assert_eq!(store.count(), 5);

    let schema = RecordSchema::inventory();
    ReportWriter::new(schema.clone())
        .save(&path, &store.all())
        .unwrap();

    // simulate a new session
    store.clear();
    assert!(store.is_empty());

    let reader = ReportReader::new(schema, LoadOptions::lenient());
    let stats = reader.load_into(&mut store, &path).unwrap();

    assert_eq!(stats.records_loaded, 5);
    assert!(stats.is_clean());
    assert_eq!(store.count(), 5);

    let reloaded: Vec<InventoryItem> = store
        .records()
        .iter()
        .map(|record| InventoryItem::from_record(record).unwrap())
        .collect();
    assert_eq!(reloaded, seed_inventory());
}

/// Saving a reloaded file reproduces the data lines byte for byte
#[test]
fn test_inventory_round_trip_is_stable() {
    let dir = TempDir::new().unwrap();
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");

    let schema = RecordSchema::inventory();
    let records: Vec<_> = seed_inventory().iter().map(InventoryItem::to_record).collect();
    ReportWriter::new(schema.clone())
        .save(&first_path, &records)
        .unwrap();

    let reader = ReportReader::new(schema.clone(), LoadOptions::lenient());
    let outcome = reader.load(&first_path).unwrap();
    ReportWriter::new(schema)
        .save(&second_path, &outcome.records)
        .unwrap();

    let data_lines = |path: &std::path::Path| -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .skip(6) // header, blank, marker, separator
            .map(str::to_string)
            .collect()
    };
    assert_eq!(data_lines(&first_path), data_lines(&second_path));
}

/// Student files load strictly and produce the graded report
#[test]
fn test_student_results_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("report.txt");

    fs::write(
        &input,
        "\
=== STUDENT GRADE REPORT ===
Generated on: 2025-08-05 12:00:00
Total Students: 3

STUDENT RESULTS:
================
1,Kofi Mensah,85
2,Ama Serwaa,79
3,Yaw Boateng,42
",
    )
    .unwrap();

    let schema = RecordSchema::student_results();
    let reader = ReportReader::new(schema.clone(), LoadOptions::strict());
    let outcome = reader.load(&input).unwrap();
    assert_eq!(outcome.stats.records_loaded, 3);

    let results: Vec<StudentResult> = outcome
        .records
        .iter()
        .map(|record| StudentResult::from_record(record).unwrap())
        .collect();
    assert_eq!(results[0].grade(), Grade::A);
    assert_eq!(results[1].grade(), Grade::B);
    assert_eq!(results[2].grade(), Grade::F);

    ReportWriter::new(schema.clone())
        .save(&output, &outcome.records)
        .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Kofi Mensah (ID: 1): Score = 85, Grade = A"));
    assert!(report.contains("Grade A: 1 students"));
    assert!(report.contains("Grade B: 1 students"));
    assert!(report.contains("Grade F: 1 students"));
    assert!(report.contains("Average Score: 68.67"));
    assert!(report.contains("Highest Score: 85"));
    assert!(report.contains("Lowest Score: 42"));

    let aggregate = aggregator::summarize(&outcome.records, &schema);
    assert_eq!(aggregate.count, 3);
    assert_eq!(aggregate.numeric.unwrap().max, 85.0);
}

/// A strict load of a malformed file commits nothing
#[test]
fn test_student_results_strict_load_commits_nothing_on_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("students.txt");

    fs::write(
        &input,
        "\
=== STUDENT GRADE REPORT ===
Generated on: 2025-08-05 12:00:00
Total Students: 2

STUDENT RESULTS:
================
1,Kofi Mensah,85
2,Ama,150
",
    )
    .unwrap();

    let schema = RecordSchema::student_results();
    let mut store = RecordStore::new();
    let reader = ReportReader::new(schema.clone(), LoadOptions::strict());
    let err = reader.load_into(&mut store, &input).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Score"));
    assert!(message.contains("150"));
    assert!(store.is_empty());

    // the same file under skip-and-collect recovers the good line
    let lenient = ReportReader::new(
        schema,
        LoadOptions::strict().with_policy(LoadPolicy::SkipAndCollect),
    );
    let stats = lenient.load_into(&mut store, &input).unwrap();
    assert_eq!(stats.records_loaded, 1);
    assert_eq!(stats.lines_skipped, 1);
    assert_eq!(store.count(), 1);
}
