//! Tests for report rendering and atomic saving

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::app::models::{InventoryItem, Record, StudentResult};
use crate::app::services::report_file::{ReportReader, ReportWriter};
use crate::config::LoadOptions;
use crate::RecordSchema;

fn inventory_records() -> Vec<Record> {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    };
    vec![
        InventoryItem::new(1, "Laptop Computer", 25, date(2025, 7, 15)).to_record(),
        InventoryItem::new(2, "Office Chair", 50, date(2025, 7, 20)).to_record(),
        InventoryItem::new(3, "Wireless Mouse", 100, date(2025, 7, 25)).to_record(),
    ]
}

fn student_records() -> Vec<Record> {
    vec![
        StudentResult::new(1, "Kofi Mensah", 85).to_record(),
        StudentResult::new(2, "Ama Serwaa", 91).to_record(),
        StudentResult::new(3, "Yaw Boateng", 73).to_record(),
    ]
}

#[test]
fn test_inventory_report_layout() {
    let writer = ReportWriter::new(RecordSchema::inventory());
    let report = writer.render(&inventory_records());
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "=== INVENTORY DATA ===");
    assert!(lines[1].starts_with("Saved on: "));
    assert_eq!(lines[2], "Total Items: 3");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "INVENTORY ITEMS:");
    assert_eq!(lines[5], "================");
    assert_eq!(lines[6], "1|Laptop Computer|25|2025-07-15 00:00:00");
    assert_eq!(lines[7], "2|Office Chair|50|2025-07-20 00:00:00");
    assert_eq!(lines[8], "3|Wireless Mouse|100|2025-07-25 00:00:00");
    // no aggregate sections for the inventory schema
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_inventory_report_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.txt");

    let records = inventory_records();
    let writer = ReportWriter::new(RecordSchema::inventory());
    writer.save(&path, &records).unwrap();

    let reader = ReportReader::new(RecordSchema::inventory(), LoadOptions::lenient());
    let outcome = reader.load(&path).unwrap();

    assert!(outcome.stats.is_clean());
    assert_eq!(outcome.records, records);
}

#[test]
fn test_student_report_body_and_summary_sections() {
    let writer = ReportWriter::new(RecordSchema::student_results());
    let report = writer.render(&student_records());
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "=== STUDENT GRADE REPORT ===");
    assert!(lines[1].starts_with("Generated on: "));
    assert_eq!(lines[2], "Total Students: 3");
    assert_eq!(lines[4], "STUDENT RESULTS:");
    assert_eq!(lines[5], "================");
    assert_eq!(lines[6], "Kofi Mensah (ID: 1): Score = 85, Grade = A");
    assert_eq!(lines[7], "Ama Serwaa (ID: 2): Score = 91, Grade = A");
    assert_eq!(lines[8], "Yaw Boateng (ID: 3): Score = 73, Grade = B");

    assert_eq!(lines[9], "");
    assert_eq!(lines[10], "GRADE DISTRIBUTION:");
    assert_eq!(lines[11], "===================");
    assert_eq!(lines[12], "Grade A: 2 students");
    assert_eq!(lines[13], "Grade B: 1 students");
    // zero-count buckets stay in the written table
    assert_eq!(lines[14], "Grade C: 0 students");
    assert_eq!(lines[15], "Grade D: 0 students");
    assert_eq!(lines[16], "Grade F: 0 students");

    assert_eq!(lines[17], "");
    assert_eq!(lines[18], "STATISTICS:");
    assert_eq!(lines[19], "===========");
    assert_eq!(lines[20], "Average Score: 83.00");
    assert_eq!(lines[21], "Highest Score: 91");
    assert_eq!(lines[22], "Lowest Score: 73");
}

#[test]
fn test_empty_snapshot_renders_headers_without_statistics_lines() {
    let writer = ReportWriter::new(RecordSchema::student_results());
    let report = writer.render(&[]);

    assert!(report.contains("Total Students: 0"));
    assert!(report.contains("GRADE DISTRIBUTION:"));
    assert!(report.contains("Grade A: 0 students"));
    assert!(report.contains("STATISTICS:"));
    // no numbers to summarize, so no average line
    assert!(!report.contains("Average Score"));
}

#[test]
fn test_save_replaces_an_existing_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.txt");
    let writer = ReportWriter::new(RecordSchema::inventory());

    writer.save(&path, &inventory_records()).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 8, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let second = vec![InventoryItem::new(9, "USB Cable", 200, date).to_record()];
    writer.save(&path, &second).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Total Items: 1"));
    assert!(content.contains("9|USB Cable|200|2025-08-05 00:00:00"));
    assert!(!content.contains("Laptop Computer"));
}

#[test]
fn test_save_does_not_leave_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory_data.txt");

    let writer = ReportWriter::new(RecordSchema::inventory());
    writer.save(&path, &inventory_records()).unwrap();

    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["inventory_data.txt".to_string()]);
}
