//! Application constants for the recfile processor
//!
//! This module contains the fixed report layouts, datetime formats,
//! and grading bands used throughout the application.

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Canonical layout for date-only fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical layout for timestamped fields (always written with seconds)
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted short layout for timestamped fields (read only)
pub const DATETIME_FORMAT_MINUTES: &str = "%Y-%m-%d %H:%M";

// =============================================================================
// Report Layout
// =============================================================================

/// Label of the statistics section in written reports
pub const STATISTICS_SECTION_LABEL: &str = "STATISTICS:";

/// Inventory report labels
pub mod inventory {
    pub const TITLE: &str = "INVENTORY DATA";
    pub const TIMESTAMP_LABEL: &str = "Saved on";
    pub const COUNT_LABEL: &str = "Total Items";
    pub const SECTION_LABEL: &str = "INVENTORY ITEMS:";
    pub const DELIMITER: char = '|';
}

/// Student result report labels
pub mod student {
    pub const TITLE: &str = "STUDENT GRADE REPORT";
    pub const TIMESTAMP_LABEL: &str = "Generated on";
    pub const COUNT_LABEL: &str = "Total Students";
    pub const SECTION_LABEL: &str = "STUDENT RESULTS:";
    pub const DISTRIBUTION_SECTION_LABEL: &str = "GRADE DISTRIBUTION:";
    pub const DELIMITER: char = ',';
}

/// Build the `=` separator line that follows a section label
pub fn section_separator(label: &str) -> String {
    "=".repeat(label.len())
}

// =============================================================================
// Grading Bands
// =============================================================================

/// Letter grade score bands, inclusive on the lower edge
pub mod grade_bands {
    /// Minimum score for an A (80-100)
    pub const A_MIN: i64 = 80;

    /// Minimum score for a B (70-79)
    pub const B_MIN: i64 = 70;

    /// Minimum score for a C (60-69)
    pub const C_MIN: i64 = 60;

    /// Minimum score for a D (50-59)
    pub const D_MIN: i64 = 50;
}

/// Legal score range for student results
pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_separator_matches_label_width() {
        assert_eq!(section_separator(inventory::SECTION_LABEL).len(), 16);
        assert_eq!(section_separator(student::SECTION_LABEL).len(), 16);
        assert_eq!(section_separator(STATISTICS_SECTION_LABEL), "===========");
    }

    #[test]
    fn test_grade_bands_are_ordered() {
        assert!(grade_bands::A_MIN > grade_bands::B_MIN);
        assert!(grade_bands::B_MIN > grade_bands::C_MIN);
        assert!(grade_bands::C_MIN > grade_bands::D_MIN);
        assert!(grade_bands::D_MIN > SCORE_MIN);
        assert!(SCORE_MAX > grade_bands::A_MIN);
    }
}
