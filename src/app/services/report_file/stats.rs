//! Load statistics and result structures
//!
//! Tracks how a load went: how many data lines were seen, how many
//! became records, and the errors collected for lines that were skipped
//! under the skip-and-collect policy.

use crate::app::models::Record;
use serde::{Deserialize, Serialize};

/// Load result with parsed records and statistics
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Successfully parsed records in file order
    pub records: Vec<Record>,

    /// Statistics for the load
    pub stats: LoadStats,
}

/// Statistics for one load operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Non-blank data lines encountered
    pub data_lines: usize,

    /// Lines that parsed and validated into records
    pub records_loaded: usize,

    /// Malformed lines skipped under the skip-and-collect policy
    pub lines_skipped: usize,

    /// One message per skipped line, with line number and content
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data lines that loaded, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_lines == 0 {
            100.0
        } else {
            (self.records_loaded as f64 / self.data_lines as f64) * 100.0
        }
    }

    /// True when no line was skipped
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.lines_skipped == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_are_clean() {
        let stats = LoadStats::new();
        assert!(stats.is_clean());
        assert_eq!(stats.success_rate(), 100.0);
    }

    #[test]
    fn test_success_rate() {
        let stats = LoadStats {
            data_lines: 5,
            records_loaded: 4,
            lines_skipped: 1,
            errors: vec!["Line 3: bad".to_string()],
        };
        assert_eq!(stats.success_rate(), 80.0);
        assert!(!stats.is_clean());
    }
}
