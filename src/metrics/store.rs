//! JSON-backed metrics store.
//!
//! The file is a single object mapping `YYYY-MM-DD` keys to per-day
//! entries. All entry fields are optional so partially-filled days load
//! fine. A missing file is an empty store, not an error — the dashboard
//! renders an undecorated grid until data shows up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::calendar::CalendarDate;

use super::detail::{DayDetail, MetricsSource};

#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid metrics file {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

// ---------------------------------------------------------------------------
// Raw deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Default)]
struct RawDayEntry {
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    planned: u32,
    #[serde(default)]
    actual: u32,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct DayEntry {
    score: Option<u8>,
    detail: Option<DayDetail>,
}

impl RawDayEntry {
    fn into_entry(self) -> DayEntry {
        // Scores come from outside; clamp rather than reject.
        let score = self.score.map(|s| s.clamp(0, 100) as u8);

        let has_detail = self.summary.is_some()
            || self.planned > 0
            || self.actual > 0
            || !self.suggestions.is_empty();
        let detail = has_detail.then(|| DayDetail {
            planned_count: self.planned,
            actual_count: self.actual,
            summary: self.summary,
            suggestions: self.suggestions,
        });

        DayEntry { score, detail }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MetricsStore {
    days: HashMap<CalendarDate, DayEntry>,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a metrics file. A nonexistent file yields an
    /// empty store; an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, MetricsError> {
        if !path.exists() {
            debug!(path = %path.display(), "metrics file not found, starting empty");
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path).map_err(|e| MetricsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content).map_err(|message| MetricsError::Invalid {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse metrics JSON. Entries with unparseable date keys are skipped
    /// with a warning; only a structurally invalid document is an error.
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        let raw: HashMap<String, RawDayEntry> =
            serde_json::from_str(content).map_err(|e| e.to_string())?;

        let mut days = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            match key.parse::<CalendarDate>() {
                Ok(date) => {
                    days.insert(date, entry.into_entry());
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping metrics entry with bad date key");
                }
            }
        }
        Ok(Self { days })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl MetricsSource for MetricsStore {
    fn score_for(&self, date: CalendarDate) -> Option<u8> {
        self.days.get(&date).and_then(|entry| entry.score)
    }

    fn detail_for(&self, date: CalendarDate) -> Option<DayDetail> {
        self.days.get(&date).and_then(|entry| entry.detail.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_full_entry() {
        let json = r#"{
            "2024-03-15": {
                "score": 75,
                "planned": 8,
                "actual": 6,
                "summary": "Mostly on plan, afternoon drifted.",
                "suggestions": ["Block out focus time", "Review schedule at 9am"]
            }
        }"#;
        let store = MetricsStore::from_json_str(json).unwrap();
        assert_eq!(store.score_for(date(2024, 3, 15)), Some(75));
        let detail = store.detail_for(date(2024, 3, 15)).unwrap();
        assert_eq!(detail.planned_count, 8);
        assert_eq!(detail.actual_count, 6);
        assert_eq!(detail.difference(), -2);
        assert_eq!(detail.suggestions.len(), 2);
    }

    #[test]
    fn test_score_only_entry_has_no_detail() {
        let json = r#"{ "2024-03-15": { "score": 40 } }"#;
        let store = MetricsStore::from_json_str(json).unwrap();
        assert_eq!(store.score_for(date(2024, 3, 15)), Some(40));
        assert!(store.detail_for(date(2024, 3, 15)).is_none());
    }

    #[test]
    fn test_out_of_range_score_clamped() {
        let json = r#"{
            "2024-03-15": { "score": 150 },
            "2024-03-16": { "score": -20 }
        }"#;
        let store = MetricsStore::from_json_str(json).unwrap();
        assert_eq!(store.score_for(date(2024, 3, 15)), Some(100));
        assert_eq!(store.score_for(date(2024, 3, 16)), Some(0));
    }

    #[test]
    fn test_bad_date_keys_skipped() {
        let json = r#"{
            "not-a-date": { "score": 50 },
            "2024-02-30": { "score": 50 },
            "2024-03-15": { "score": 50 }
        }"#;
        let store = MetricsStore::from_json_str(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.score_for(date(2024, 3, 15)), Some(50));
    }

    #[test]
    fn test_unknown_day_is_none() {
        let store = MetricsStore::from_json_str("{}").unwrap();
        assert!(store.is_empty());
        assert!(store.score_for(date(2024, 3, 15)).is_none());
        assert!(store.detail_for(date(2024, 3, 15)).is_none());
    }

    #[test]
    fn test_malformed_document_is_error() {
        assert!(MetricsStore::from_json_str("[1, 2, 3]").is_err());
        assert!(MetricsStore::from_json_str("not json").is_err());
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let store = MetricsStore::load(Path::new("/nonexistent/metrics.json")).unwrap();
        assert!(store.is_empty());
    }
}
