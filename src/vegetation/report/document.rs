//! The persisted analysis document.
//!
//! Keys: `timestamp, before_image, after_image, before_metrics, after_metrics,
//! impact_analysis, status` on success; `timestamp, status, error` on failure.
//! Session fields are added when the report belongs to a stored session.

use std::fmt::Display;

use chrono::Local;
use serde::{Deserialize, Serialize};
use crate::vegetation::analysis::Comparison;
use crate::vegetation::impact::ImpactResult;
use crate::vegetation::indices::MetricSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_metrics: Option<MetricSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_metrics: Option<MetricSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_analysis: Option<ImpactResult>,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_filename: Option<String>,
}

/// Local time, microsecond precision, no offset: `2024-05-01T13:45:10.123456`.
fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

impl AnalysisReport {
    pub fn success(
        before_image: impl Into<String>,
        after_image: impl Into<String>,
        comparison: Comparison,
    ) -> Self {
        Self {
            timestamp: timestamp_now(),
            before_image: Some(before_image.into()),
            after_image: Some(after_image.into()),
            before_metrics: Some(comparison.before_metrics),
            after_metrics: Some(comparison.after_metrics),
            impact_analysis: Some(comparison.impact),
            status: ReportStatus::Success,
            error: None,
            session_id: None,
            before_filename: None,
            after_filename: None,
        }
    }

    pub fn failure(error: impl Display) -> Self {
        Self {
            timestamp: timestamp_now(),
            before_image: None,
            after_image: None,
            before_metrics: None,
            after_metrics: None,
            impact_analysis: None,
            status: ReportStatus::Error,
            error: Some(error.to_string()),
            session_id: None,
            before_filename: None,
            after_filename: None,
        }
    }

    pub fn with_session(
        mut self,
        session_id: impl Into<String>,
        before_filename: Option<String>,
        after_filename: Option<String>,
    ) -> Self {
        self.session_id = Some(session_id.into());
        self.before_filename = before_filename;
        self.after_filename = after_filename;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vegetation::indices::{IndexStats, SpectralIndex};

    fn comparison() -> Comparison {
        let stats = |mean: f64| IndexStats {
            mean,
            std: 0.01,
            max: mean + 0.1,
            min: mean - 0.1,
        };
        let before = MetricSet::from_stats([stats(0.2); SpectralIndex::COUNT]);
        let after = MetricSet::from_stats([stats(0.3); SpectralIndex::COUNT]);
        Comparison::from_metrics(before, after)
    }

    #[test]
    fn test_success_document_keys() {
        let report = AnalysisReport::success("before.jpg", "after.jpg", comparison());

        let json = serde_json::to_value(&report).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "after_image",
                "after_metrics",
                "before_image",
                "before_metrics",
                "impact_analysis",
                "status",
                "timestamp"
            ]
        );
        assert_eq!(json["status"], "success");
        assert_eq!(json["before_metrics"].as_object().unwrap().len(), 24);
        let impact = json["impact_analysis"].as_object().unwrap();
        assert_eq!(impact.len(), 8);
        assert!(impact.contains_key("fvc_change_percent"));
        assert!(!impact.contains_key("raw_confidence"));
    }

    #[test]
    fn test_failure_document_keys() {
        let report = AnalysisReport::failure("Image not found: x.png");

        let json = serde_json::to_value(&report).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Image not found: x.png");
        assert!(!report.is_success());
    }

    #[test]
    fn test_session_fields_and_reload() {
        let report = AnalysisReport::success("a.png", "b.png", comparison()).with_session(
            "0b8f7c4e-3f5a-4d0e-9d55-0b1d2c3e4f50",
            Some("0b8f7c4e-3f5a-4d0e-9d55-0b1d2c3e4f50_before_a.png".to_string()),
            None,
        );

        let text = report.to_json_pretty().unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.session_id, report.session_id);
        assert_eq!(parsed.before_filename, report.before_filename);
        assert_eq!(parsed.after_filename, None);
        assert_eq!(parsed.before_metrics, report.before_metrics);
        assert!(text.contains("\n  \"timestamp\""));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = timestamp_now();
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert_eq!(stamp.len(), "2024-05-01T13:45:10.123456".len());
    }
}
