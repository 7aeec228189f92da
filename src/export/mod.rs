use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::Activity;
use crate::summary::ScheduleSummary;

pub mod csv;
pub mod json;
pub mod text;

/// Export format types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A computed schedule packaged for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    /// Plan the schedule was computed from, when one was selected
    pub plan_title: Option<String>,

    /// Which source produced the schedule (ai, plan, baseline)
    pub source: String,

    /// Report creation timestamp
    pub generated_at: DateTime<Utc>,

    /// The ordered activity list
    pub activities: Vec<Activity>,

    /// Aggregated totals over the activity list
    pub summary: ScheduleSummary,
}

impl ScheduleReport {
    /// Build a report around a computed schedule
    pub fn new(plan_title: Option<String>, source: &str, activities: Vec<Activity>) -> Self {
        let summary = ScheduleSummary::from_activities(&activities);
        ScheduleReport {
            plan_title,
            source: source.to_string(),
            generated_at: Utc::now(),
            activities,
            summary,
        }
    }
}

/// Export a schedule report in the requested format
pub fn export_schedule_report<P: AsRef<Path>>(
    report: &ScheduleReport,
    format: &ExportFormat,
    output_path: P,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => json::export_schedule_report(report, output_path),
        ExportFormat::Csv => csv::export_schedule_report(report, output_path),
        ExportFormat::Text => text::export_schedule_report(report, output_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::baseline_schedule;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_str("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("txt").unwrap(), ExportFormat::Text);
        assert!(matches!(
            ExportFormat::from_str("pdf"),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_report_builds_summary() {
        let report = ScheduleReport::new(None, "baseline", baseline_schedule());
        assert_eq!(report.summary.total_activities, 15);
        assert_eq!(report.source, "baseline");
    }
}
