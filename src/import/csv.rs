use std::path::Path;

use anyhow::Result;
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::ImportError;
use crate::import::ImportFormat;
use crate::models::{Plan, PlanActivity, PlanMetadata};

/// One row of a plan activities CSV file
#[derive(Debug, Deserialize)]
struct CsvActivityRow {
    id: Option<String>,
    title: String,
    time: Option<String>,
    duration: Option<String>,
    #[serde(rename = "type")]
    activity_type: Option<String>,
    details: Option<String>,
    difficulty: Option<String>,
    calories: Option<u32>,
}

/// Importer for plan activity lists in CSV form.
///
/// CSV plans carry only the flat activity fields; the plan id and title are
/// derived from the file name, and instructions/equipment stay empty.
pub struct CsvPlanImporter;

impl CsvPlanImporter {
    pub fn new() -> Self {
        CsvPlanImporter
    }
}

impl ImportFormat for CsvPlanImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        file_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }

    fn import_file(&self, file_path: &Path) -> Result<Plan> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(file_path)
            .map_err(|e| ImportError::ParseError {
                format: "CSV".to_string(),
                reason: e.to_string(),
            })?;

        let mut activities = Vec::new();
        for (line, record) in reader.deserialize::<CsvActivityRow>().enumerate() {
            let row = record.map_err(|e| ImportError::ParseError {
                format: "CSV".to_string(),
                reason: format!("row {}: {}", line + 1, e),
            })?;

            activities.push(PlanActivity {
                id: row.id,
                title: row.title,
                time: row.time,
                duration: row.duration,
                activity_type: row.activity_type,
                details: row.details,
                difficulty: row.difficulty,
                calories: row.calories,
                ..PlanActivity::default()
            });
        }

        let stem = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "plan".to_string());

        Ok(Plan {
            id: stem.clone(),
            title: stem,
            description: None,
            activities,
            metadata: PlanMetadata::default(),
        })
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}

impl Default for CsvPlanImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_plan_csv() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "id,title,time,duration,type,details,difficulty,calories").unwrap();
        writeln!(file, "run,Morning Run,06:30,30 min,exercise,Easy pace,Beginner,280").unwrap();
        writeln!(file, ",Stretching,07:00,10 min,,,,").unwrap();

        let importer = CsvPlanImporter::new();
        assert!(importer.can_import(file.path()));

        let plan = importer.import_file(file.path()).unwrap();
        assert_eq!(plan.activities.len(), 2);

        let first = &plan.activities[0];
        assert_eq!(first.id.as_deref(), Some("run"));
        assert_eq!(first.calories, Some(280));

        let second = &plan.activities[1];
        assert!(second.id.is_none());
        assert!(second.activity_type.is_none());
    }

    #[test]
    fn test_plan_title_comes_from_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strength-plan.csv");
        std::fs::write(
            &path,
            "id,title,time,duration,type,details,difficulty,calories\n",
        )
        .unwrap();

        let plan = CsvPlanImporter::new().import_file(&path).unwrap();
        assert_eq!(plan.title, "strength-plan");
        assert!(plan.activities.is_empty());
    }
}
