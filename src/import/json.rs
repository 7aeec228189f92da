use std::path::Path;

use anyhow::Result;

use crate::error::ImportError;
use crate::import::ImportFormat;
use crate::models::Plan;

/// Importer for plan documents in JSON form
pub struct JsonPlanImporter;

impl JsonPlanImporter {
    pub fn new() -> Self {
        JsonPlanImporter
    }
}

impl ImportFormat for JsonPlanImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        file_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    fn import_file(&self, file_path: &Path) -> Result<Plan> {
        let content = std::fs::read_to_string(file_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound {
                path: file_path.to_path_buf(),
            },
            _ => ImportError::ParseError {
                format: "JSON".to_string(),
                reason: e.to_string(),
            },
        })?;

        let plan: Plan = serde_json::from_str(&content).map_err(|e| ImportError::ParseError {
            format: "JSON".to_string(),
            reason: e.to_string(),
        })?;

        if plan.id.is_empty() {
            return Err(ImportError::MissingData {
                field: "id".to_string(),
            }
            .into());
        }

        Ok(plan)
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}

impl Default for JsonPlanImporter {
    fn default() -> Self {
        Self::new()
    }
}
