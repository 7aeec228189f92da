use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::adapter::AiAgentResult;
use crate::error::ImportError;
use crate::models::Plan;

pub mod csv;
pub mod json;

/// Trait for importing plan documents from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Import a plan from the file
    fn import_file(&self, file_path: &Path) -> Result<Plan>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Manager for coordinating different import formats
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(json::JsonPlanImporter::new()),
            Box::new(csv::CsvPlanImporter::new()),
        ];

        Self { importers }
    }

    /// Import a single plan file, auto-detecting the format
    pub fn import_file(&self, file_path: &Path) -> Result<Plan> {
        for importer in &self.importers {
            if importer.can_import(file_path) {
                tracing::info!(
                    path = %file_path.display(),
                    format = importer.get_format_name(),
                    "importing plan"
                );
                return importer.import_file(file_path);
            }
        }

        Err(ImportError::UnsupportedFormat {
            path: file_path.to_path_buf(),
        }
        .into())
    }

    /// Import all plan files from a directory
    pub fn import_directory(&self, dir_path: &Path) -> Result<Vec<Plan>> {
        let mut plans = Vec::new();

        let files = self.collect_importable_files(dir_path)?;

        if files.is_empty() {
            println!("No importable plan files found in {}", dir_path.display());
            return Ok(plans);
        }

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        for file_path in files {
            pb.set_message(format!(
                "Reading {}",
                file_path.file_name().unwrap_or_default().to_string_lossy()
            ));

            match self.import_file(&file_path) {
                Ok(plan) => {
                    pb.println(format!(
                        "✓ Imported plan \"{}\" from {}",
                        plan.title,
                        file_path.file_name().unwrap_or_default().to_string_lossy()
                    ));
                    plans.push(plan);
                }
                Err(e) => {
                    pb.println(format!(
                        "✗ Failed to import {}: {}",
                        file_path.file_name().unwrap_or_default().to_string_lossy(),
                        e
                    ));
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("Import complete");
        Ok(plans)
    }

    /// Collect all files that can be imported from a directory
    fn collect_importable_files(&self, dir_path: &Path) -> Result<Vec<std::path::PathBuf>> {
        let mut files = Vec::new();

        if !dir_path.is_dir() {
            anyhow::bail!("Path is not a directory: {}", dir_path.display());
        }

        for entry in std::fs::read_dir(dir_path)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.can_import_file(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check if this manager can import a given file
    pub fn can_import_file(&self, file_path: &Path) -> bool {
        self.importers
            .iter()
            .any(|importer| importer.can_import(file_path))
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Load an AI pipeline result from a JSON file.
///
/// The document is decoded into the tolerant boundary structs; unknown
/// fields are ignored and missing fields default, so any response shape the
/// pipeline has produced so far will load.
pub fn load_ai_result(file_path: &Path) -> Result<AiAgentResult> {
    let content = std::fs::read_to_string(file_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ImportError::FileNotFound {
            path: file_path.to_path_buf(),
        },
        _ => ImportError::ParseError {
            format: "JSON".to_string(),
            reason: e.to_string(),
        },
    })?;

    let result: AiAgentResult =
        serde_json::from_str(&content).map_err(|e| ImportError::ParseError {
            format: "JSON".to_string(),
            reason: e.to_string(),
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_manager_recognizes_json_and_csv() {
        let manager = ImportManager::new();
        assert!(manager.can_import_file(Path::new("plan.json")));
        assert!(manager.can_import_file(Path::new("plan.csv")));
        assert!(!manager.can_import_file(Path::new("plan.xml")));
    }

    #[test]
    fn test_load_ai_result_tolerates_partial_document() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"success": true, "step": "schedule_ready"}}"#).unwrap();

        let result = load_ai_result(file.path()).unwrap();
        assert_eq!(result.success, Some(true));
        assert!(result.step2.is_none());
    }

    #[test]
    fn test_load_ai_result_rejects_invalid_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "not json").unwrap();

        assert!(load_ai_result(file.path()).is_err());
    }
}
