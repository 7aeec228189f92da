use super::{ExportError, ScheduleReport};
use std::io::Write;
use std::path::Path;

/// Export a schedule report to JSON format
pub fn export_schedule_report<P: AsRef<Path>>(
    report: &ScheduleReport,
    output_path: P,
) -> Result<(), ExportError> {
    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

/// Export any serializable data structure to JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}
