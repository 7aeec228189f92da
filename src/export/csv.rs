use super::{ExportError, ScheduleReport};
use std::io::Write;
use std::path::Path;

/// Export a schedule's activity rows to CSV format
pub fn export_schedule_report<P: AsRef<Path>>(
    report: &ScheduleReport,
    output_path: P,
) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(output_path)?;

    writeln!(
        file,
        "Time,Title,Type,Duration,Calories,Difficulty,Details"
    )?;

    for activity in &report.activities {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            activity.time,
            quote(&activity.title),
            activity.activity_type.label(),
            quote(&activity.duration),
            activity
                .calories
                .map_or("".to_string(), |v| v.to_string()),
            activity
                .difficulty
                .as_ref()
                .map_or("".to_string(), |d| quote(d)),
            activity
                .details
                .as_ref()
                .map_or("".to_string(), |d| quote(d))
        )?;
    }

    Ok(())
}

/// Quote a CSV field, doubling any embedded quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
