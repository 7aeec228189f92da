use super::{ExportError, ScheduleReport};
use std::io::Write;
use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Activity;

/// One row of the rendered schedule table
#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    activity_type: &'static str,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&Activity> for ActivityRow {
    fn from(activity: &Activity) -> Self {
        ActivityRow {
            time: activity.time.to_string(),
            title: activity.title.clone(),
            activity_type: activity.activity_type.label(),
            duration: activity.duration.clone(),
            calories: activity
                .calories
                .filter(|&c| c > 0)
                .map_or(String::new(), |c| c.to_string()),
        }
    }
}

/// Render a schedule as a terminal table
pub fn render_schedule_table(activities: &[Activity]) -> String {
    let rows: Vec<ActivityRow> = activities.iter().map(ActivityRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Export a schedule report to human-readable text format
pub fn export_schedule_report<P: AsRef<Path>>(
    report: &ScheduleReport,
    output_path: P,
) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(output_path)?;

    writeln!(file, "DAILY SCHEDULE")?;
    writeln!(file, "=")?;
    writeln!(file)?;

    if let Some(plan_title) = &report.plan_title {
        writeln!(file, "Following: {}", plan_title)?;
    } else {
        writeln!(file, "Your daily routine")?;
    }
    writeln!(file, "Source: {}", report.source)?;
    writeln!(
        file,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file)?;

    writeln!(file, "{}", render_schedule_table(&report.activities))?;
    writeln!(file)?;

    writeln!(file, "SUMMARY")?;
    writeln!(file, "-")?;
    writeln!(file, "Activities: {}", report.summary.total_activities)?;
    for (label, count) in &report.summary.counts_by_type {
        writeln!(file, "  {}: {}", label, count)?;
    }
    writeln!(file, "Total Calories: {}", report.summary.total_calories)?;
    writeln!(
        file,
        "Macros: {}P / {}C / {}F",
        report.summary.total_macros.protein,
        report.summary.total_macros.carbs,
        report.summary.total_macros.fats
    )?;

    // Detail sections, one per activity that has anything to expand
    for activity in &report.activities {
        if activity.instructions.is_empty() && activity.sub_activities.is_empty() {
            continue;
        }

        writeln!(file)?;
        writeln!(file, "{} {} ({})", activity.time, activity.title, activity.duration)?;

        for instruction in &activity.instructions {
            writeln!(file, "  • {}", instruction)?;
        }
        for sub in &activity.sub_activities {
            writeln!(file, "  {} {} ({})", sub.time, sub.activity, sub.duration)?;
        }
        if !activity.equipment.is_empty() {
            writeln!(file, "  Equipment: {}", activity.equipment.join(", "))?;
        }
    }

    Ok(())
}
