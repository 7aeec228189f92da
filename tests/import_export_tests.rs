use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use planrs::export::{export_schedule_report, ExportFormat, ScheduleReport};
use planrs::import::{load_ai_result, ImportManager};
use planrs::selector::compute_schedule_to_render;
use planrs::validation::PlanValidator;

/// End-to-end tests over the file boundary: load plan and AI result files,
/// compute a schedule, and write it back out in each export format.

const PLAN_JSON: &str = r#"{
    "id": "plan-morning",
    "title": "Morning Routine Plus",
    "description": "A gentler start to the day",
    "activities": [
        {"id": "custom-breakfast", "title": "Custom Breakfast", "time": "07:00",
         "duration": "25 min", "type": "meal", "calories": 420},
        {"id": "cold-shower", "title": "Cold Shower", "time": "06:45",
         "duration": "5 min", "type": "unknown-type"}
    ],
    "metadata": {"difficulty": "Beginner", "focusAreas": ["energy"]}
}"#;

const AI_RESULT_JSON: &str = r#"{
    "success": true,
    "step": "schedule_ready",
    "selectedPlan": {"id": "plan-morning", "difficulty": "Beginner"},
    "step2": {"schedule": {"dailySchedule": [
        {"time": "06:00", "category": "wakeup_routine", "activity": "Wakeup Routine",
         "duration": "30 min", "calories": 0},
        {"time": "07:00", "category": "breakfast", "activity": "Breakfast",
         "calories": 365,
         "meal": {"name": "Oats Bowl", "totalCalories": 365,
                  "totalMacros": {"protein": 11, "carbs": 64, "fats": 9}}}
    ]}}
}"#;

#[test]
fn test_plan_json_round_trip_through_scheduler() {
    let mut plan_file = NamedTempFile::with_suffix(".json").unwrap();
    write!(plan_file, "{}", PLAN_JSON).unwrap();

    let manager = ImportManager::new();
    let plan = manager.import_file(plan_file.path()).unwrap();
    assert_eq!(plan.title, "Morning Routine Plus");

    // Unknown plan type coerces to exercise in the rendered schedule
    let schedule = compute_schedule_to_render(Some(&plan), None);
    let shower = schedule.iter().find(|a| a.id == "cold-shower").unwrap();
    assert_eq!(shower.activity_type, planrs::ActivityType::Exercise);
}

#[test]
fn test_ai_result_file_drives_selection() {
    let mut plan_file = NamedTempFile::with_suffix(".json").unwrap();
    write!(plan_file, "{}", PLAN_JSON).unwrap();
    let mut ai_file = NamedTempFile::with_suffix(".json").unwrap();
    write!(ai_file, "{}", AI_RESULT_JSON).unwrap();

    let manager = ImportManager::new();
    let plan = manager.import_file(plan_file.path()).unwrap();
    let ai_result = load_ai_result(ai_file.path()).unwrap();

    let schedule = compute_schedule_to_render(Some(&plan), Some(&ai_result));

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].title, "Wakeup Routine");
    let breakfast = &schedule[1];
    assert_eq!(breakfast.meal.as_ref().unwrap().total_calories, 365);
}

#[test]
fn test_export_all_formats() {
    let mut ai_file = NamedTempFile::with_suffix(".json").unwrap();
    write!(ai_file, "{}", AI_RESULT_JSON).unwrap();
    let ai_result = load_ai_result(ai_file.path()).unwrap();

    let schedule = compute_schedule_to_render(None, Some(&ai_result));
    let report = ScheduleReport::new(Some("Morning Routine Plus".to_string()), "ai", schedule);

    let dir = tempdir().unwrap();

    let json_path = dir.path().join("schedule.json");
    export_schedule_report(&report, &ExportFormat::Json, &json_path).unwrap();
    let json_content = std::fs::read_to_string(&json_path).unwrap();
    let parsed: ScheduleReport = serde_json::from_str(&json_content).unwrap();
    assert_eq!(parsed.activities.len(), 2);
    assert_eq!(parsed.source, "ai");

    let csv_path = dir.path().join("schedule.csv");
    export_schedule_report(&report, &ExportFormat::Csv, &csv_path).unwrap();
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_content.lines().count(), 3);
    assert!(csv_content.contains("07:00,\"Breakfast\",meal"));

    let text_path = dir.path().join("schedule.txt");
    export_schedule_report(&report, &ExportFormat::Text, &text_path).unwrap();
    let text_content = std::fs::read_to_string(&text_path).unwrap();
    assert!(text_content.contains("Following: Morning Routine Plus"));
    assert!(text_content.contains("Total Calories: 365"));
}

#[test]
fn test_import_directory_collects_valid_plans() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.json"), PLAN_JSON).unwrap();
    std::fs::write(
        dir.path().join("b.csv"),
        "id,title,time,duration,type,details,difficulty,calories\n\
         run,Morning Run,06:30,30 min,exercise,Easy pace,Beginner,280\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("ignored.txt"), "not a plan").unwrap();

    let manager = ImportManager::new();
    let plans = manager.import_directory(dir.path()).unwrap();

    assert_eq!(plans.len(), 2);
    let titles: Vec<_> = plans.iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"Morning Routine Plus"));
    assert!(titles.contains(&"b"));
}

#[test]
fn test_validation_flags_duplicate_times_in_file() {
    let mut plan_file = NamedTempFile::with_suffix(".json").unwrap();
    write!(
        plan_file,
        r#"{{
            "id": "dup", "title": "Duplicates",
            "activities": [
                {{"id": "a", "title": "First", "time": "07:00", "type": "meal"}},
                {{"id": "b", "title": "Second", "time": "07:00", "type": "meal"}}
            ]
        }}"#
    )
    .unwrap();

    let plan = ImportManager::new().import_file(plan_file.path()).unwrap();
    let report = PlanValidator::validate_plan(&plan);

    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
}
