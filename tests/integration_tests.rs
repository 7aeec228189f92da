use planrs::adapter::AiAgentResult;
use planrs::models::{Plan, PlanActivity, PlanMetadata};
use planrs::selector::compute_schedule_to_render;
use planrs::summary::ScheduleSummary;
use planrs::timeslot::TimeSlot;
use planrs::{baseline_schedule, merge_schedules, normalize_plan_activities};

/// Integration tests that exercise the complete scheduling workflows

fn create_test_plan() -> Plan {
    Plan {
        id: "plan-strength".to_string(),
        title: "Strength Builder".to_string(),
        description: Some("Progressive strength work".to_string()),
        activities: vec![
            PlanActivity {
                id: Some("custom-breakfast".to_string()),
                title: "Custom Breakfast".to_string(),
                time: Some("07:00".to_string()),
                duration: Some("25 min".to_string()),
                activity_type: Some("meal".to_string()),
                calories: Some(420),
                ..PlanActivity::default()
            },
            PlanActivity {
                id: Some("early-run".to_string()),
                title: "Early Run".to_string(),
                time: Some("05:00".to_string()),
                duration: Some("30 min".to_string()),
                activity_type: Some("exercise".to_string()),
                calories: Some(280),
                ..PlanActivity::default()
            },
        ],
        metadata: PlanMetadata {
            difficulty: Some("Intermediate".to_string()),
            ..PlanMetadata::default()
        },
    }
}

fn create_ai_result() -> AiAgentResult {
    serde_json::from_value(serde_json::json!({
        "success": true,
        "step": "schedule_ready",
        "selectedPlan": {"id": "plan-strength", "difficulty": "Intermediate"},
        "step2": {"schedule": {"dailySchedule": [
            {
                "time": "06:00",
                "category": "wakeup_routine",
                "activity": "Wakeup Routine",
                "details": "Start your day with energy and focus",
                "duration": "30 min",
                "calories": 0,
                "subActivities": [
                    {"time": "06:00", "activity": "Drink 500ml water", "duration": "2 min"},
                    {"activity": "Light stretching"}
                ]
            },
            {
                "time": "18:00",
                "category": "workout",
                "activity": "Home Workout",
                "workout": {
                    "type": "Home",
                    "mainExercises": [
                        {"exercise": "Push-ups", "sets": 3, "reps": "10-12"}
                    ],
                    "caloriesBurned": 300,
                    "intensity": "Intermediate",
                    "equipment": ["Resistance band"]
                }
            },
            {
                "time": "22:00",
                "category": "sleep",
                "activity": "Bedtime Routine",
                "details": "Wind down activities, prepare for sleep",
                "duration": "30 min"
            }
        ]}}
    }))
    .unwrap()
}

/// The full merge workflow: plan overrides, appends, and ordering
#[test]
fn test_complete_merge_workflow() {
    let plan = create_test_plan();
    let baseline = baseline_schedule();
    let normalized = normalize_plan_activities(&plan.activities);
    let merged = merge_schedules(&baseline, &normalized);

    // One plan activity replaced the 07:00 slot, the other was appended
    assert_eq!(merged.len(), baseline.len() + 1);
    assert_eq!(merged[0].title, "Early Run");

    let at_seven = merged
        .iter()
        .find(|a| a.time == TimeSlot::new(7, 0))
        .unwrap();
    assert_eq!(at_seven.title, "Custom Breakfast");

    for pair in merged.windows(2) {
        assert!(pair[0].time <= pair[1].time);
    }
}

/// The selector prefers the AI schedule over everything else
#[test]
fn test_ai_schedule_takes_priority() {
    let plan = create_test_plan();
    let ai = create_ai_result();

    let schedule = compute_schedule_to_render(Some(&plan), Some(&ai));

    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule[0].title, "Wakeup Routine");
    assert_eq!(schedule[1].title, "Home Workout");
    assert_eq!(
        schedule[1].difficulty.as_deref(),
        Some("Intermediate"),
        "exercise difficulty falls back to the selected plan"
    );
    assert_eq!(schedule[2].title, "Bedtime Routine");
}

/// With no AI result the plan's own activities render unmerged
#[test]
fn test_plan_activities_render_without_baseline() {
    let plan = create_test_plan();

    let schedule = compute_schedule_to_render(Some(&plan), None);

    assert_eq!(schedule.len(), 2);
    let titles: Vec<_> = schedule.iter().map(|a| a.title.as_str()).collect();
    assert!(titles.contains(&"Custom Breakfast"));
    assert!(titles.contains(&"Early Run"));
}

/// With no inputs at all the baseline routine renders
#[test]
fn test_baseline_fallback() {
    let schedule = compute_schedule_to_render(None, None);
    assert_eq!(schedule, baseline_schedule());
}

/// Re-running the selection with unchanged inputs is deep-equal
#[test]
fn test_selection_idempotence() {
    let plan = create_test_plan();
    let ai = create_ai_result();

    assert_eq!(
        compute_schedule_to_render(Some(&plan), Some(&ai)),
        compute_schedule_to_render(Some(&plan), Some(&ai))
    );
    assert_eq!(
        compute_schedule_to_render(Some(&plan), None),
        compute_schedule_to_render(Some(&plan), None)
    );
}

/// Ids stay unique across every selection path
#[test]
fn test_rendered_ids_are_unique() {
    let plan = create_test_plan();
    let ai = create_ai_result();

    for schedule in [
        compute_schedule_to_render(Some(&plan), Some(&ai)),
        compute_schedule_to_render(Some(&plan), None),
        compute_schedule_to_render(None, None),
    ] {
        let mut ids: Vec<_> = schedule.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}

/// Summary totals reflect the rendered schedule
#[test]
fn test_summary_over_merged_schedule() {
    let plan = create_test_plan();
    let baseline = baseline_schedule();
    let merged = merge_schedules(&baseline, &normalize_plan_activities(&plan.activities));

    let summary = ScheduleSummary::from_activities(&merged);
    assert_eq!(summary.total_activities, merged.len());
    assert_eq!(summary.first_time, Some(TimeSlot::new(5, 0)));
    assert_eq!(summary.last_time, Some(TimeSlot::new(22, 0)));

    // Baseline 550, plus the run (280) and breakfast (420)
    assert_eq!(summary.total_calories, 1250);
}

/// A malformed AI payload degrades to defaults instead of failing
#[test]
fn test_degraded_ai_payload_still_renders() {
    let ai: AiAgentResult = serde_json::from_value(serde_json::json!({
        "step2": {"schedule": {"dailySchedule": [
            {},
            {"time": "not a time", "category": "cryo-chamber"}
        ]}}
    }))
    .unwrap();

    let schedule = compute_schedule_to_render(None, Some(&ai));

    assert_eq!(schedule.len(), 2);
    for activity in &schedule {
        assert_eq!(activity.time, TimeSlot::MIDNIGHT);
        assert_eq!(activity.calories, Some(0));
    }
    assert_eq!(schedule[0].title, "Activity");
}
