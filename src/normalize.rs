//! Plan activity normalization
//!
//! Plans arrive with freeform activity records: the `type` field is an
//! arbitrary string and most other fields may be missing. Normalization
//! coerces each record into the canonical [`Activity`] shape so the merge
//! step only ever sees typed data.

use crate::models::{Activity, ActivityType, PlanActivity};
use crate::timeslot::TimeSlot;

/// Coerce a raw plan `type` string into one of the categories a plan is
/// allowed to carry. Unrecognized or missing types become `Exercise`.
fn coerce_plan_type(raw: Option<&str>) -> ActivityType {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("exercise") => ActivityType::Exercise,
        Some("meal") => ActivityType::Meal,
        Some("rest") => ActivityType::Rest,
        Some("work") => ActivityType::Work,
        Some("mindfulness") => ActivityType::Mindfulness,
        _ => ActivityType::Exercise,
    }
}

/// Normalize a plan's raw activity list into canonical activities.
///
/// Total over its input: empty input yields empty output, missing fields
/// get deterministic fallbacks (index-derived ids, midnight for
/// unparseable times), and nothing here can fail.
pub fn normalize_plan_activities(raw: &[PlanActivity]) -> Vec<Activity> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| normalize_activity(index, record))
        .collect()
}

fn normalize_activity(index: usize, record: &PlanActivity) -> Activity {
    Activity {
        id: record
            .id
            .clone()
            .unwrap_or_else(|| format!("plan-activity-{}", index)),
        title: record.title.clone(),
        time: record
            .time
            .as_deref()
            .map(TimeSlot::from_hhmm_lossy)
            .unwrap_or(TimeSlot::MIDNIGHT),
        duration: record
            .duration
            .clone()
            .unwrap_or_else(|| "30 min".to_string()),
        activity_type: coerce_plan_type(record.activity_type.as_deref()),
        details: record.details.clone(),
        instructions: record.instructions.clone(),
        equipment: record.equipment.clone(),
        difficulty: record.difficulty.clone(),
        calories: record.calories,
        ..Activity::default()
    }
}
