//! Baseline and plan schedule merging
//!
//! Combines the fixed baseline routine with a plan's normalized activities:
//! a plan activity at the same clock time as a baseline slot replaces that
//! slot, plan activities at new times are appended, and the union is sorted
//! by time.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::Activity;
use crate::timeslot::TimeSlot;

/// Merge a plan's activities into the baseline schedule.
///
/// Plan activities win ties: a plan activity whose time matches a baseline
/// slot replaces the baseline activity at that slot. Plan activities with
/// no matching slot are appended. The result is sorted ascending by time.
///
/// If the plan itself lists two activities at the same time, the later
/// record wins; earlier duplicates are dropped. Output length is therefore
/// baseline length plus the number of distinct plan times that matched no
/// baseline slot.
pub fn merge_schedules(baseline: &[Activity], plan_activities: &[Activity]) -> Vec<Activity> {
    // Index plan activities by slot in record order, so later duplicates
    // overwrite earlier ones.
    let mut plan_by_time: BTreeMap<TimeSlot, &Activity> = BTreeMap::new();
    for activity in plan_activities {
        if let Some(previous) = plan_by_time.insert(activity.time, activity) {
            debug!(
                time = %activity.time,
                dropped = %previous.id,
                kept = %activity.id,
                "plan lists two activities at the same time, keeping the later one"
            );
        }
    }

    let mut merged: Vec<Activity> = baseline
        .iter()
        .map(|slot| {
            plan_by_time
                .get(&slot.time)
                .map(|plan| (*plan).clone())
                .unwrap_or_else(|| slot.clone())
        })
        .collect();

    let unmatched = plan_by_time
        .values()
        .filter(|activity| !baseline.iter().any(|slot| slot.time == activity.time))
        .map(|activity| (*activity).clone());
    merged.extend(unmatched);

    merged.sort_by_key(|activity| activity.time);
    merged
}
