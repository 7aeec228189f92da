use proptest::prelude::*;
use std::collections::BTreeSet;

use planrs::models::{Activity, ActivityType};
use planrs::timeslot::TimeSlot;
use planrs::{baseline_schedule, merge_schedules};

/// Property tests for the schedule merge invariants

fn arb_activity(index: usize, minutes: u16) -> Activity {
    Activity {
        id: format!("gen-{}", index),
        title: format!("Generated {}", index),
        time: TimeSlot::new(minutes / 60, minutes % 60),
        duration: "30 min".to_string(),
        activity_type: ActivityType::Exercise,
        ..Activity::default()
    }
}

proptest! {
    /// Merged output is always sorted ascending by time
    #[test]
    fn prop_merge_output_sorted(times in proptest::collection::vec(0u16..1440, 0..40)) {
        let plan: Vec<Activity> = times
            .iter()
            .enumerate()
            .map(|(i, &m)| arb_activity(i, m))
            .collect();

        let merged = merge_schedules(&baseline_schedule(), &plan);

        for pair in merged.windows(2) {
            prop_assert!(pair[0].time <= pair[1].time);
        }
    }

    /// Output length is baseline length plus distinct unmatched plan times
    #[test]
    fn prop_merge_length(times in proptest::collection::vec(0u16..1440, 0..40)) {
        let baseline = baseline_schedule();
        let plan: Vec<Activity> = times
            .iter()
            .enumerate()
            .map(|(i, &m)| arb_activity(i, m))
            .collect();

        let baseline_times: BTreeSet<TimeSlot> = baseline.iter().map(|a| a.time).collect();
        let distinct_unmatched: BTreeSet<TimeSlot> = plan
            .iter()
            .map(|a| a.time)
            .filter(|t| !baseline_times.contains(t))
            .collect();

        let merged = merge_schedules(&baseline, &plan);
        prop_assert_eq!(merged.len(), baseline.len() + distinct_unmatched.len());
    }

    /// After merging, no two activities share a time slot
    #[test]
    fn prop_merge_times_unique(times in proptest::collection::vec(0u16..1440, 0..40)) {
        let merged = merge_schedules(&baseline_schedule(), &plan_of(&times));

        let distinct: BTreeSet<TimeSlot> = merged.iter().map(|a| a.time).collect();
        prop_assert_eq!(distinct.len(), merged.len());
    }

    /// Every plan time appears in the merged output
    #[test]
    fn prop_plan_times_present(times in proptest::collection::vec(0u16..1440, 1..40)) {
        let plan = plan_of(&times);
        let merged = merge_schedules(&baseline_schedule(), &plan);

        let merged_times: BTreeSet<TimeSlot> = merged.iter().map(|a| a.time).collect();
        for activity in &plan {
            prop_assert!(merged_times.contains(&activity.time));
        }
    }
}

fn plan_of(times: &[u16]) -> Vec<Activity> {
    times
        .iter()
        .enumerate()
        .map(|(i, &m)| arb_activity(i, m))
        .collect()
}
