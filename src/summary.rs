//! Schedule summary aggregation
//!
//! Totals displayed alongside a rendered schedule: activity counts broken
//! down by type, calories, and macro totals collected from meal payloads.
//! Duration strings are display-only and are never parsed here.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Activity, Macros};
use crate::timeslot::TimeSlot;

/// Aggregated view of a computed schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    /// Number of activities in the schedule
    pub total_activities: usize,

    /// Activity counts keyed by type label
    pub counts_by_type: BTreeMap<String, usize>,

    /// Sum of activity calorie estimates
    pub total_calories: u32,

    /// Macro totals summed over meal payloads
    pub total_macros: Macros,

    /// Earliest activity time, when the schedule is non-empty
    pub first_time: Option<TimeSlot>,

    /// Latest activity time, when the schedule is non-empty
    pub last_time: Option<TimeSlot>,
}

impl ScheduleSummary {
    /// Aggregate a computed schedule into summary totals
    pub fn from_activities(activities: &[Activity]) -> Self {
        let mut counts_by_type: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_calories: u32 = 0;
        let mut total_macros = Macros::default();

        for activity in activities {
            *counts_by_type
                .entry(activity.activity_type.label().to_string())
                .or_insert(0) += 1;
            total_calories = total_calories.saturating_add(activity.calories.unwrap_or(0));

            if let Some(meal) = &activity.meal {
                total_macros.protein += meal.total_macros.protein;
                total_macros.carbs += meal.total_macros.carbs;
                total_macros.fats += meal.total_macros.fats;
            }
        }

        ScheduleSummary {
            total_activities: activities.len(),
            counts_by_type,
            total_calories,
            total_macros,
            first_time: activities.iter().map(|a| a.time).min(),
            last_time: activities.iter().map(|a| a.time).max(),
        }
    }

    /// Protein total as a plain decimal, for display
    pub fn protein(&self) -> Decimal {
        self.total_macros.protein
    }
}
