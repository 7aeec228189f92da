//! Plan ingestion validation
//!
//! The scheduling core is deliberately tolerant: it degrades bad fields to
//! defaults instead of failing. Validation is the opt-in strict pass for
//! callers that want to reject questionable plans at ingestion instead.
//! Issues are split into errors (the plan should be rejected) and warnings
//! (the plan will schedule, but a default or override rule will kick in).

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Plan;
use crate::timeslot::TimeSlot;

/// A single problem found in a plan
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("activity {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("activity {index} has unparseable time {value:?}, it will schedule at 00:00")]
    MalformedTime { index: usize, value: String },

    #[error("activity {index} has no time, it will schedule at 00:00")]
    MissingTime { index: usize },

    #[error("activities {first} and {second} share time {time}, the later record wins")]
    DuplicateTime {
        time: TimeSlot,
        first: usize,
        second: usize,
    },

    #[error("activities {first} and {second} share id {id:?}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("activity {index} has unrecognized type {value:?}, it will be treated as exercise")]
    UnrecognizedType { index: usize, value: String },

    #[error("activity {index} claims {calories} calories, which looks implausible")]
    SuspiciousCalories { index: usize, calories: u32 },
}

/// Outcome of validating one plan
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A plan is valid when it produced no errors; warnings are advisory
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of recorded issues
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

const RECOGNIZED_PLAN_TYPES: [&str; 5] = ["exercise", "meal", "rest", "work", "mindfulness"];

/// Calorie values above this are flagged as suspicious for a single activity
const MAX_PLAUSIBLE_CALORIES: u32 = 5_000;

/// Validate a plan's activity records
pub struct PlanValidator;

impl PlanValidator {
    /// Validate a plan, collecting every issue instead of stopping at the
    /// first
    pub fn validate_plan(plan: &Plan) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen_times: HashMap<TimeSlot, usize> = HashMap::new();
        let mut seen_ids: HashMap<String, usize> = HashMap::new();

        for (index, activity) in plan.activities.iter().enumerate() {
            if activity.title.trim().is_empty() {
                report.errors.push(ValidationIssue::EmptyTitle { index });
            }

            match activity.time.as_deref() {
                Some(raw) => match TimeSlot::from_hhmm(raw) {
                    Ok(slot) => {
                        if let Some(&first) = seen_times.get(&slot) {
                            report.warnings.push(ValidationIssue::DuplicateTime {
                                time: slot,
                                first,
                                second: index,
                            });
                        } else {
                            seen_times.insert(slot, index);
                        }
                    }
                    Err(_) => {
                        report.warnings.push(ValidationIssue::MalformedTime {
                            index,
                            value: raw.to_string(),
                        });
                    }
                },
                None => {
                    report.warnings.push(ValidationIssue::MissingTime { index });
                }
            }

            if let Some(id) = &activity.id {
                if let Some(&first) = seen_ids.get(id) {
                    report.warnings.push(ValidationIssue::DuplicateId {
                        id: id.clone(),
                        first,
                        second: index,
                    });
                } else {
                    seen_ids.insert(id.clone(), index);
                }
            }

            if let Some(raw_type) = activity.activity_type.as_deref() {
                let lowered = raw_type.trim().to_lowercase();
                if !RECOGNIZED_PLAN_TYPES.contains(&lowered.as_str()) {
                    report.warnings.push(ValidationIssue::UnrecognizedType {
                        index,
                        value: raw_type.to_string(),
                    });
                }
            }

            if let Some(calories) = activity.calories {
                if calories > MAX_PLAUSIBLE_CALORIES {
                    report
                        .warnings
                        .push(ValidationIssue::SuspiciousCalories { index, calories });
                }
            }
        }

        report
    }
}
