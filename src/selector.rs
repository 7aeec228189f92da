//! Schedule source selection
//!
//! Three sources can produce the rendered schedule, in priority order: the
//! AI generated schedule, the selected plan's own activities, and the
//! baseline routine merged with the plan. Each source is a named strategy
//! behind a common trait; the selector walks the list and takes the first
//! non-empty answer.

use tracing::debug;

use crate::adapter::{adapt_ai_schedule, AiAgentResult};
use crate::baseline::baseline_schedule;
use crate::merge::merge_schedules;
use crate::models::{Activity, Plan};
use crate::normalize::normalize_plan_activities;

/// Inputs a schedule source may draw from
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleInputs<'a> {
    pub plan: Option<&'a Plan>,
    pub ai_result: Option<&'a AiAgentResult>,
}

/// One strategy for producing the rendered schedule
pub trait ScheduleSource {
    /// Strategy name, used for logging and report provenance
    fn name(&self) -> &'static str;

    /// Produce a schedule from the inputs, or `None` to let the next
    /// strategy try
    fn try_produce(&self, inputs: &ScheduleInputs) -> Option<Vec<Activity>>;
}

/// AI generated schedule, the highest-priority source
pub struct AiScheduleSource;

impl ScheduleSource for AiScheduleSource {
    fn name(&self) -> &'static str {
        "ai"
    }

    fn try_produce(&self, inputs: &ScheduleInputs) -> Option<Vec<Activity>> {
        let mut adapted = adapt_ai_schedule(inputs.ai_result?);
        if adapted.is_empty() {
            None
        } else {
            adapted.sort_by_key(|activity| activity.time);
            Some(adapted)
        }
    }
}

/// The selected plan's own activity list, used as-is without merging
pub struct PlanActivitiesSource;

impl ScheduleSource for PlanActivitiesSource {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn try_produce(&self, inputs: &ScheduleInputs) -> Option<Vec<Activity>> {
        let plan = inputs.plan?;
        if plan.activities.is_empty() {
            None
        } else {
            let mut normalized = normalize_plan_activities(&plan.activities);
            normalized.sort_by_key(|activity| activity.time);
            Some(normalized)
        }
    }
}

/// Baseline routine merged with whatever the plan carries; always produces
pub struct MergedBaselineSource;

impl ScheduleSource for MergedBaselineSource {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn try_produce(&self, inputs: &ScheduleInputs) -> Option<Vec<Activity>> {
        let plan_activities = inputs
            .plan
            .map(|plan| normalize_plan_activities(&plan.activities))
            .unwrap_or_default();
        Some(merge_schedules(&baseline_schedule(), &plan_activities))
    }
}

/// Ordered cascade of schedule sources
pub struct ScheduleSelector {
    sources: Vec<Box<dyn ScheduleSource>>,
}

impl ScheduleSelector {
    /// Create a selector with the default priority order
    pub fn new() -> Self {
        ScheduleSelector {
            sources: vec![
                Box::new(AiScheduleSource),
                Box::new(PlanActivitiesSource),
                Box::new(MergedBaselineSource),
            ],
        }
    }

    /// Create a selector with a custom strategy list
    pub fn with_sources(sources: Vec<Box<dyn ScheduleSource>>) -> Self {
        ScheduleSelector { sources }
    }

    /// Walk the strategy list and return the first non-empty schedule,
    /// along with the name of the source that produced it
    pub fn select(&self, inputs: &ScheduleInputs) -> (Vec<Activity>, &'static str) {
        for source in &self.sources {
            if let Some(schedule) = source.try_produce(inputs) {
                debug!(source = source.name(), count = schedule.len(), "schedule source selected");
                return (schedule, source.name());
            }
        }
        (Vec::new(), "none")
    }
}

impl Default for ScheduleSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the schedule the presentation layer should render.
///
/// Pure and idempotent: identical inputs produce structurally identical
/// output on every call.
pub fn compute_schedule_to_render(
    plan: Option<&Plan>,
    ai_result: Option<&AiAgentResult>,
) -> Vec<Activity> {
    let inputs = ScheduleInputs { plan, ai_result };
    ScheduleSelector::new().select(&inputs).0
}
