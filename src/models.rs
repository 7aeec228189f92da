use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timeslot::TimeSlot;

/// Activity categories recognized by the scheduling system
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Exercise,
    Meal,
    Rest,
    Work,
    Productivity,
    Hydration,
    Mindfulness,
}

impl ActivityType {
    /// Display label used in reports and tables
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Exercise => "exercise",
            ActivityType::Meal => "meal",
            ActivityType::Rest => "rest",
            ActivityType::Work => "work",
            ActivityType::Productivity => "productivity",
            ActivityType::Hydration => "hydration",
            ActivityType::Mindfulness => "mindfulness",
        }
    }
}

/// A short timed step nested under a parent activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubActivity {
    /// Clock time of the step
    pub time: TimeSlot,

    /// What to do at that time
    pub activity: String,

    /// Free-text duration, display only
    pub duration: String,
}

/// Macronutrient breakdown in grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fats: Decimal,
}

/// A single food line within a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    /// Food name
    pub food: String,

    /// Portion description (e.g. "50g", "1 medium")
    pub quantity: Option<String>,

    /// Calories contributed by this line
    pub calories: u32,

    /// Macronutrients contributed by this line
    pub macros: Macros,

    /// Optional preparation note
    pub preparation: Option<String>,
}

/// Structured meal payload attached to meal activities
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Meal name
    pub name: String,

    /// Food lines making up the meal
    pub items: Vec<MealItem>,

    /// Total calories for the meal
    pub total_calories: u32,

    /// Total macronutrients for the meal
    pub total_macros: Macros,

    /// Free-text preparation time
    pub prep_time: Option<String>,

    /// Ordered cooking steps
    pub cooking_instructions: Vec<String>,

    /// Alternative meal suggestions
    pub alternatives: Vec<String>,
}

/// One exercise within a workout section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStep {
    /// Exercise name
    pub exercise: String,

    /// Free-text duration, display only
    pub duration: Option<String>,

    /// Number of sets, when applicable
    pub sets: Option<u32>,

    /// Repetition scheme (e.g. "10-12")
    pub reps: Option<String>,
}

/// Structured workout payload attached to exercise activities
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Workout style (yoga, gym, home, cardio, ...)
    #[serde(rename = "type")]
    pub workout_type: String,

    /// Warmup exercises
    pub warmup: Vec<ExerciseStep>,

    /// Main workout block
    pub main_exercises: Vec<ExerciseStep>,

    /// Cooldown exercises
    pub cooldown: Vec<ExerciseStep>,

    /// Free-text total duration
    pub total_duration: Option<String>,

    /// Estimated calories burned
    pub calories_burned: Option<u32>,

    /// Intensity label (e.g. "Beginner")
    pub intensity: Option<String>,

    /// Equipment needed for the session
    pub equipment: Vec<String>,
}

/// One schedulable item in a day.
///
/// Activities are synthesized fresh on every schedule computation from the
/// baseline routine, a selected plan, or an AI-generated payload. Within one
/// computed schedule, ids are unique and at most one activity occupies a
/// given time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier, unique within a computed schedule
    pub id: String,

    /// Display name
    pub title: String,

    /// Clock time of the activity, the merge and sort key
    pub time: TimeSlot,

    /// Free-text duration (e.g. "30 min"), display only
    pub duration: String,

    /// Activity category, drives icon and color selection downstream
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Optional free-text description
    pub details: Option<String>,

    /// Ordered instruction steps
    pub instructions: Vec<String>,

    /// Equipment item names
    pub equipment: Vec<String>,

    /// Difficulty label, meaningful only for exercise activities
    pub difficulty: Option<String>,

    /// Estimated calories
    pub calories: Option<u32>,

    /// Timed micro-steps nested under this activity
    pub sub_activities: Vec<SubActivity>,

    /// Meal payload, present only on AI-adapted meal activities
    pub meal: Option<MealPlan>,

    /// Workout payload, present only on AI-adapted exercise activities
    pub workout: Option<WorkoutPlan>,
}

impl Default for Activity {
    fn default() -> Self {
        Activity {
            id: String::new(),
            title: String::new(),
            time: TimeSlot::MIDNIGHT,
            duration: String::new(),
            activity_type: ActivityType::Rest,
            details: None,
            instructions: Vec::new(),
            equipment: Vec::new(),
            difficulty: None,
            calories: None,
            sub_activities: Vec::new(),
            meal: None,
            workout: None,
        }
    }
}

/// Raw activity record as it appears inside a plan document.
///
/// Plans come from outside the crate and may carry missing or unrecognized
/// fields. Records are coerced into [`Activity`] values by the plan
/// normalizer before any merging happens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanActivity {
    pub id: Option<String>,
    pub title: String,
    pub time: Option<String>,
    pub duration: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub details: Option<String>,
    pub instructions: Vec<String>,
    pub equipment: Vec<String>,
    pub difficulty: Option<String>,
    pub calories: Option<u32>,
}

/// Descriptive metadata attached to a plan
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanMetadata {
    /// Overall plan duration (e.g. "8 weeks")
    pub duration: Option<String>,

    /// Difficulty label applied to the plan as a whole
    pub difficulty: Option<String>,

    /// Focus areas (e.g. "strength", "flexibility")
    pub focus_areas: Vec<String>,

    /// Daily calorie target
    pub calorie_target: Option<u32>,

    /// Target macro split
    pub macros: Option<Macros>,

    /// Free-text expected-results timeline
    pub timeline: Option<String>,

    /// Equipment the plan assumes
    pub equipment: Vec<String>,

    /// Claimed benefits
    pub benefits: Vec<String>,
}

/// A named protocol a user may select.
///
/// Plans are immutable input to the scheduling core; they are loaded,
/// validated, and read, never created or mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Plan identifier
    pub id: String,

    /// Display name
    pub title: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Raw activity records owned by the plan
    #[serde(default)]
    pub activities: Vec<PlanActivity>,

    /// Descriptive metadata
    #[serde(default)]
    pub metadata: PlanMetadata,
}
