//! AI schedule payload adaptation
//!
//! The upstream generation pipeline returns a loosely structured JSON
//! document whose useful content sits behind a nested path
//! (`step2.schedule.dailySchedule`). The payload is decoded once, here, into
//! `#[serde(default)]` structs, then mapped into canonical [`Activity`]
//! values with every field defaulted independently. Partial data never
//! fails an item; the adapter only returns an empty list when the nested
//! path itself is absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    Activity, ActivityType, ExerciseStep, Macros, MealItem, MealPlan, SubActivity, WorkoutPlan,
};
use crate::timeslot::TimeSlot;

/// Top-level result object produced by the AI pipeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiAgentResult {
    pub success: Option<bool>,
    pub step: Option<String>,
    pub step2: Option<AiPlanningStep>,
    pub selected_plan: Option<AiSelectedPlan>,
    pub generated_at: Option<String>,
}

/// The schedule-producing step of the pipeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiPlanningStep {
    pub schedule: Option<AiSchedule>,
}

/// Container for the generated daily schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSchedule {
    pub daily_schedule: Vec<AiScheduleRecord>,
}

/// Plan context echoed back by the pipeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSelectedPlan {
    pub id: Option<String>,
    pub title: Option<String>,
    pub difficulty: Option<String>,
}

/// One loosely typed activity record from the AI schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiScheduleRecord {
    pub time: Option<String>,
    pub category: Option<String>,
    pub activity: Option<String>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<u32>,
    pub difficulty: Option<String>,
    pub sub_activities: Vec<AiSubActivity>,
    pub meal: Option<AiMeal>,
    pub workout: Option<AiWorkout>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSubActivity {
    pub time: Option<String>,
    pub activity: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiMeal {
    pub name: Option<String>,
    pub items: Vec<AiMealItem>,
    pub total_calories: Option<u32>,
    pub total_macros: Option<AiMacros>,
    pub prep_time: Option<String>,
    pub cooking_instructions: Vec<String>,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiMealItem {
    pub food: Option<String>,
    pub quantity: Option<String>,
    pub calories: Option<u32>,
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fats: Option<Decimal>,
    pub preparation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiMacros {
    pub protein: Option<Decimal>,
    pub carbs: Option<Decimal>,
    pub fats: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiWorkout {
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    pub warmup: Vec<AiExercise>,
    pub main_exercises: Vec<AiExercise>,
    pub cooldown: Vec<AiExercise>,
    pub total_duration: Option<String>,
    pub calories_burned: Option<u32>,
    pub intensity: Option<String>,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiExercise {
    pub exercise: Option<String>,
    pub duration: Option<String>,
    pub sets: Option<u32>,
    pub reps: Option<String>,
}

/// Map an AI category string to a canonical activity type.
///
/// The pipeline emits category names of its own invention; anything
/// unrecognized lands on `Rest` rather than failing the record.
fn map_category(raw: Option<&str>) -> ActivityType {
    match raw.map(|s| s.trim().to_lowercase()).as_deref() {
        Some("meal") | Some("breakfast") | Some("lunch") | Some("dinner") | Some("snack") => {
            ActivityType::Meal
        }
        Some("exercise") | Some("workout") | Some("morning_exercise")
        | Some("evening_exercise") => ActivityType::Exercise,
        Some("work") | Some("work_break") | Some("work_session") => ActivityType::Work,
        Some("mindfulness") | Some("meditation") => ActivityType::Mindfulness,
        Some("rest") | Some("sleep") | Some("wakeup_routine") | Some("morning_routine")
        | Some("evening_routine") | Some("bedtime_routine") => ActivityType::Rest,
        _ => ActivityType::Rest,
    }
}

/// Adapt an AI pipeline result into canonical activities.
///
/// Returns an empty list when the nested schedule path is absent, which is
/// the signal the source selector uses to fall through to the next source.
pub fn adapt_ai_schedule(result: &AiAgentResult) -> Vec<Activity> {
    let records = match result
        .step2
        .as_ref()
        .and_then(|step| step.schedule.as_ref())
    {
        Some(schedule) => &schedule.daily_schedule,
        None => return Vec::new(),
    };

    debug!(count = records.len(), "adapting AI generated schedule");

    records
        .iter()
        .enumerate()
        .map(|(index, record)| adapt_record(index, record, result.selected_plan.as_ref()))
        .collect()
}

fn adapt_record(
    index: usize,
    record: &AiScheduleRecord,
    selected_plan: Option<&AiSelectedPlan>,
) -> Activity {
    let activity_type = map_category(record.category.as_deref());
    let time = record
        .time
        .as_deref()
        .map(TimeSlot::from_hhmm_lossy)
        .unwrap_or(TimeSlot::MIDNIGHT);

    let title = record
        .activity
        .clone()
        .or_else(|| record.title.clone())
        .unwrap_or_else(|| "Activity".to_string());

    let workout = record.workout.as_ref().map(adapt_workout);

    // Instruction lines come from the workout's main block when one is
    // present, otherwise from the details line.
    let instructions = match &workout {
        Some(w) if !w.main_exercises.is_empty() => w
            .main_exercises
            .iter()
            .map(|step| step.exercise.clone())
            .collect(),
        _ => record.details.clone().into_iter().collect(),
    };

    let equipment = workout
        .as_ref()
        .map(|w| w.equipment.clone())
        .unwrap_or_default();

    let difficulty = if activity_type == ActivityType::Exercise {
        record
            .difficulty
            .clone()
            .or_else(|| selected_plan.and_then(|plan| plan.difficulty.clone()))
    } else {
        None
    };

    Activity {
        id: format!("ai-activity-{}", index),
        title,
        time,
        duration: record
            .duration
            .clone()
            .unwrap_or_else(|| "30 min".to_string()),
        activity_type,
        details: record.details.clone(),
        instructions,
        equipment,
        difficulty,
        calories: Some(record.calories.unwrap_or(0)),
        sub_activities: record
            .sub_activities
            .iter()
            .map(|sub| adapt_sub_activity(sub, time))
            .collect(),
        meal: record.meal.as_ref().map(adapt_meal),
        workout,
    }
}

fn adapt_sub_activity(sub: &AiSubActivity, parent_time: TimeSlot) -> SubActivity {
    SubActivity {
        time: sub
            .time
            .as_deref()
            .map(TimeSlot::from_hhmm_lossy)
            .unwrap_or(parent_time),
        activity: sub.activity.clone().unwrap_or_default(),
        duration: sub.duration.clone().unwrap_or_else(|| "5 min".to_string()),
    }
}

fn adapt_meal(meal: &AiMeal) -> MealPlan {
    MealPlan {
        name: meal.name.clone().unwrap_or_default(),
        items: meal.items.iter().map(adapt_meal_item).collect(),
        total_calories: meal.total_calories.unwrap_or(0),
        total_macros: meal.total_macros.map(adapt_macros).unwrap_or_default(),
        prep_time: meal.prep_time.clone(),
        cooking_instructions: meal.cooking_instructions.clone(),
        alternatives: meal.alternatives.clone(),
    }
}

fn adapt_meal_item(item: &AiMealItem) -> MealItem {
    MealItem {
        food: item.food.clone().unwrap_or_default(),
        quantity: item.quantity.clone(),
        calories: item.calories.unwrap_or(0),
        macros: Macros {
            protein: item.protein.unwrap_or_default(),
            carbs: item.carbs.unwrap_or_default(),
            fats: item.fats.unwrap_or_default(),
        },
        preparation: item.preparation.clone(),
    }
}

fn adapt_macros(macros: AiMacros) -> Macros {
    Macros {
        protein: macros.protein.unwrap_or_default(),
        carbs: macros.carbs.unwrap_or_default(),
        fats: macros.fats.unwrap_or_default(),
    }
}

fn adapt_workout(workout: &AiWorkout) -> WorkoutPlan {
    WorkoutPlan {
        workout_type: workout.workout_type.clone().unwrap_or_default(),
        warmup: workout.warmup.iter().map(adapt_exercise).collect(),
        main_exercises: workout.main_exercises.iter().map(adapt_exercise).collect(),
        cooldown: workout.cooldown.iter().map(adapt_exercise).collect(),
        total_duration: workout.total_duration.clone(),
        calories_burned: workout.calories_burned,
        intensity: workout.intensity.clone(),
        equipment: workout.equipment.clone(),
    }
}

fn adapt_exercise(exercise: &AiExercise) -> ExerciseStep {
    ExerciseStep {
        exercise: exercise.exercise.clone().unwrap_or_default(),
        duration: exercise.duration.clone(),
        sets: exercise.sets,
        reps: exercise.reps.clone(),
    }
}
