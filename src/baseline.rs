//! Fixed baseline daily routine
//!
//! The fallback schedule rendered when neither a selected plan nor an AI
//! generated schedule is available. Fifteen activities covering a full day
//! from a 06:00 wake-up to a 22:00 bedtime, every one carrying either
//! step-by-step instructions or timed sub-activities.

use crate::models::{Activity, ActivityType, SubActivity};
use crate::timeslot::TimeSlot;

/// Produce the baseline full-day schedule.
///
/// Pure and deterministic: every call returns a structurally identical,
/// time-ordered list with unique ids and unique time slots.
pub fn baseline_schedule() -> Vec<Activity> {
    vec![
        Activity {
            id: "wake-up".to_string(),
            title: "Wake Up & Hydration".to_string(),
            time: TimeSlot::new(6, 0),
            duration: "15 min".to_string(),
            activity_type: ActivityType::Rest,
            details: Some("Start your day with a glass of water".to_string()),
            sub_activities: vec![
                SubActivity {
                    time: TimeSlot::new(6, 0),
                    activity: "Drink 500ml water immediately upon waking".to_string(),
                    duration: "2 min".to_string(),
                },
                SubActivity {
                    time: TimeSlot::new(6, 5),
                    activity: "Light stretching".to_string(),
                    duration: "5 min".to_string(),
                },
                SubActivity {
                    time: TimeSlot::new(6, 10),
                    activity: "Open curtains for natural light".to_string(),
                    duration: "1 min".to_string(),
                },
            ],
            ..Activity::default()
        },
        Activity {
            id: "morning-meditation".to_string(),
            title: "Morning Meditation".to_string(),
            time: TimeSlot::new(6, 15),
            duration: "15 min".to_string(),
            activity_type: ActivityType::Mindfulness,
            details: Some("Set intention for the day".to_string()),
            instructions: vec![
                "Find a quiet space".to_string(),
                "Sit comfortably".to_string(),
                "Focus on breathing".to_string(),
                "Set daily intention".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "breakfast".to_string(),
            title: "Breakfast".to_string(),
            time: TimeSlot::new(7, 0),
            duration: "30 min".to_string(),
            activity_type: ActivityType::Meal,
            details: Some("Nutritious morning meal".to_string()),
            sub_activities: vec![
                SubActivity {
                    time: TimeSlot::new(7, 0),
                    activity: "Prepare breakfast ingredients".to_string(),
                    duration: "5 min".to_string(),
                },
                SubActivity {
                    time: TimeSlot::new(7, 5),
                    activity: "Cook and serve meal".to_string(),
                    duration: "15 min".to_string(),
                },
                SubActivity {
                    time: TimeSlot::new(7, 20),
                    activity: "Eat mindfully".to_string(),
                    duration: "10 min".to_string(),
                },
            ],
            ..Activity::default()
        },
        Activity {
            id: "morning-exercise".to_string(),
            title: "Morning Exercise".to_string(),
            time: TimeSlot::new(8, 0),
            duration: "45 min".to_string(),
            activity_type: ActivityType::Exercise,
            details: Some("Energizing workout to start the day".to_string()),
            instructions: vec![
                "Warm up for 5 minutes".to_string(),
                "Main workout for 30 minutes".to_string(),
                "Cool down for 10 minutes".to_string(),
            ],
            equipment: vec!["Yoga mat".to_string(), "Water bottle".to_string()],
            difficulty: Some("Beginner".to_string()),
            calories: Some(250),
            ..Activity::default()
        },
        Activity {
            id: "work-session-1".to_string(),
            title: "Work Session 1".to_string(),
            time: TimeSlot::new(9, 0),
            duration: "2 hours".to_string(),
            activity_type: ActivityType::Work,
            details: Some("Focused work time".to_string()),
            instructions: vec![
                "Set clear goals".to_string(),
                "Eliminate distractions".to_string(),
                "Take breaks every 25 minutes".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "hydration-break".to_string(),
            title: "Hydration Break".to_string(),
            time: TimeSlot::new(10, 30),
            duration: "10 min".to_string(),
            activity_type: ActivityType::Hydration,
            details: Some("Refill and reset between work blocks".to_string()),
            instructions: vec![
                "Drink a full glass of water".to_string(),
                "Stand up and stretch".to_string(),
                "Rest your eyes away from the screen".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "lunch".to_string(),
            title: "Lunch".to_string(),
            time: TimeSlot::new(12, 0),
            duration: "45 min".to_string(),
            activity_type: ActivityType::Meal,
            details: Some("Balanced midday meal".to_string()),
            instructions: vec![
                "Include vegetables".to_string(),
                "Add lean protein".to_string(),
                "Choose whole grains".to_string(),
                "Take time to enjoy".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "afternoon-walk".to_string(),
            title: "Afternoon Walk".to_string(),
            time: TimeSlot::new(12, 45),
            duration: "20 min".to_string(),
            activity_type: ActivityType::Exercise,
            details: Some("Gentle movement after lunch".to_string()),
            instructions: vec![
                "Walk at a comfortable pace".to_string(),
                "Get fresh air".to_string(),
                "Practice mindfulness".to_string(),
            ],
            calories: Some(100),
            ..Activity::default()
        },
        Activity {
            id: "work-session-2".to_string(),
            title: "Work Session 2".to_string(),
            time: TimeSlot::new(13, 15),
            duration: "2 hours".to_string(),
            activity_type: ActivityType::Work,
            details: Some("Afternoon productivity".to_string()),
            instructions: vec![
                "Review morning progress".to_string(),
                "Tackle important tasks".to_string(),
                "Stay hydrated".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "afternoon-snack".to_string(),
            title: "Afternoon Snack".to_string(),
            time: TimeSlot::new(15, 30),
            duration: "15 min".to_string(),
            activity_type: ActivityType::Meal,
            details: Some("Energy-boosting snack".to_string()),
            instructions: vec![
                "Choose protein-rich options".to_string(),
                "Avoid a sugar crash".to_string(),
                "Stay hydrated".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "deep-work".to_string(),
            title: "Deep Work Block".to_string(),
            time: TimeSlot::new(15, 45),
            duration: "1.5 hours".to_string(),
            activity_type: ActivityType::Productivity,
            details: Some("Final push on the day's most demanding task".to_string()),
            instructions: vec![
                "Pick the single most important task".to_string(),
                "Silence notifications".to_string(),
                "Review daily progress before finishing".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "evening-exercise".to_string(),
            title: "Evening Exercise".to_string(),
            time: TimeSlot::new(17, 30),
            duration: "45 min".to_string(),
            activity_type: ActivityType::Exercise,
            details: Some("Wind down with gentle movement".to_string()),
            instructions: vec![
                "Choose a relaxing activity".to_string(),
                "Focus on flexibility".to_string(),
                "Listen to your body".to_string(),
            ],
            equipment: vec![
                "Yoga mat".to_string(),
                "Comfortable clothes".to_string(),
            ],
            difficulty: Some("Beginner".to_string()),
            calories: Some(200),
            ..Activity::default()
        },
        Activity {
            id: "dinner".to_string(),
            title: "Dinner".to_string(),
            time: TimeSlot::new(18, 30),
            duration: "45 min".to_string(),
            activity_type: ActivityType::Meal,
            details: Some("Light, nutritious evening meal".to_string()),
            instructions: vec![
                "Keep portions moderate".to_string(),
                "Include vegetables".to_string(),
                "Avoid heavy foods".to_string(),
                "Eat slowly".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "evening-meditation".to_string(),
            title: "Evening Meditation".to_string(),
            time: TimeSlot::new(20, 0),
            duration: "20 min".to_string(),
            activity_type: ActivityType::Mindfulness,
            details: Some("Reflect on the day".to_string()),
            instructions: vec![
                "Find a quiet space".to_string(),
                "Review the day's events".to_string(),
                "Practice gratitude".to_string(),
                "Set tomorrow's intention".to_string(),
            ],
            ..Activity::default()
        },
        Activity {
            id: "bedtime".to_string(),
            title: "Bedtime".to_string(),
            time: TimeSlot::new(22, 0),
            duration: "8 hours".to_string(),
            activity_type: ActivityType::Rest,
            details: Some("Restful sleep".to_string()),
            instructions: vec![
                "Keep the room cool and dark".to_string(),
                "Avoid screens and caffeine".to_string(),
                "Practice deep breathing".to_string(),
                "Get 7-9 hours of sleep".to_string(),
            ],
            ..Activity::default()
        },
    ]
}
