//! Reference list of exercises offered by the routine editor.

use strum::{EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::Display, EnumString, EnumIter)]
pub enum Category {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl Category {
    #[must_use]
    pub fn exercises(self) -> &'static [&'static str] {
        match self {
            Category::Chest => CHEST,
            Category::Back => BACK,
            Category::Legs => LEGS,
            Category::Shoulders => SHOULDERS,
            Category::Arms => ARMS,
            Category::Core => CORE,
        }
    }
}

const CHEST: &[&str] = &[
    "Bench Press (Barbell)",
    "Bench Press (Dumbbell)",
    "Incline Bench Press",
    "Decline Bench Press",
    "Chest Fly",
    "Pushups",
    "Chest Press Machine",
    "Dips",
];

const BACK: &[&str] = &[
    "Deadlift (Barbell)",
    "Pullups",
    "Lat Pulldown",
    "Bent Over Row (Barbell)",
    "One Arm Row (Dumbbell)",
    "Seated Cable Row",
    "T-Bar Row",
    "Face Pulls",
    "Hyperextensions",
];

const LEGS: &[&str] = &[
    "Squat (Barbell)",
    "Leg Press",
    "Leg Extension",
    "Leg Curl",
    "Lunge",
    "Bulgarian Split Squat",
    "Romanian Deadlift",
    "Calf Raise",
    "Hip Thrust",
];

const SHOULDERS: &[&str] = &[
    "Overhead Press (Barbell)",
    "Shoulder Press (Dumbbell)",
    "Lateral Raise",
    "Front Raise",
    "Rear Delt Fly",
    "Upright Row",
    "Arnold Press",
];

const ARMS: &[&str] = &[
    "Bicep Curl (Barbell)",
    "Hammer Curl",
    "Preacher Curl",
    "Tricep Pushdown",
    "Skull Crushers",
    "Close Grip Bench Press",
    "Overhead Tricep Extension",
];

const CORE: &[&str] = &[
    "Plank",
    "Crunches",
    "Leg Raise",
    "Russian Twist",
    "Ab Rollout",
    "Cable Woodchoppers",
];

/// Find exercises whose name contains `term`, ignoring case.
///
/// Categories are returned in their fixed order, categories without any match are omitted. An
/// empty term matches every exercise.
#[must_use]
pub fn search(term: &str) -> Vec<(Category, Vec<&'static str>)> {
    let term = term.trim().to_lowercase();
    Category::iter()
        .map(|category| {
            (
                category,
                category
                    .exercises()
                    .iter()
                    .copied()
                    .filter(|name| name.to_lowercase().contains(&term))
                    .collect::<Vec<_>>(),
            )
        })
        .filter(|(_, names)| !names.is_empty())
        .collect()
}
