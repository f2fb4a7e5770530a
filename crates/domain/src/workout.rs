use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    ExerciseID, Name, RPE, ReadError, RoutineID, SetRecord, UserID, WriteError, compute_volume,
};

pub trait WorkoutRepository {
    /// Read the workout history, most recent session first.
    fn read_workouts(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    fn write_workouts(&self, workouts: &[WorkoutSession]) -> Result<(), WriteError>;
}

/// A finished workout.
///
/// Routine and exercise names are copies taken at the time the workout was finished, so that
/// renaming a routine later does not rewrite the history.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub user_id: UserID,
    pub routine_id: RoutineID,
    pub routine_name: Name,
    pub date: DateTime<Utc>,
    /// Duration in whole minutes.
    pub duration: u32,
    pub exercises: Vec<ExerciseResult>,
}

impl WorkoutSession {
    #[must_use]
    pub fn result(&self, exercise_id: ExerciseID) -> Option<&ExerciseResult> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(|e| compute_volume(&e.sets)).sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    #[must_use]
    pub fn avg_rpe(&self) -> Option<f64> {
        RPE::avg(
            &self
                .exercises
                .iter()
                .flat_map(|e| e.sets.iter().map(|s| s.rpe))
                .collect::<Vec<_>>(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseResult {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub sets: Vec<SetRecord>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSessionID(Uuid);

impl WorkoutSessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for WorkoutSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{Reps, RestTime, Weight};

    use super::*;

    fn set(weight: f64, reps: u32, rpe: RPE) -> SetRecord {
        SetRecord {
            id: crate::SetID::random(),
            weight: Weight::new(weight).unwrap(),
            reps: Reps::new(reps).unwrap(),
            rpe,
            rest_time: RestTime::new(90).unwrap(),
            warmup: false,
        }
    }

    static WORKOUT: std::sync::LazyLock<WorkoutSession> =
        std::sync::LazyLock::new(|| WorkoutSession {
            id: 1.into(),
            user_id: 1.into(),
            routine_id: 2.into(),
            routine_name: Name::new("Push Day A").unwrap(),
            date: Utc.with_ymd_and_hms(2026, 3, 2, 18, 30, 0).unwrap(),
            duration: 52,
            exercises: vec![
                ExerciseResult {
                    exercise_id: 1.into(),
                    exercise_name: Name::new("Bench Press").unwrap(),
                    sets: vec![
                        set(60.0, 10, RPE::SEVEN),
                        set(60.0, 9, RPE::EIGHT),
                        set(60.0, 8, RPE::NINE),
                    ],
                },
                ExerciseResult {
                    exercise_id: 2.into(),
                    exercise_name: Name::new("Overhead Press").unwrap(),
                    sets: vec![set(40.0, 12, RPE::EIGHT)],
                },
                ExerciseResult {
                    exercise_id: 3.into(),
                    exercise_name: Name::new("Lateral Raises").unwrap(),
                    sets: vec![],
                },
            ],
        });

    #[test]
    fn test_workout_session_result() {
        assert_eq!(
            WORKOUT.result(2.into()).map(|r| r.exercise_name.to_string()),
            Some("Overhead Press".to_string())
        );
        assert_eq!(WORKOUT.result(4.into()), None);
    }

    #[test]
    fn test_workout_session_volume() {
        assert_eq!(WORKOUT.volume(), 60.0 * 27.0 + 40.0 * 12.0);
    }

    #[test]
    fn test_workout_session_num_sets() {
        assert_eq!(WORKOUT.num_sets(), 4);
    }

    #[test]
    fn test_workout_session_avg_rpe() {
        assert_eq!(WORKOUT.avg_rpe(), Some(8.0));

        let mut empty = WORKOUT.clone();
        empty.exercises.clear();
        assert_eq!(empty.avg_rpe(), None);
    }

    #[test]
    fn test_workout_session_id_nil() {
        assert!(WorkoutSessionID::nil().is_nil());
        assert_eq!(WorkoutSessionID::nil(), WorkoutSessionID::default());
    }
}
