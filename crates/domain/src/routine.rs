use std::collections::BTreeSet;

use chrono::Weekday;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Exercise, ExerciseField, ExerciseID, Name, ProgressionModel, ReadError, RepRange, RestTime,
    SetCount, WriteError,
};

pub trait RoutineRepository {
    fn read_routines(&self) -> Result<Vec<Routine>, ReadError>;
    fn write_routines(&self, routines: &[Routine]) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub assigned_days: AssignedDays,
}

impl Routine {
    pub fn new(
        id: RoutineID,
        name: Name,
        description: String,
        exercises: Vec<Exercise>,
        assigned_days: AssignedDays,
    ) -> Result<Self, RoutineError> {
        let routine = Self {
            id,
            name,
            description,
            exercises,
            assigned_days,
        };
        routine.validate()?;
        Ok(routine)
    }

    /// Check the invariants that cannot be expressed by the field types alone.
    pub fn validate(&self) -> Result<(), RoutineError> {
        let mut ids = BTreeSet::new();
        for exercise in &self.exercises {
            if !ids.insert(exercise.id) {
                return Err(RoutineError::DuplicateExercise(exercise.name.to_string()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(e.target_sets)).sum()
    }

    pub fn add_exercise(&mut self, name: Name) -> ExerciseID {
        let exercise = Exercise::with_defaults(name);
        let id = exercise.id;
        self.exercises.push(exercise);
        id
    }

    pub fn remove_exercise(&mut self, index: usize) -> Option<Exercise> {
        if index < self.exercises.len() {
            Some(self.exercises.remove(index))
        } else {
            None
        }
    }

    pub fn update_exercise(
        &mut self,
        index: usize,
        field: ExerciseField,
    ) -> Result<(), RoutineError> {
        self.exercises
            .get_mut(index)
            .ok_or(RoutineError::ExerciseNotFound(index))?
            .apply(field);
        Ok(())
    }

    /// The routines a new installation starts with.
    #[must_use]
    pub fn samples() -> Vec<Routine> {
        fn exercise(id: u128, name: &str, sets: u32, reps: (u32, u32), rest: u32) -> Exercise {
            Exercise {
                id: id.into(),
                name: Name(name.to_string()),
                target_sets: SetCount(sets),
                target_reps: RepRange {
                    min: reps.0,
                    max: reps.1,
                },
                rest_time: RestTime(rest),
                progression_model: ProgressionModel::Linear,
            }
        }

        vec![
            Routine {
                id: 1.into(),
                name: Name("Push Day A".to_string()),
                description: String::from("Chest, Shoulders, and Triceps focus"),
                exercises: vec![
                    exercise(1, "Bench Press", 3, (8, 12), 120),
                    exercise(2, "Overhead Press", 3, (10, 12), 90),
                    exercise(3, "Lateral Raises", 4, (12, 15), 60),
                ],
                assigned_days: AssignedDays::from([Weekday::Mon, Weekday::Thu]),
            },
            Routine {
                id: 2.into(),
                name: Name("Pull Day A".to_string()),
                description: String::from("Back and Biceps focus"),
                exercises: vec![
                    exercise(4, "Barbell Rows", 3, (8, 10), 120),
                    exercise(5, "Pull Ups", 3, (8, 12), 90),
                    exercise(6, "Barbell Curls", 3, (10, 12), 60),
                ],
                assigned_days: AssignedDays::from([Weekday::Tue, Weekday::Fri]),
            },
        ]
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RoutineError {
    #[error("Exercise \"{0}\" is contained more than once")]
    DuplicateExercise(String),
    #[error("No exercise at position {0}")]
    ExerciseNotFound(usize),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(Uuid);

impl RoutineID {
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

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Weekdays on which a routine is scheduled.
///
/// Days are indexed from Sunday (0) to Saturday (6), like the persisted representation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssignedDays(u8);

impl AssignedDays {
    pub fn from_indices(indices: &[u8]) -> Result<Self, AssignedDaysError> {
        let mut days = Self::default();
        for &index in indices {
            if index > 6 {
                return Err(AssignedDaysError::OutOfRange(index));
            }
            days.0 |= 1 << index;
        }
        Ok(days)
    }

    #[must_use]
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| self.0 & (1 << i) != 0).collect()
    }

    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    pub fn toggle(&mut self, day: Weekday) {
        self.0 ^= Self::bit(day);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(day: Weekday) -> u8 {
        1 << day.num_days_from_sunday()
    }
}

impl<const N: usize> From<[Weekday; N]> for AssignedDays {
    fn from(value: [Weekday; N]) -> Self {
        let mut days = Self::default();
        for day in value {
            days.insert(day);
        }
        days
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AssignedDaysError {
    #[error("Day index must be in the range 0 to 6 ({0} > 6)")]
    OutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    static ROUTINE: std::sync::LazyLock<Routine> = std::sync::LazyLock::new(|| Routine {
        id: 1.into(),
        name: Name::new("A").unwrap(),
        description: String::from("B"),
        exercises: vec![
            Exercise {
                id: 1.into(),
                name: Name::new("Squat").unwrap(),
                target_sets: SetCount::new(5).unwrap(),
                target_reps: RepRange::new(3, 5).unwrap(),
                rest_time: RestTime::new(180).unwrap(),
                progression_model: ProgressionModel::Linear,
            },
            Exercise {
                id: 2.into(),
                name: Name::new("Leg Curl").unwrap(),
                target_sets: SetCount::new(3).unwrap(),
                target_reps: RepRange::new(10, 15).unwrap(),
                rest_time: RestTime::new(60).unwrap(),
                progression_model: ProgressionModel::Undulating,
            },
        ],
        assigned_days: AssignedDays::from([Weekday::Wed]),
    });

    #[test]
    fn test_routine_new() {
        assert_eq!(
            Routine::new(
                ROUTINE.id,
                ROUTINE.name.clone(),
                ROUTINE.description.clone(),
                ROUTINE.exercises.clone(),
                ROUTINE.assigned_days,
            ),
            Ok(ROUTINE.clone())
        );
    }

    #[test]
    fn test_routine_new_duplicate_exercise() {
        assert_eq!(
            Routine::new(
                ROUTINE.id,
                ROUTINE.name.clone(),
                ROUTINE.description.clone(),
                vec![ROUTINE.exercises[0].clone(), ROUTINE.exercises[0].clone()],
                ROUTINE.assigned_days,
            ),
            Err(RoutineError::DuplicateExercise("Squat".to_string()))
        );
    }

    #[test]
    fn test_routine_num_sets() {
        assert_eq!(ROUTINE.num_sets(), 8);
    }

    #[test]
    fn test_routine_exercise() {
        assert_eq!(
            ROUTINE.exercise(2.into()).map(|e| e.name.to_string()),
            Some("Leg Curl".to_string())
        );
        assert_eq!(ROUTINE.exercise(3.into()), None);
    }

    #[test]
    fn test_routine_add_exercise() {
        let mut routine = ROUTINE.clone();

        let id = routine.add_exercise(Name::new("Calf Raise").unwrap());

        assert_eq!(routine.exercises.len(), 3);
        assert_eq!(routine.exercises[2].id, id);
        assert_eq!(routine.exercises[2].name, Name::new("Calf Raise").unwrap());
        assert_eq!(routine.validate(), Ok(()));
    }

    #[test]
    fn test_routine_remove_exercise() {
        let mut routine = ROUTINE.clone();

        assert_eq!(routine.remove_exercise(2), None);
        assert_eq!(routine.remove_exercise(0), Some(ROUTINE.exercises[0].clone()));
        assert_eq!(routine.exercises, vec![ROUTINE.exercises[1].clone()]);
    }

    #[test]
    fn test_routine_update_exercise() {
        let mut routine = ROUTINE.clone();

        assert_eq!(
            routine.update_exercise(1, ExerciseField::TargetSets(SetCount::new(4).unwrap())),
            Ok(())
        );
        assert_eq!(routine.exercises[1].target_sets, SetCount::new(4).unwrap());
        assert_eq!(
            routine.update_exercise(2, ExerciseField::TargetSets(SetCount::new(4).unwrap())),
            Err(RoutineError::ExerciseNotFound(2))
        );
    }

    #[test]
    fn test_routine_samples() {
        let samples = Routine::samples();

        assert_eq!(samples.len(), 2);
        for routine in &samples {
            assert_eq!(Name::new(&routine.name.to_string()), Ok(routine.name.clone()));
            assert_eq!(routine.validate(), Ok(()));
            for exercise in &routine.exercises {
                assert_eq!(
                    RepRange::try_from(exercise.target_reps.to_string().as_str()),
                    Ok(exercise.target_reps)
                );
            }
        }
        assert_eq!(samples[0].assigned_days.indices(), vec![1, 4]);
        assert_eq!(samples[1].assigned_days.indices(), vec![2, 5]);
    }

    #[rstest]
    #[case(&[], Ok(vec![]))]
    #[case(&[0, 6], Ok(vec![0, 6]))]
    #[case(&[4, 1, 4], Ok(vec![1, 4]))]
    #[case(&[7], Err(AssignedDaysError::OutOfRange(7)))]
    fn test_assigned_days_from_indices(
        #[case] indices: &[u8],
        #[case] expected: Result<Vec<u8>, AssignedDaysError>,
    ) {
        assert_eq!(
            AssignedDays::from_indices(indices).map(|days| days.indices()),
            expected
        );
    }

    #[test]
    fn test_assigned_days_contains() {
        let days = AssignedDays::from_indices(&[0, 3]).unwrap();

        assert!(days.contains(Weekday::Sun));
        assert!(days.contains(Weekday::Wed));
        assert!(!days.contains(Weekday::Sat));
    }

    #[test]
    fn test_assigned_days_toggle() {
        let mut days = AssignedDays::default();
        assert!(days.is_empty());

        days.toggle(Weekday::Fri);
        assert!(days.contains(Weekday::Fri));

        days.toggle(Weekday::Fri);
        assert!(days.is_empty());

        days.insert(Weekday::Mon);
        days.insert(Weekday::Mon);
        assert_eq!(days.indices(), vec![1]);

        days.remove(Weekday::Mon);
        assert!(days.is_empty());
    }

    #[test]
    fn test_routine_id_nil() {
        assert!(RoutineID::nil().is_nil());
        assert_eq!(RoutineID::nil(), RoutineID::default());
    }
}
