use chrono::{DateTime, Duration, Utc};
use log::debug;

use liftlog_domain::{
    DEFAULT_WEIGHT, ExerciseID, ExerciseResult, Name, RPE, RepRange, Reps, RestTime, Routine,
    RoutineID, SetField, SetID, SetRecord, Settings, Suggestion, UserID, Weight, WorkoutSession,
    WorkoutSessionID, last_performance, suggest_progression,
};

use crate::timer::{RestTimer, TimerEvent};

/// A workout in progress.
///
/// Every exercise of the routine gets its target number of set slots, seeded with the weight
/// suggested by the progression engine. Slots whose reps are still zero when the workout is
/// finished are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct OngoingWorkout {
    pub routine_id: RoutineID,
    pub routine_name: Name,
    pub start_time: DateTime<Utc>,
    pub exercises: Vec<ActiveExercise>,
    rest_timer: RestTimer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveExercise {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub target_reps: RepRange,
    pub rest_time: RestTime,
    /// Suggestion derived from the last performance, `None` if there is none.
    pub suggestion: Option<Suggestion>,
    pub sets: Vec<ActiveSet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSet {
    pub record: SetRecord,
    pub completed: bool,
}

impl OngoingWorkout {
    #[must_use]
    pub fn start(
        routine: &Routine,
        history: &[WorkoutSession],
        settings: &Settings,
        now: DateTime<Utc>,
    ) -> Self {
        let exercises = routine
            .exercises
            .iter()
            .map(|exercise| {
                let (weight, suggestion) = match last_performance(history, routine.id, exercise.id)
                    .filter(|result| !result.sets.is_empty())
                {
                    Some(result) => {
                        let suggestion = suggest_progression(
                            &result.sets,
                            exercise.target_reps,
                            settings.progression_percentage,
                            settings.plate_increment,
                        );
                        let reference_weight =
                            result.sets.first().map(|s| s.weight).unwrap_or_default();
                        (
                            Weight::new(suggestion.next_weight).unwrap_or(reference_weight),
                            Some(suggestion),
                        )
                    }
                    None => (Weight::new(DEFAULT_WEIGHT).unwrap_or_default(), None),
                };
                ActiveExercise {
                    exercise_id: exercise.id,
                    name: exercise.name.clone(),
                    target_reps: exercise.target_reps,
                    rest_time: exercise.rest_time,
                    suggestion,
                    sets: (0..u32::from(exercise.target_sets))
                        .map(|_| ActiveSet {
                            record: SetRecord {
                                id: SetID::random(),
                                weight,
                                reps: Reps::default(),
                                rpe: RPE::EIGHT,
                                rest_time: exercise.rest_time,
                                warmup: false,
                            },
                            completed: false,
                        })
                        .collect(),
                }
            })
            .collect();

        debug!("started workout of routine \"{}\"", routine.name);

        Self {
            routine_id: routine.id,
            routine_name: routine.name.clone(),
            start_time: now,
            exercises,
            rest_timer: RestTimer::default(),
        }
    }

    pub fn update_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        field: SetField,
    ) -> Result<(), OngoingWorkoutError> {
        self.set_mut(exercise_idx, set_idx)?.record.apply(field);
        Ok(())
    }

    /// Flip the completion of a set.
    ///
    /// Completing a set starts the rest timer with the rest time of the exercise. Returns whether
    /// the set is completed afterwards.
    pub fn toggle_set_complete(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        now: DateTime<Utc>,
    ) -> Result<bool, OngoingWorkoutError> {
        let rest_time = self
            .exercises
            .get(exercise_idx)
            .ok_or(OngoingWorkoutError::ExerciseNotFound(exercise_idx))?
            .rest_time;
        let set = self.set_mut(exercise_idx, set_idx)?;
        set.completed = !set.completed;
        let completed = set.completed;
        if completed {
            self.rest_timer.start(rest_time, now);
        }
        Ok(completed)
    }

    #[must_use]
    pub fn rest_timer(&self) -> &RestTimer {
        &self.rest_timer
    }

    pub fn add_rest_time(&mut self, seconds: u32) {
        self.rest_timer.add_time(seconds);
    }

    pub fn stop_rest_timer(&mut self) {
        self.rest_timer.cancel();
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        self.rest_timer.tick(now)
    }

    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.start_time).max(Duration::zero())
    }

    /// Turn the workout into a session of the history.
    #[must_use]
    pub fn finish(self, user_id: UserID, now: DateTime<Utc>) -> WorkoutSession {
        let duration = u32::try_from(self.elapsed(now).num_minutes()).unwrap_or(u32::MAX);
        WorkoutSession {
            id: WorkoutSessionID::random(),
            user_id,
            routine_id: self.routine_id,
            routine_name: self.routine_name,
            date: now,
            duration,
            exercises: self
                .exercises
                .into_iter()
                .map(|exercise| ExerciseResult {
                    exercise_id: exercise.exercise_id,
                    exercise_name: exercise.name,
                    sets: exercise
                        .sets
                        .into_iter()
                        .map(|set| set.record)
                        .filter(|record| !record.reps.is_zero())
                        .collect(),
                })
                .collect(),
        }
    }

    fn set_mut(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
    ) -> Result<&mut ActiveSet, OngoingWorkoutError> {
        self.exercises
            .get_mut(exercise_idx)
            .ok_or(OngoingWorkoutError::ExerciseNotFound(exercise_idx))?
            .sets
            .get_mut(set_idx)
            .ok_or(OngoingWorkoutError::SetNotFound(exercise_idx, set_idx))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OngoingWorkoutError {
    #[error("exercise {0} not found")]
    ExerciseNotFound(usize),
    #[error("set {1} of exercise {0} not found")]
    SetNotFound(usize, usize),
}
