#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod name;
mod progression;
mod recommendation;
mod routine;
mod set;
pub mod statistics;
mod user;
mod workout;

pub use error::{ReadError, StorageError, ValidationError, WriteError};
pub use exercise::{
    Exercise, ExerciseField, ExerciseID, ProgressionModel, RepRange, RepRangeError, SetCount,
    SetCountError,
};
pub use name::{Name, NameError};
pub use progression::{
    DEFAULT_WEIGHT, Decision, Prediction, Rationale, Suggestion, compute_volume,
    estimate_one_rep_max, last_performance, predict_next_session, round_to_increment,
    suggest_progression,
};
pub use recommendation::{last_performed, recommend_routine};
pub use routine::{
    AssignedDays, AssignedDaysError, Routine, RoutineError, RoutineID, RoutineRepository,
};
pub use set::{
    RPE, RPEError, RestTime, RestTimeError, Reps, RepsError, SetField, SetID, SetRecord, Weight,
    WeightError,
};
pub use user::{
    Percentage, PercentageError, PlateIncrement, PlateIncrementError, Settings, TrainingGoal,
    UserID, UserProfile, UserRepository,
};
pub use workout::{ExerciseResult, WorkoutRepository, WorkoutSession, WorkoutSessionID};
