#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod ongoing_workout;
mod store;
mod ticker;
mod timer;

pub use ongoing_workout::{ActiveExercise, ActiveSet, OngoingWorkout, OngoingWorkoutError};
pub use store::{Store, StoreError};
pub use ticker::Ticker;
pub use timer::{DEFAULT_EXTENSION, RestTimer, TimerEvent, TimerState};
