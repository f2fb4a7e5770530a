//! Trend series and key figures of the dashboard.
//!
//! The history is expected in the order it is stored, i.e. most recent session first. The
//! series returned by this module are ordered oldest first, as they are plotted.

use chrono::{DateTime, Utc};

use crate::{RPE, WorkoutSession, estimate_one_rep_max};

#[must_use]
pub fn session_volume(session: &WorkoutSession) -> f64 {
    session.volume()
}

/// Volume of the `n` most recent sessions.
#[must_use]
pub fn volume_trend(history: &[WorkoutSession], n: usize) -> Vec<(DateTime<Utc>, f64)> {
    history
        .iter()
        .take(n)
        .rev()
        .map(|s| (s.date, session_volume(s)))
        .collect()
}

/// Best estimated 1RM of an exercise per session.
///
/// Only the `n` most recent sessions are considered. Sessions without the exercise or without
/// any set inside the domain of the estimation are skipped. Exercises are identified by name, so
/// that the trend continues across routines.
#[must_use]
pub fn one_rep_max_trend(
    history: &[WorkoutSession],
    n: usize,
    exercise_name: &str,
) -> Vec<(DateTime<Utc>, f64)> {
    history
        .iter()
        .take(n)
        .rev()
        .filter_map(|session| {
            session
                .exercises
                .iter()
                .filter(|result| result.exercise_name.0 == exercise_name)
                .flat_map(|result| &result.sets)
                .filter_map(|set| estimate_one_rep_max(set.weight, set.reps))
                .reduce(f64::max)
                .map(|one_rep_max| (session.date, one_rep_max))
        })
        .collect()
}

/// Mean RPE over all sets of the history.
#[must_use]
pub fn average_rpe(history: &[WorkoutSession]) -> Option<f64> {
    RPE::avg(
        &history
            .iter()
            .flat_map(|s| &s.exercises)
            .flat_map(|e| e.sets.iter().map(|s| s.rpe))
            .collect::<Vec<_>>(),
    )
}
