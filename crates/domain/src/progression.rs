//! Progression engine.
//!
//! All functions in this module are pure. They derive estimates and suggestions for the next
//! session from the logged history and never modify their inputs.

use std::fmt;

use strum::{EnumIter, EnumString};

use crate::{
    ExerciseID, ExerciseResult, Name, Percentage, PlateIncrement, RPE, RepRange, Reps, Routine,
    RoutineID, SetRecord, UserProfile, Weight, WorkoutSession,
};

/// Load suggested for an exercise without any usable history, in kg.
pub const DEFAULT_WEIGHT: f64 = 20.0;

const MAX_RPE_FOR_INCREASE: f64 = 8.0;

/// Estimate the one-repetition maximum using the Brzycki formula.
///
/// A single repetition is its own maximum and zero repetitions allow no estimate, which is
/// reported as 0. The formula diverges at 37 repetitions, so 36 or more repetitions are outside
/// of its domain and result in `None`.
#[must_use]
pub fn estimate_one_rep_max(weight: Weight, reps: Reps) -> Option<f64> {
    let weight = f64::from(weight);
    match u32::from(reps) {
        0 => Some(0.0),
        1 => Some(weight),
        reps @ 2..=35 => Some(weight * 36.0 / (37.0 - f64::from(reps))),
        _ => None,
    }
}

/// Total volume load (weight × reps) of the given sets, warmup sets included.
#[must_use]
pub fn compute_volume(sets: &[SetRecord]) -> f64 {
    sets.iter().map(SetRecord::volume).sum()
}

/// Round a load to the nearest multiple of the plate increment.
///
/// Ties are rounded away from zero, i.e. up for any load.
#[must_use]
pub fn round_to_increment(weight: f64, increment: PlateIncrement) -> f64 {
    let increment = f64::from(increment);
    (weight / increment).round() * increment
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Increase,
    Maintain,
    /// Reserved. No rule of the engine currently leads to a deload.
    Deload,
}

/// Reason for a suggestion, shown to the user as advice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rationale {
    NoHistory,
    TargetReached {
        avg_reps: f64,
        avg_rpe: f64,
        increase: f64,
    },
    BelowMinimum {
        min_reps: u32,
    },
    Consolidate {
        weight: f64,
    },
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rationale::NoHistory => write!(f, "No previous data found."),
            Rationale::TargetReached {
                avg_reps,
                avg_rpe,
                increase,
            } => write!(
                f,
                "Target reached ({avg_reps:.1} reps on average @ RPE {avg_rpe:.1}). \
                 Add {increase:.2} kg."
            ),
            Rationale::BelowMinimum { min_reps } => write!(
                f,
                "Focus on hitting the minimum rep range ({min_reps}) before increasing load."
            ),
            Rationale::Consolidate { weight } => {
                write!(f, "Stay at {weight} kg and consolidate your strength.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub decision: Decision,
    pub next_weight: f64,
    pub rationale: Rationale,
}

/// Suggest the load for the next session of an exercise from the sets of its last session.
///
/// The weight of the first set is taken as the working weight of the whole session. Sets with
/// different weights (e.g. drop sets) do not influence the reference weight. An increase beyond
/// the largest valid weight turns into a suggestion to stay at the reference weight.
#[must_use]
pub fn suggest_progression(
    last_sets: &[SetRecord],
    target_reps: RepRange,
    progression_percentage: Percentage,
    plate_increment: PlateIncrement,
) -> Suggestion {
    let Some(first_set) = last_sets.first() else {
        return Suggestion {
            decision: Decision::Maintain,
            next_weight: DEFAULT_WEIGHT,
            rationale: Rationale::NoHistory,
        };
    };

    #[allow(clippy::cast_precision_loss)]
    let avg_reps = last_sets
        .iter()
        .map(|s| f64::from(u32::from(s.reps)))
        .sum::<f64>()
        / last_sets.len() as f64;
    let avg_rpe = RPE::avg(&last_sets.iter().map(|s| s.rpe).collect::<Vec<_>>())
        .unwrap_or_default();
    let reference_weight = f64::from(first_set.weight);

    let max_reps = target_reps.max();
    let all_sets_at_max = last_sets.iter().all(|s| u32::from(s.reps) >= max_reps);
    let avg_at_max = avg_reps >= f64::from(max_reps);

    if (all_sets_at_max || avg_at_max) && avg_rpe <= MAX_RPE_FOR_INCREASE {
        let increase = (reference_weight * f64::from(progression_percentage) / 100.0)
            .max(f64::from(plate_increment));
        let next_weight = round_to_increment(reference_weight + increase, plate_increment);
        if Weight::new(next_weight).is_err() {
            return Suggestion {
                decision: Decision::Maintain,
                next_weight: reference_weight,
                rationale: Rationale::Consolidate {
                    weight: reference_weight,
                },
            };
        }
        return Suggestion {
            decision: Decision::Increase,
            next_weight,
            rationale: Rationale::TargetReached {
                avg_reps,
                avg_rpe,
                increase: next_weight - reference_weight,
            },
        };
    }

    if avg_reps < f64::from(target_reps.min()) {
        return Suggestion {
            decision: Decision::Maintain,
            next_weight: reference_weight,
            rationale: Rationale::BelowMinimum {
                min_reps: target_reps.min(),
            },
        };
    }

    Suggestion {
        decision: Decision::Maintain,
        next_weight: reference_weight,
        rationale: Rationale::Consolidate {
            weight: reference_weight,
        },
    }
}

/// Find the most recent result of an exercise performed as part of a routine.
///
/// Sessions are compared by date. Of several sessions with the same date, the one coming first
/// in `history` is taken. A result without any sets is still the most recent one, so an exercise
/// skipped in the last session is treated as having no usable history.
#[must_use]
pub fn last_performance(
    history: &[WorkoutSession],
    routine_id: RoutineID,
    exercise_id: ExerciseID,
) -> Option<&ExerciseResult> {
    let mut latest: Option<(&WorkoutSession, &ExerciseResult)> = None;
    for session in history.iter().filter(|s| s.routine_id == routine_id) {
        let Some(result) = session.result(exercise_id) else {
            continue;
        };
        if latest.is_none_or(|(latest_session, _)| session.date > latest_session.date) {
            latest = Some((session, result));
        }
    }
    latest.map(|(_, result)| result)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub exercise_id: ExerciseID,
    pub name: Name,
    /// Working weight of the last performance, 0 if the exercise was never performed.
    pub last_weight: f64,
    pub predicted_weight: f64,
    pub decision: Decision,
    pub rationale: Rationale,
}

/// Predict the loads of the next session of a routine.
///
/// The result contains one prediction per exercise of the routine, in the order of the routine.
#[must_use]
pub fn predict_next_session(
    routine: &Routine,
    history: &[WorkoutSession],
    user: &UserProfile,
) -> Vec<Prediction> {
    routine
        .exercises
        .iter()
        .map(|exercise| {
            let last_sets = last_performance(history, routine.id, exercise.id)
                .map(|result| result.sets.as_slice())
                .unwrap_or_default();
            let last_weight = last_sets.first().map_or(0.0, |s| f64::from(s.weight));
            let suggestion = suggest_progression(
                last_sets,
                exercise.target_reps,
                user.settings.progression_percentage,
                user.settings.plate_increment,
            );
            Prediction {
                exercise_id: exercise.id,
                name: exercise.name.clone(),
                last_weight,
                predicted_weight: if last_weight == 0.0 {
                    DEFAULT_WEIGHT
                } else {
                    suggestion.next_weight
                },
                decision: suggestion.decision,
                rationale: suggestion.rationale,
            }
        })
        .collect()
}
