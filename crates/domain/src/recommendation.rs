use chrono::{DateTime, Utc, Weekday};

use crate::{Routine, RoutineID, WorkoutSession};

/// Date of the most recent session of a routine.
#[must_use]
pub fn last_performed(routine_id: RoutineID, history: &[WorkoutSession]) -> Option<DateTime<Utc>> {
    history
        .iter()
        .filter(|s| s.routine_id == routine_id)
        .map(|s| s.date)
        .max()
}

/// Select the routine to train today.
///
/// A routine assigned to `today` takes precedence, the first one in list order if there are
/// several. Without such a routine the routine not performed for the longest time is selected.
/// Routines never performed are the most overdue. Ties are resolved by list order.
#[must_use]
pub fn recommend_routine<'a>(
    today: Weekday,
    routines: &'a [Routine],
    history: &[WorkoutSession],
) -> Option<&'a Routine> {
    if let Some(routine) = routines.iter().find(|r| r.assigned_days.contains(today)) {
        return Some(routine);
    }

    routines
        .iter()
        .enumerate()
        .min_by_key(|(index, r)| (last_performed(r.id, history), *index))
        .map(|(_, r)| r)
}
