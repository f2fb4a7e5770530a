use chrono::{DateTime, Utc, Weekday};
use log::{debug, error, info};

use liftlog_domain::{
    Name, Prediction, ReadError, Routine, RoutineError, RoutineID, RoutineRepository,
    UserProfile, UserRepository, ValidationError, WorkoutRepository, WorkoutSession,
    WorkoutSessionID, WriteError, predict_next_session, recommend_routine,
};

use crate::OngoingWorkout;

/// Owner of the application state.
///
/// The store keeps routines, the workout history (most recent first) and the user profile in
/// memory. Every mutation is written through to the repository before it becomes visible, so a
/// failed write leaves the state unchanged.
pub struct Store<R> {
    repository: R,
    routines: Vec<Routine>,
    workouts: Vec<WorkoutSession>,
    profile: UserProfile,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(liftlog_domain::StorageError::NotAvailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Store<R>
where
    R: RoutineRepository + WorkoutRepository + UserRepository,
{
    pub fn load(repository: R) -> Result<Self, StoreError> {
        let routines = log_on_error!(repository.read_routines(), ReadError, "read", "routines")?;
        let workouts = log_on_error!(repository.read_workouts(), ReadError, "read", "workouts")?;
        let profile = log_on_error!(repository.read_profile(), ReadError, "read", "profile")?;
        debug!(
            "loaded {} routines and {} workouts",
            routines.len(),
            workouts.len()
        );
        Ok(Self {
            repository,
            routines,
            workouts,
            profile,
        })
    }

    #[must_use]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    #[must_use]
    pub fn routine(&self, id: RoutineID) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn workouts(&self) -> &[WorkoutSession] {
        &self.workouts
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Sessions whose routine name contains `filter`, ignoring case.
    #[must_use]
    pub fn search_workouts(&self, filter: &str) -> Vec<&WorkoutSession> {
        self.workouts
            .iter()
            .filter(|w| w.routine_name.matches(filter))
            .collect()
    }

    pub fn validate_routine_name(&self, name: &Name, id: RoutineID) -> Result<(), ValidationError> {
        if self.routines.iter().any(|r| r.id != id && r.name == *name) {
            return Err(ValidationError::Conflict("name".to_string()));
        }
        Ok(())
    }

    /// Insert a new routine or replace the routine with the same ID.
    pub fn save_routine(&mut self, routine: Routine) -> Result<(), StoreError> {
        routine.validate()?;
        self.validate_routine_name(&routine.name, routine.id)?;

        let mut routines = self.routines.clone();
        match routines.iter_mut().find(|r| r.id == routine.id) {
            Some(existing) => *existing = routine,
            None => routines.push(routine),
        }
        log_on_error!(
            self.repository.write_routines(&routines),
            WriteError,
            "write",
            "routines"
        )?;
        self.routines = routines;
        Ok(())
    }

    pub fn delete_routine(&mut self, id: RoutineID) -> Result<(), StoreError> {
        let routines = self
            .routines
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if routines.len() == self.routines.len() {
            debug!("routine to delete not found");
            return Ok(());
        }
        log_on_error!(
            self.repository.write_routines(&routines),
            WriteError,
            "write",
            "routines"
        )?;
        self.routines = routines;
        Ok(())
    }

    /// Prepend a session to the history.
    pub fn add_workout(&mut self, workout: WorkoutSession) -> Result<(), StoreError> {
        let mut workouts = Vec::with_capacity(self.workouts.len() + 1);
        workouts.push(workout);
        workouts.extend(self.workouts.iter().cloned());
        log_on_error!(
            self.repository.write_workouts(&workouts),
            WriteError,
            "write",
            "workouts"
        )?;
        self.workouts = workouts;
        Ok(())
    }

    pub fn replace_profile(&mut self, profile: UserProfile) -> Result<(), StoreError> {
        log_on_error!(
            self.repository.write_profile(&profile),
            WriteError,
            "write",
            "profile"
        )?;
        self.profile = profile;
        Ok(())
    }

    #[must_use]
    pub fn recommended_routine(&self, today: Weekday) -> Option<&Routine> {
        recommend_routine(today, &self.routines, &self.workouts)
    }

    #[must_use]
    pub fn predict(&self, routine_id: RoutineID) -> Option<Vec<Prediction>> {
        self.routine(routine_id)
            .map(|routine| predict_next_session(routine, &self.workouts, &self.profile))
    }

    #[must_use]
    pub fn start_workout(&self, routine_id: RoutineID, now: DateTime<Utc>) -> Option<OngoingWorkout> {
        self.routine(routine_id).map(|routine| {
            OngoingWorkout::start(routine, &self.workouts, &self.profile.settings, now)
        })
    }

    /// Record a finished workout in the history.
    pub fn finish_workout(
        &mut self,
        ongoing: OngoingWorkout,
        now: DateTime<Utc>,
    ) -> Result<WorkoutSessionID, StoreError> {
        let session = ongoing.finish(self.profile.id, now);
        let id = session.id;
        info!(
            "finished workout \"{}\" with {} sets",
            session.routine_name,
            session.num_sets()
        );
        self.add_workout(session)?;
        Ok(id)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Routine(#[from] RoutineError),
}
