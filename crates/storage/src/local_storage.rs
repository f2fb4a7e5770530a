use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use gloo_storage::Storage as GlooStorage;
use ::log::debug;
use liftlog_domain as domain;
use liftlog_web_app::log;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

const KEY_ROUTINES: &str = "routines";
const KEY_WORKOUTS: &str = "workouts";
const KEY_PROFILE: &str = "profile";
const KEY_LOG: &str = "log";

/// Key-value store holding one JSON document per key.
pub trait Backend: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, domain::StorageError>;
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), domain::StorageError>;
}

/// Local storage of the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct Browser;

impl Backend for Browser {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, domain::StorageError> {
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(domain::StorageError::Other(err.into())),
        }
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), domain::StorageError> {
        gloo_storage::LocalStorage::set(key, value)
            .map_err(|err| domain::StorageError::Other(err.into()))
    }
}

/// Volatile storage, e.g. for running the application without a browser.
#[derive(Debug, Default)]
pub struct Memory {
    records: Mutex<BTreeMap<String, serde_json::Value>>,
}

impl Backend for Memory {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, domain::StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|_| domain::StorageError::NotAvailable)?;
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), domain::StorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| domain::StorageError::NotAvailable)?;
        records.insert(key.to_string(), value);
        Ok(())
    }
}

/// Persistence of the application state as JSON documents.
///
/// Routines, workouts and the user profile are stored as a whole under separate keys. Absent
/// documents are replaced by the defaults of a new installation. Documents that cannot be
/// converted into valid domain objects are reported as invalid records.
#[derive(Debug, Default)]
pub struct LocalStorage<B = Browser> {
    backend: B,
}

impl<B: Backend> LocalStorage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, domain::StorageError> {
        self.backend
            .get(key)?
            .map(|value| serde_json::from_value(value).map_err(|err| invalid_record(key, &err)))
            .transpose()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), domain::StorageError> {
        let value = serde_json::to_value(value).map_err(|err| invalid_record(key, &err))?;
        self.backend.set(key, value)
    }
}

fn invalid_record(key: &str, reason: &dyn std::error::Error) -> domain::StorageError {
    domain::StorageError::InvalidRecord {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

impl<B: Backend> domain::RoutineRepository for LocalStorage<B> {
    fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        let Some(routines) = self.read::<Vec<Routine>>(KEY_ROUTINES)? else {
            debug!("no routines stored, using sample routines");
            return Ok(domain::Routine::samples());
        };
        Ok(routines
            .into_iter()
            .map(domain::Routine::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| invalid_record(KEY_ROUTINES, &err))?)
    }

    fn write_routines(&self, routines: &[domain::Routine]) -> Result<(), domain::WriteError> {
        Ok(self.write(
            KEY_ROUTINES,
            &routines.iter().map(Routine::from).collect::<Vec<_>>(),
        )?)
    }
}

impl<B: Backend> domain::WorkoutRepository for LocalStorage<B> {
    fn read_workouts(&self) -> Result<Vec<domain::WorkoutSession>, domain::ReadError> {
        Ok(self
            .read::<Vec<WorkoutSession>>(KEY_WORKOUTS)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::WorkoutSession::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| invalid_record(KEY_WORKOUTS, &err))?)
    }

    fn write_workouts(&self, workouts: &[domain::WorkoutSession]) -> Result<(), domain::WriteError> {
        Ok(self.write(
            KEY_WORKOUTS,
            &workouts
                .iter()
                .map(WorkoutSession::from)
                .collect::<Vec<_>>(),
        )?)
    }
}

impl<B: Backend> domain::UserRepository for LocalStorage<B> {
    fn read_profile(&self) -> Result<domain::UserProfile, domain::ReadError> {
        let Some(profile) = self.read::<UserProfile>(KEY_PROFILE)? else {
            debug!("no profile stored, using default profile");
            return Ok(domain::UserProfile::default());
        };
        Ok(domain::UserProfile::try_from(profile)
            .map_err(|err| invalid_record(KEY_PROFILE, &err))?)
    }

    fn write_profile(&self, profile: &domain::UserProfile) -> Result<(), domain::WriteError> {
        Ok(self.write(KEY_PROFILE, &UserProfile::from(profile))?)
    }
}

impl<B: Backend> log::Repository for LocalStorage<B> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.read(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.write(KEY_LOG, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Routine(#[from] domain::RoutineError),
    #[error(transparent)]
    AssignedDays(#[from] domain::AssignedDaysError),
    #[error(transparent)]
    SetCount(#[from] domain::SetCountError),
    #[error(transparent)]
    RepRange(#[from] domain::RepRangeError),
    #[error(transparent)]
    RestTime(#[from] domain::RestTimeError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    RPE(#[from] domain::RPEError),
    #[error(transparent)]
    Percentage(#[from] domain::PercentageError),
    #[error(transparent)]
    PlateIncrement(#[from] domain::PlateIncrementError),
    #[error("unknown variant \"{0}\"")]
    UnknownVariant(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub exercises: Vec<Exercise>,
    pub assigned_days: Vec<u8>,
}

impl From<&domain::Routine> for Routine {
    fn from(value: &domain::Routine) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            assigned_days: value.assigned_days.indices(),
        }
    }
}

impl TryFrom<Routine> for domain::Routine {
    type Error = ConversionError;

    fn try_from(value: Routine) -> Result<Self, Self::Error> {
        Ok(domain::Routine::new(
            value.id.into(),
            domain::Name::new(&value.name)?,
            value.description,
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            domain::AssignedDays::from_indices(&value.assigned_days)?,
        )?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub target_sets: u32,
    pub target_reps: String,
    pub rest_time: u32,
    pub progression_model: String,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            target_sets: u32::from(value.target_sets),
            target_reps: value.target_reps.to_string(),
            rest_time: u32::from(value.rest_time),
            progression_model: value.progression_model.to_string(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ConversionError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            target_sets: domain::SetCount::new(value.target_sets)?,
            target_reps: domain::RepRange::try_from(value.target_reps.as_str())?,
            rest_time: domain::RestTime::new(value.rest_time)?,
            progression_model: value
                .progression_model
                .parse()
                .map_err(|_| ConversionError::UnknownVariant(value.progression_model))?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub routine_id: Uuid,
    pub routine_name: String,
    pub date: DateTime<Utc>,
    pub duration: u32,
    pub exercises: Vec<ExerciseResult>,
}

impl From<&domain::WorkoutSession> for WorkoutSession {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            routine_id: *value.routine_id,
            routine_name: value.routine_name.to_string(),
            date: value.date,
            duration: value.duration,
            exercises: value.exercises.iter().map(ExerciseResult::from).collect(),
        }
    }
}

impl TryFrom<WorkoutSession> for domain::WorkoutSession {
    type Error = ConversionError;

    fn try_from(value: WorkoutSession) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            routine_id: value.routine_id.into(),
            routine_name: domain::Name::new(&value.routine_name)?,
            date: value.date,
            duration: value.duration,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseResult::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseResult {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub sets: Vec<SetRecord>,
}

impl From<&domain::ExerciseResult> for ExerciseResult {
    fn from(value: &domain::ExerciseResult) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            sets: value.sets.iter().map(SetRecord::from).collect(),
        }
    }
}

impl TryFrom<ExerciseResult> for domain::ExerciseResult {
    type Error = ConversionError;

    fn try_from(value: ExerciseResult) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::SetRecord::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub id: Uuid,
    pub weight: f64,
    pub reps: u32,
    pub rpe: u8,
    pub rest_time: u32,
    pub warmup: bool,
}

impl From<&domain::SetRecord> for SetRecord {
    fn from(value: &domain::SetRecord) -> Self {
        Self {
            id: *value.id,
            weight: f64::from(value.weight),
            reps: u32::from(value.reps),
            rpe: u8::from(value.rpe),
            rest_time: u32::from(value.rest_time),
            warmup: value.warmup,
        }
    }
}

impl TryFrom<SetRecord> for domain::SetRecord {
    type Error = ConversionError;

    fn try_from(value: SetRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
            rpe: domain::RPE::new(value.rpe)?,
            rest_time: domain::RestTime::new(value.rest_time)?,
            warmup: value.warmup,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub body_weight: f64,
    pub height: u32,
    pub goal: String,
    pub settings: Settings,
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            email: value.email.clone(),
            age: value.age,
            body_weight: f64::from(value.body_weight),
            height: value.height,
            goal: value.goal.to_string(),
            settings: Settings::from(value.settings),
        }
    }
}

impl TryFrom<UserProfile> for domain::UserProfile {
    type Error = ConversionError;

    fn try_from(value: UserProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            email: value.email,
            age: value.age,
            body_weight: domain::Weight::new(value.body_weight)?,
            height: value.height,
            goal: value
                .goal
                .parse()
                .map_err(|_| ConversionError::UnknownVariant(value.goal))?,
            settings: domain::Settings::try_from(value.settings)?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub progression_percentage: f64,
    pub plate_increment: f64,
    pub deload_threshold: u32,
    pub min_rpe_threshold: u8,
}

impl From<domain::Settings> for Settings {
    fn from(value: domain::Settings) -> Self {
        Self {
            progression_percentage: f64::from(value.progression_percentage),
            plate_increment: f64::from(value.plate_increment),
            deload_threshold: value.deload_threshold,
            min_rpe_threshold: u8::from(value.min_rpe_threshold),
        }
    }
}

impl TryFrom<Settings> for domain::Settings {
    type Error = ConversionError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        Ok(Self {
            progression_percentage: domain::Percentage::new(value.progression_percentage)?,
            plate_increment: domain::PlateIncrement::new(value.plate_increment)?,
            deload_threshold: value.deload_threshold,
            min_rpe_threshold: domain::RPE::new(value.min_rpe_threshold)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use liftlog_domain::{RoutineRepository, UserRepository, WorkoutRepository};
    use liftlog_web_app::log::Repository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{PROFILE, ROUTINE, ROUTINES, WORKOUT, WORKOUTS};

    use super::*;

    fn storage() -> LocalStorage<Memory> {
        LocalStorage::new(Memory::default())
    }

    fn entry(message: &str) -> log::Entry {
        log::Entry {
            time: String::from("Jul 07 06:45:00"),
            level: ::log::Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_routine_try_from() {
        assert_eq!(
            domain::Routine::try_from(Routine::from(&*ROUTINE)),
            Ok(ROUTINE.clone())
        );
    }

    #[test]
    fn test_routine_serde() {
        let obj = Routine::from(&*ROUTINE);
        let serialized = json!(obj);
        let deserialized: Routine = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[test]
    fn test_routine_json() {
        let routine = &domain::Routine::samples()[1];

        assert_eq!(
            json!(Routine::from(routine))["exercises"][0],
            json!({
                "id": "00000000-0000-0000-0000-000000000004",
                "name": "Barbell Rows",
                "target_sets": 3,
                "target_reps": "8-10",
                "rest_time": 120,
                "progression_model": "LINEAR"
            })
        );
        assert_eq!(json!(Routine::from(routine))["assigned_days"], json!([2, 5]));
    }

    #[rstest]
    #[case::duplicate_exercise(
        |r: &mut Routine| r.exercises.push(r.exercises[0].clone()),
        ConversionError::Routine(domain::RoutineError::DuplicateExercise("Squat".to_string()))
    )]
    #[case::empty_name(
        |r: &mut Routine| r.name = String::from("  "),
        ConversionError::Name(domain::NameError::Empty)
    )]
    #[case::invalid_day(
        |r: &mut Routine| r.assigned_days = vec![1, 7],
        ConversionError::AssignedDays(domain::AssignedDaysError::OutOfRange(7))
    )]
    #[case::inverted_rep_range(
        |r: &mut Routine| r.exercises[0].target_reps = String::from("12-8"),
        ConversionError::RepRange(domain::RepRangeError::Inverted(12, 8))
    )]
    #[case::no_sets(
        |r: &mut Routine| r.exercises[0].target_sets = 0,
        ConversionError::SetCount(domain::SetCountError::OutOfRange)
    )]
    #[case::unknown_progression_model(
        |r: &mut Routine| r.exercises[0].progression_model = String::from("PERIODIZED"),
        ConversionError::UnknownVariant(String::from("PERIODIZED"))
    )]
    fn test_routine_try_from_invalid(
        #[case] modify: fn(&mut Routine),
        #[case] expected: ConversionError,
    ) {
        let mut routine = Routine::from(&*ROUTINE);
        modify(&mut routine);
        assert_eq!(domain::Routine::try_from(routine), Err(expected));
    }

    #[test]
    fn test_workout_session_try_from() {
        assert_eq!(
            domain::WorkoutSession::try_from(WorkoutSession::from(&*WORKOUT)),
            Ok(WORKOUT.clone())
        );
    }

    #[test]
    fn test_workout_session_serde() {
        let obj = WorkoutSession::from(&*WORKOUT);
        let serialized = json!(obj);
        assert_eq!(serialized["date"], json!("2026-03-02T18:30:00Z"));
        let deserialized: WorkoutSession = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[rstest]
    #[case::weight(
        |s: &mut SetRecord| s.weight = -2.5,
        ConversionError::Weight(domain::WeightError::OutOfRange)
    )]
    #[case::reps(
        |s: &mut SetRecord| s.reps = 1000,
        ConversionError::Reps(domain::RepsError::OutOfRange)
    )]
    #[case::rpe(
        |s: &mut SetRecord| s.rpe = 11,
        ConversionError::RPE(domain::RPEError::OutOfRange)
    )]
    #[case::rest_time(
        |s: &mut SetRecord| s.rest_time = 3600,
        ConversionError::RestTime(domain::RestTimeError::OutOfRange)
    )]
    fn test_set_record_try_from_invalid(
        #[case] modify: fn(&mut SetRecord),
        #[case] expected: ConversionError,
    ) {
        let mut set = SetRecord::from(&WORKOUT.exercises[0].sets[0]);
        modify(&mut set);
        assert_eq!(domain::SetRecord::try_from(set), Err(expected));
    }

    #[test]
    fn test_user_profile_try_from() {
        assert_eq!(
            domain::UserProfile::try_from(UserProfile::from(&*PROFILE)),
            Ok(PROFILE.clone())
        );
    }

    #[test]
    fn test_user_profile_serde() {
        let obj = UserProfile::from(&domain::UserProfile::default());
        let serialized = json!(obj);
        assert_eq!(
            serialized["settings"],
            json!({
                "progression_percentage": 2.5,
                "plate_increment": 1.25,
                "deload_threshold": 2,
                "min_rpe_threshold": 7
            })
        );
        assert_eq!(serialized["goal"], json!("HYPERTROPHY"));
        let deserialized: UserProfile = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[rstest]
    #[case::percentage(
        |s: &mut Settings| s.progression_percentage = 120.0,
        ConversionError::Percentage(domain::PercentageError::OutOfRange)
    )]
    #[case::plate_increment(
        |s: &mut Settings| s.plate_increment = 0.0,
        ConversionError::PlateIncrement(domain::PlateIncrementError::OutOfRange)
    )]
    #[case::min_rpe_threshold(
        |s: &mut Settings| s.min_rpe_threshold = 0,
        ConversionError::RPE(domain::RPEError::OutOfRange)
    )]
    fn test_settings_try_from_invalid(
        #[case] modify: fn(&mut Settings),
        #[case] expected: ConversionError,
    ) {
        let mut settings = Settings::from(domain::Settings::default());
        modify(&mut settings);
        assert_eq!(domain::Settings::try_from(settings), Err(expected));
    }

    #[test]
    fn test_read_defaults() {
        let storage = storage();

        assert_eq!(storage.read_routines().unwrap(), domain::Routine::samples());
        assert!(storage.read_workouts().unwrap().is_empty());
        assert_eq!(
            storage.read_profile().unwrap(),
            domain::UserProfile::default()
        );
        assert!(storage.read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_write_read_routines() {
        let storage = storage();

        storage.write_routines(&ROUTINES).unwrap();

        assert_eq!(storage.read_routines().unwrap(), *ROUTINES);
    }

    #[test]
    fn test_write_read_empty_routines() {
        let storage = storage();

        storage.write_routines(&[]).unwrap();

        assert!(storage.read_routines().unwrap().is_empty());
    }

    #[test]
    fn test_write_read_workouts() {
        let storage = storage();

        storage.write_workouts(&WORKOUTS).unwrap();

        assert_eq!(storage.read_workouts().unwrap(), *WORKOUTS);
    }

    #[test]
    fn test_write_read_profile() {
        let storage = storage();

        storage.write_profile(&PROFILE).unwrap();

        assert_eq!(storage.read_profile().unwrap(), *PROFILE);
    }

    #[test]
    fn test_read_malformed_record() {
        let storage = storage();
        storage
            .backend
            .set(KEY_ROUTINES, json!({ "name": "Push Day A" }))
            .unwrap();

        assert!(matches!(
            storage.read_routines(),
            Err(domain::ReadError::Storage(domain::StorageError::InvalidRecord { key, .. }))
                if key == KEY_ROUTINES
        ));
    }

    #[test]
    fn test_read_invalid_record() {
        let storage = storage();
        let mut workout = WorkoutSession::from(&*WORKOUT);
        workout.exercises[0].sets[0].rpe = 0;
        storage
            .backend
            .set(KEY_WORKOUTS, json!([workout]))
            .unwrap();

        assert!(matches!(
            storage.read_workouts(),
            Err(domain::ReadError::Storage(domain::StorageError::InvalidRecord { key, reason }))
                if key == KEY_WORKOUTS && reason == "RPE must be in the range 1 to 10"
        ));
    }

    #[test]
    fn test_write_entry() {
        let storage = storage();

        storage.write_entry(entry("first")).unwrap();
        storage.write_entry(entry("second")).unwrap();

        assert_eq!(
            storage.read_entries().unwrap(),
            VecDeque::from([entry("second"), entry("first")])
        );
    }

    #[test]
    fn test_write_entry_truncates() {
        let storage = storage();

        for i in 0..=log::MAX_ENTRIES {
            storage.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = storage.read_entries().unwrap();
        assert_eq!(entries.len(), log::MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&log::MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_log_repository_shared() {
        let repository: Arc<Mutex<dyn log::Repository>> = Arc::new(Mutex::new(storage()));

        repository
            .lock()
            .unwrap()
            .write_entry(entry("loaded 2 routines and 0 workouts"))
            .unwrap();

        assert_eq!(repository.lock().unwrap().read_entries().unwrap().len(), 1);
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        fn reset() {
            gloo_storage::LocalStorage::clear();
        }

        #[wasm_bindgen_test]
        fn test_browser_read_defaults() {
            reset();
            let storage = LocalStorage::new(Browser);

            assert_eq!(storage.read_routines().unwrap(), domain::Routine::samples());
            assert!(storage.read_workouts().unwrap().is_empty());
            assert!(storage.read_entries().unwrap().is_empty());
        }

        #[wasm_bindgen_test]
        fn test_browser_write_read() {
            reset();
            let storage = LocalStorage::new(Browser);

            storage.write_routines(&ROUTINES).unwrap();
            storage.write_workouts(&WORKOUTS).unwrap();
            storage.write_profile(&PROFILE).unwrap();
            storage.write_entry(entry("finished workout")).unwrap();

            assert_eq!(storage.read_routines().unwrap(), *ROUTINES);
            assert_eq!(storage.read_workouts().unwrap(), *WORKOUTS);
            assert_eq!(storage.read_profile().unwrap(), *PROFILE);
            assert_eq!(
                storage.read_entries().unwrap(),
                VecDeque::from([entry("finished workout")])
            );
        }
    }
}
