use std::fmt;

use derive_more::{Deref, Display, Into};
use strum::{EnumIter, EnumString};
use uuid::Uuid;

use crate::{Name, RestTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub target_sets: SetCount,
    pub target_reps: RepRange,
    pub rest_time: RestTime,
    pub progression_model: ProgressionModel,
}

impl Exercise {
    /// Create an exercise as it is added from the catalog, with the usual hypertrophy targets.
    #[must_use]
    pub fn with_defaults(name: Name) -> Self {
        Self {
            id: ExerciseID::random(),
            name,
            target_sets: SetCount(3),
            target_reps: RepRange { min: 8, max: 12 },
            rest_time: RestTime(90),
            progression_model: ProgressionModel::Linear,
        }
    }

    pub fn apply(&mut self, field: ExerciseField) {
        match field {
            ExerciseField::Name(name) => self.name = name,
            ExerciseField::TargetSets(target_sets) => self.target_sets = target_sets,
            ExerciseField::TargetReps(target_reps) => self.target_reps = target_reps,
            ExerciseField::RestTime(rest_time) => self.rest_time = rest_time,
            ExerciseField::ProgressionModel(model) => self.progression_model = model,
        }
    }
}

/// A single edit of an exercise definition inside the routine editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseField {
    Name(Name),
    TargetSets(SetCount),
    TargetReps(RepRange),
    RestTime(RestTime),
    ProgressionModel(ProgressionModel),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Progression strategy of an exercise.
///
/// Only `Linear` is interpreted by the progression engine. The other models are stored with the
/// routine and shown to the user, but do not change any suggestion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressionModel {
    #[default]
    Linear,
    Undulating,
    RpeBased,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetCount(pub(crate) u32);

impl SetCount {
    pub fn new(value: u32) -> Result<Self, SetCountError> {
        if !(1..=20).contains(&value) {
            return Err(SetCountError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for SetCount {
    type Error = SetCountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => SetCount::new(parsed_value),
            Err(_) => Err(SetCountError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetCountError {
    #[error("Number of sets must be in the range 1 to 20")]
    OutOfRange,
    #[error("Number of sets must be an integer")]
    ParseError,
}

/// Target repetitions of an exercise, written as "min-max" (e.g. "8-12").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub(crate) min: u32,
    pub(crate) max: u32,
}

impl RepRange {
    pub fn new(min: u32, max: u32) -> Result<Self, RepRangeError> {
        if min == 0 {
            return Err(RepRangeError::Zero);
        }

        if max >= 1000 {
            return Err(RepRangeError::OutOfRange);
        }

        if min > max {
            return Err(RepRangeError::Inverted(min, max));
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, reps: u32) -> bool {
        (self.min..=self.max).contains(&reps)
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let Some((min, max)) = value.trim().split_once('-') else {
            return Err(RepRangeError::ParseError);
        };
        match (min.trim().parse::<u32>(), max.trim().parse::<u32>()) {
            (Ok(min), Ok(max)) => RepRange::new(min, max),
            _ => Err(RepRangeError::ParseError),
        }
    }
}

impl std::str::FromStr for RepRange {
    type Err = RepRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepRange::try_from(s)
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Rep range must have the form \"min-max\"")]
    ParseError,
    #[error("Rep range must start at 1 or more")]
    Zero,
    #[error("Rep range must end below 1000")]
    OutOfRange,
    #[error("Rep range minimum must not exceed maximum ({0} > {1})")]
    Inverted(u32, u32),
}
