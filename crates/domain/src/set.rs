use std::fmt;

use derive_more::{Deref, Display, Into};
use uuid::Uuid;

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(pub(crate) f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::ParseError);
        }

        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(pub(crate) u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Rate of perceived exertion on the integer scale 1 to 10.
#[derive(Debug, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(pub(crate) u8);

impl RPE {
    pub const ONE: RPE = RPE(1);
    pub const TWO: RPE = RPE(2);
    pub const THREE: RPE = RPE(3);
    pub const FOUR: RPE = RPE(4);
    pub const FIVE: RPE = RPE(5);
    pub const SIX: RPE = RPE(6);
    pub const SEVEN: RPE = RPE(7);
    pub const EIGHT: RPE = RPE(8);
    pub const NINE: RPE = RPE(9);
    pub const TEN: RPE = RPE(10);

    pub fn new(value: u8) -> Result<Self, RPEError> {
        if !(1..=10).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn avg(values: &[RPE]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(
                values.iter().map(|rpe| u32::from(rpe.0)).sum::<u32>() as f64
                    / values.len() as f64,
            )
        }
    }
}

impl From<RPE> for f64 {
    fn from(value: RPE) -> Self {
        f64::from(value.0)
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u8>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 1 to 10")]
    OutOfRange,
    #[error("RPE must be an integer")]
    ParseError,
}

/// Rest after a set in seconds.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct RestTime(pub(crate) u32);

impl RestTime {
    pub fn new(value: u32) -> Result<Self, RestTimeError> {
        if !(0..3600).contains(&value) {
            return Err(RestTimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl From<RestTime> for i64 {
    fn from(value: RestTime) -> Self {
        i64::from(value.0)
    }
}

impl TryFrom<&str> for RestTime {
    type Error = RestTimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => RestTime::new(parsed_value),
            Err(_) => Err(RestTimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RestTimeError {
    #[error("Rest time must be in the range 0 to 3599 s")]
    OutOfRange,
    #[error("Rest time must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub id: SetID,
    pub weight: Weight,
    pub reps: Reps,
    pub rpe: RPE,
    pub rest_time: RestTime,
    pub warmup: bool,
}

impl SetRecord {
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.weight) * f64::from(u32::from(self.reps))
    }

    pub fn apply(&mut self, field: SetField) {
        match field {
            SetField::Weight(weight) => self.weight = weight,
            SetField::Reps(reps) => self.reps = reps,
            SetField::Rpe(rpe) => self.rpe = rpe,
            SetField::RestTime(rest_time) => self.rest_time = rest_time,
            SetField::Warmup(warmup) => self.warmup = warmup,
        }
    }
}

/// A single edit of a set while it is still part of an ongoing workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetField {
    Weight(Weight),
    Reps(Reps),
    Rpe(RPE),
    RestTime(RestTime),
    Warmup(bool),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
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

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
