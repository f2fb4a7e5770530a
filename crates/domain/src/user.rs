use derive_more::{Deref, Display, Into};
use strum::{EnumIter, EnumString};
use uuid::Uuid;

use crate::{Name, RPE, ReadError, Weight, WriteError};

pub trait UserRepository {
    fn read_profile(&self) -> Result<UserProfile, ReadError>;
    fn write_profile(&self, profile: &UserProfile) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserID,
    pub name: Name,
    pub email: String,
    pub age: u32,
    pub body_weight: Weight,
    /// Body height in cm.
    pub height: u32,
    pub goal: TrainingGoal,
    pub settings: Settings,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: 1.into(),
            name: Name("Alex Johnson".to_string()),
            email: String::from("alex@example.com"),
            age: 28,
            body_weight: Weight(82.5),
            height: 180,
            goal: TrainingGoal::Hypertrophy,
            settings: Settings::default(),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingGoal {
    Strength,
    #[default]
    Hypertrophy,
    FatLoss,
    Maintenance,
}

/// Parameters of the progression engine chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub progression_percentage: Percentage,
    pub plate_increment: PlateIncrement,
    /// Number of sessions below target after which a deload would be due.
    ///
    /// The value is stored and editable, but no suggestion is derived from it yet.
    pub deload_threshold: u32,
    pub min_rpe_threshold: RPE,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            progression_percentage: Percentage(2.5),
            plate_increment: PlateIncrement(1.25),
            deload_threshold: 2,
            min_rpe_threshold: RPE::SEVEN,
        }
    }
}

/// Relative load increase applied after a successful session, e.g. 2.5 for +2.5 %.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Percentage(pub(crate) f64);

impl Percentage {
    pub fn new(value: f64) -> Result<Self, PercentageError> {
        if !value.is_finite() {
            return Err(PercentageError::ParseError);
        }

        if !(0.0..=100.0).contains(&value) {
            return Err(PercentageError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Percentage {
    type Error = PercentageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Percentage::new(parsed_value),
            Err(_) => Err(PercentageError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PercentageError {
    #[error("Percentage must be in the range 0.0 to 100.0")]
    OutOfRange,
    #[error("Percentage must be a decimal")]
    ParseError,
}

/// Smallest load step available with the user's plates, in kg.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct PlateIncrement(pub(crate) f64);

impl PlateIncrement {
    pub fn new(value: f64) -> Result<Self, PlateIncrementError> {
        if !value.is_finite() {
            return Err(PlateIncrementError::ParseError);
        }

        if value <= 0.0 || value > 100.0 {
            return Err(PlateIncrementError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for PlateIncrement {
    type Error = PlateIncrementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => PlateIncrement::new(parsed_value),
            Err(_) => Err(PlateIncrementError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlateIncrementError {
    #[error("Plate increment must be greater than 0.0 and at most 100.0 kg")]
    OutOfRange,
    #[error("Plate increment must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_user_id_nil() {
        assert!(UserID::nil().is_nil());
        assert_eq!(UserID::nil(), UserID::default());
    }

    #[test]
    fn test_user_profile_default() {
        let profile = UserProfile::default();

        assert_eq!(profile.name, Name::new("Alex Johnson").unwrap());
        assert_eq!(profile.body_weight, Weight::new(82.5).unwrap());
        assert_eq!(profile.goal, TrainingGoal::Hypertrophy);
        assert_eq!(
            profile.settings,
            Settings {
                progression_percentage: Percentage::new(2.5).unwrap(),
                plate_increment: PlateIncrement::new(1.25).unwrap(),
                deload_threshold: 2,
                min_rpe_threshold: RPE::SEVEN,
            }
        );
    }

    #[rstest]
    #[case(TrainingGoal::Strength, "STRENGTH")]
    #[case(TrainingGoal::Hypertrophy, "HYPERTROPHY")]
    #[case(TrainingGoal::FatLoss, "FAT_LOSS")]
    #[case(TrainingGoal::Maintenance, "MAINTENANCE")]
    fn test_training_goal_string(#[case] goal: TrainingGoal, #[case] string: &str) {
        assert_eq!(goal.to_string(), string);
        assert_eq!(string.parse::<TrainingGoal>(), Ok(goal));
    }

    #[rstest]
    #[case(0.0, Ok(Percentage(0.0)))]
    #[case(2.5, Ok(Percentage(2.5)))]
    #[case(100.0, Ok(Percentage(100.0)))]
    #[case(-1.0, Err(PercentageError::OutOfRange))]
    #[case(100.5, Err(PercentageError::OutOfRange))]
    #[case(f64::NAN, Err(PercentageError::ParseError))]
    fn test_percentage_new(#[case] value: f64, #[case] expected: Result<Percentage, PercentageError>) {
        assert_eq!(Percentage::new(value), expected);
    }

    #[rstest]
    #[case("1.25", Ok(PlateIncrement(1.25)))]
    #[case("2.5", Ok(PlateIncrement(2.5)))]
    #[case("0", Err(PlateIncrementError::OutOfRange))]
    #[case("-1.25", Err(PlateIncrementError::OutOfRange))]
    #[case("101", Err(PlateIncrementError::OutOfRange))]
    #[case("inf", Err(PlateIncrementError::ParseError))]
    #[case("plates", Err(PlateIncrementError::ParseError))]
    fn test_plate_increment_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<PlateIncrement, PlateIncrementError>,
    ) {
        assert_eq!(PlateIncrement::try_from(value), expected);
    }
}
