use derive_more::{AsRef, Display};

/// Display name of a routine, an exercise or a user.
///
/// Surrounding whitespace is removed and runs of inner whitespace are collapsed, so that
/// "Bench  Press " and "Bench Press" are the same name.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(pub(crate) String);

impl Name {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized.is_empty() {
            return Err(NameError::Empty);
        }

        let len = normalized.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(normalized))
    }

    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        self.0.to_lowercase().contains(&filter.trim().to_lowercase())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
