use derive_more::{AsRef, Display, Into};

/// Trimmed, non-empty workout name of at most [`Name::MAX_LENGTH`] characters.
#[derive(AsRef, Display, Into, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MAX_LENGTH: usize = 64;

    pub fn new(value: &str) -> Result<Self, NameError> {
        let value = value.trim();
        match value.chars().count() {
            0 => Err(NameError::Empty),
            n if n > Self::MAX_LENGTH => Err(NameError::TooLong(n)),
            _ => Ok(Self(value.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    #[error("Workout name is required")]
    Empty,
    #[error("Workout name is too long ({0} > {max} characters)", max = Name::MAX_LENGTH)]
    TooLong(usize),
}
