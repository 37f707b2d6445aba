use thiserror::Error;

/// Errors produced by chart computation and compatibility scoring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KundaliError {
    #[error("Invalid birth moment: {message}")]
    InvalidBirthMoment { message: String },
    #[error("Could not resolve coordinates for place: {place}")]
    GeocodeUnavailable { place: String },
    #[error("Ephemeris computation failed for {target}: {message}")]
    ComputationUnavailable { target: String, message: String },
    #[error("Unknown {category}: {value:?}{}", note_suffix(.note))]
    UnknownCategory {
        category: &'static str,
        value: String,
        note: Option<String>,
    },
}

fn note_suffix(note: &Option<String>) -> String {
    note.as_ref().map(|n| format!(" ({n})")).unwrap_or_default()
}

impl KundaliError {
    pub(crate) fn invalid_moment(message: impl Into<String>) -> Self {
        Self::InvalidBirthMoment {
            message: message.into(),
        }
    }

    pub(crate) fn unavailable(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ComputationUnavailable {
            target: target.into(),
            message: message.into(),
        }
    }

    pub(crate) fn unknown(category: &'static str, value: &str) -> Self {
        Self::UnknownCategory {
            category,
            value: value.to_string(),
            note: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KundaliError>;
