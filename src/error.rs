use crate::status::{Outcome, Status};
use thiserror::Error;

/// Everything that can go wrong before a usage report is evaluated.
/// Every variant maps to the WARNING state; the plugin has no fatal
/// path that Nagios would not understand.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("option \"{0}\" not set or empty")]
    MissingOption(&'static str),

    #[error("invalid value for option \"{0}\"")]
    InvalidOption(&'static str),

    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("face.com error{}", detail.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Api { detail: Option<String> },

    #[error("face.com error: invalid value \"{0}\"")]
    InvalidField(&'static str),
}

impl CheckError {
    pub fn status(&self) -> Status {
        Status::Warning
    }
}

impl From<CheckError> for Outcome {
    fn from(err: CheckError) -> Self {
        Outcome::new(err.status(), err.to_string())
    }
}
