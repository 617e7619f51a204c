use thiserror::Error;

/// Rejected environment values. These never stop the app; the offending
/// setting is logged and its default is used instead.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number between {min} and {max}, got {value:?}", min = slide_motion::MIN_TIME_SCALE, max = slide_motion::MAX_TIME_SCALE)]
    InvalidTimeScale { var: &'static str, value: String },

    #[error("{var} must be one of 1/0, true/false, yes/no, on/off, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} is set but empty")]
    EmptyPath { var: &'static str },
}
