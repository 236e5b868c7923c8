// errors.rs
use std::error::Error;
use std::fmt;

/// Everything that can stop a seeding run.
///
/// Non-2xx answers from the listings API are not errors; only a request
/// that never got an answer ends up here.
#[derive(Debug)]
pub enum SeederError {
    Io { path: String, message: String },
    JsonParse { path: String, message: String },
    Network(String),
    Config(String),
    Output(String),
    UnexpectedShape(String),
}

pub type SeederResult<T> = Result<T, SeederError>;

impl fmt::Display for SeederError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeederError::Io { path, message } => write!(f, "Cannot read {path}: {message}"),
            SeederError::JsonParse { path, message } => {
                write!(f, "JSON parse error in {path}: {message}")
            }
            SeederError::Network(msg) => write!(f, "Network error: {msg}"),
            SeederError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SeederError::Output(msg) => write!(f, "Output error: {msg}"),
            SeederError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for SeederError {}
