use derive_more::Display;
use serde::{Deserialize, Serialize};
use specta::Type;

#[derive(Type, Serialize, Deserialize, Debug, Display)]
pub enum SkError {
    #[display("io error: {_0}")]
    IOError(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("async runtime error: {_0}")]
    AsyncRuntimeError(String),
    #[display("file or directory not found: {_0}")]
    FileOrDirectoryNotFound(String),
    #[display("unexpected error: {_0:?}")]
    Unexpected(Option<String>),
}

impl From<std::io::Error> for SkError {
    fn from(e: std::io::Error) -> Self {
        SkError::IOError(e.to_string())
    }
}

impl From<serde_json::Error> for SkError {
    fn from(e: serde_json::Error) -> Self {
        SkError::ParseError(e.to_string())
    }
}
