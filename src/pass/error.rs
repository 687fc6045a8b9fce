use thiserror::Error;

/// A generation request that cannot produce a password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidRequest {
    message: String,
}

impl InvalidRequest {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn no_character_types() -> Self {
        Self::new("at least one character type must be selected")
    }

    pub fn zero_length() -> Self {
        Self::new("password length must be at least 1")
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
