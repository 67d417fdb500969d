use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize, PartialEq, Eq)]
pub enum UserDeskError {
    /// Submit was attempted before any user id was selected
    #[error("User ID is not set")]
    NoSubjectSelected,

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(u32),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Every user id has already been handed out
    #[error("No user id left to assign")]
    IdSpaceExhausted,

    /// Route parameter could not be read as a user id
    #[error("Invalid route parameter: {0}")]
    InvalidRouteParam(String),

    /// Environment configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
