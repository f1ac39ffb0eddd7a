use std::collections::BTreeMap;

use crate::ProfileField;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid profile ({})", field_list(.field_errors))]
pub struct InvalidProfile {
    pub field_errors: BTreeMap<ProfileField, String>,
}

fn field_list(field_errors: &BTreeMap<ProfileField, String>) -> String {
    field_errors
        .keys()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to obtain a response from the recommendation service.
///
/// The display text is the message shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Server error: {message}")]
    Server { status: u16, message: String },
    #[error("Cannot connect to the recommendation service")]
    NoConnection,
    #[error("Request error: {0}")]
    InvalidRequest(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    InvalidProfile(#[from] InvalidProfile),
    #[error("a submission is already in progress")]
    InProgress,
    #[error(transparent)]
    Transport(#[from] TransportError),
}
