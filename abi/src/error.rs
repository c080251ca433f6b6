use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error")]
    DbError(#[from] mongodb::error::Error),

    #[error("failed to read configuration file")]
    ConfigReadError,

    #[error("failed to parse configuration file")]
    ConfigParseError,

    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("invalid resource id: {0}")]
    InvalidResourceId(String),

    #[error("invalid start or end time for the reservation")]
    InvalidTime,

    #[error("no document found by the given condition")]
    NotFound,
}

// mongodb::error::Error is not PartialEq, so two store errors compare equal by
// variant only.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidUserId(a), Self::InvalidUserId(b)) => a == b,
            (Self::InvalidResourceId(a), Self::InvalidResourceId(b)) => a == b,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}
