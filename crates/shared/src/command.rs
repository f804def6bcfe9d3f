#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    User(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("data integrity violation: {0}")]
    Integrity(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(value: std::num::TryFromIntError) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! user {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::User(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::User(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! integrity {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Integrity(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Integrity(format!($fmt, $($arg)*)))
    };
}
