use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum Error {
    /// A count was outside its accepted domain (negative node count, zero runs).
    #[error("Invalid argument `{name}`: {value} ({reason}).")]
    InvalidArgument { name: &'static str, value: i64, reason: &'static str },

    /// The requested digest primitive is unavailable.
    #[error("Digest failure: {0}.")]
    DigestFailure(String),
}

impl Error {
    pub fn negative(name: &'static str, value: i64) -> Self {
        return Self::InvalidArgument {
            name,
            value,
            reason: "must not be negative",
        };
    }
}
