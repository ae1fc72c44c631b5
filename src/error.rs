//! Error types for marquee

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the JSON helpers.
///
/// Every variant except [`Error::Json`] carries a message suitable for
/// returning to the client verbatim. The helpers never log; the calling
/// handler picks the status code.
#[derive(Error, Debug)]
pub enum Error {
    #[error("body contains badly-formed JSON (at character {offset})")]
    MalformedJson { offset: usize },

    #[error("body contains badly-formed JSON")]
    TruncatedJson,

    #[error("body contains incorrect JSON type (at character {offset})")]
    MismatchedType { offset: usize },

    #[error("body cannot be empty")]
    EmptyBody,

    #[error("body contains unknown key \"{field}\"")]
    UnknownKey { field: String },

    #[error("body cannot be larger than {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("body can only contain a single json value")]
    MultipleJsonValues,

    #[error("invalid id parameter")]
    InvalidIdParameter,

    /// Decode or encode failure that fits no other variant, passed
    /// through unmodified.
    #[error(transparent)]
    Json(serde_json::Error),
}
