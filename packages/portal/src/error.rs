//! Error types shared by the portal core.

use thiserror::Error;

/// Errors raised by storage helpers and form submissions.
#[derive(Debug, Error)]
pub enum Error {
    /// A stored value could not be parsed.
    #[error("malformed stored value under `{key}`: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to encode configuration: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),
}

/// A form rule that rejected a submission. The display text doubles as the
/// translation key shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields and select a correct answer.")]
    IncompleteQuestion,

    #[error("Exactly one answer must be marked correct.")]
    CorrectAnswerCount,

    #[error("Please fill in all required fields.")]
    IncompleteAnnouncement,

    #[error("Topic name cannot be empty.")]
    EmptyTopicName,

    #[error("Please fill in all exam details.")]
    IncompleteExam,

    #[error("Username cannot be empty.")]
    EmptyUsername,

    #[error("An administrator with this username already exists.")]
    DuplicateAdmin,

    #[error("The root administrator cannot be removed.")]
    RootAdmin,
}

pub type Result<T> = std::result::Result<T, Error>;
