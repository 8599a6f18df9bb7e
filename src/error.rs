use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Configuration errors detected before a comparison runs.
///
/// Missing fields and malformed paths are never errors; they show up as
/// `exists: false` observations instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// More inputs were supplied than there are platform names to label them.
    #[error("{inputs} inputs supplied but only {platforms} platform names are configured")]
    TooManyInputs {
        /// Number of input records.
        inputs: usize,
        /// Number of configured platform names.
        platforms: usize,
    },

    /// The same platform name appears twice in the configuration.
    #[error("platform name {0:?} is configured more than once")]
    DuplicatePlatform(String),

    /// A configured platform name is empty or only whitespace.
    #[error("platform name at position {index} is empty")]
    EmptyPlatform {
        /// Zero-based position in the configured list.
        index: usize,
    },
}
