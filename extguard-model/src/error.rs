use thiserror::Error;

use crate::extension::{MAX_LABEL_EXTENSIONS, MAX_NAME_LEN};

/// Why a candidate extension name was rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("extension name cannot be empty")]
    Empty,
    #[error("extension name is limited to {MAX_NAME_LEN} characters")]
    TooLong,
    #[error("only letters and numbers are allowed")]
    InvalidCharacter,
}

/// Everything that can go wrong while editing the blocklist.
///
/// The first three variants are rejected locally and never reach the
/// network; the last two are the two remote failure paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlocklistError {
    // Messages are shown to the user verbatim in toasts.
    #[error("Only letters and numbers are allowed.")]
    InvalidInput,
    #[error("Fixed extensions cannot be added to the custom list.")]
    FixedExtensionConflict,
    #[error("No more than {MAX_LABEL_EXTENSIONS} custom extensions can be added.")]
    CapacityExceeded,
    /// The backend answered with `success: false`; carries its message.
    #[error("{0}")]
    ApiRejected(String),
    /// The request itself failed; carries a user-facing generic message.
    #[error("{0}")]
    TransportFailure(String),
}
