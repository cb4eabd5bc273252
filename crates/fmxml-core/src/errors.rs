use thiserror::Error;

use crate::command_set::CommandSet;
use crate::transport::RawResult;

/// Result type alias using FmError
pub type Result<T> = std::result::Result<T, FmError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FmErrorKind {
    // Local validation, raised before any remote interaction
    InvalidArgument,
    MissingScope,

    // Remote outcome classification
    NoResultReturned,
    RecordsNotFound,
    GeneralFailure,
}

impl FmErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FmErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            FmErrorKind::MissingScope => "ERR_MISSING_SCOPE",
            FmErrorKind::NoResultReturned => "ERR_NO_RESULT_RETURNED",
            FmErrorKind::RecordsNotFound => "ERR_RECORDS_NOT_FOUND",
            FmErrorKind::GeneralFailure => "ERR_GENERAL_FAILURE",
        }
    }

    /// True for kinds raised by local validation
    pub fn is_local(&self) -> bool {
        matches!(self, FmErrorKind::InvalidArgument | FmErrorKind::MissingScope)
    }
}

// ========== End Error Facility ==========

/// Every way a directive call or a command execution can fail
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FmError {
    /// A directive call received a missing or malformed value
    #[error("Invalid argument to {op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    /// An operation that primes the command set ran before `set_layout`
    #[error("Layout name is missing: {op} requires a layout to be set first")]
    MissingScope { op: &'static str },

    /// The transport produced no result
    #[error("Error retrieving database result: {reason}")]
    NoResultReturned {
        reason: String,
        command_set: CommandSet,
    },

    /// The server reported that no records match the request (code 401)
    #[error("No records match the request: {command_set}")]
    RecordsNotFound {
        result: Box<RawResult>,
        command_set: CommandSet,
    },

    /// Any other non-zero remote error code
    #[error("An error was thrown: {message} (code {code}). Command set: {command_set}")]
    GeneralFailure {
        code: i64,
        message: String,
        command_set: CommandSet,
    },
}

impl FmError {
    pub(crate) fn invalid_argument(op: &'static str, reason: impl Into<String>) -> Self {
        FmError::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> FmErrorKind {
        match self {
            FmError::InvalidArgument { .. } => FmErrorKind::InvalidArgument,
            FmError::MissingScope { .. } => FmErrorKind::MissingScope,
            FmError::NoResultReturned { .. } => FmErrorKind::NoResultReturned,
            FmError::RecordsNotFound { .. } => FmErrorKind::RecordsNotFound,
            FmError::GeneralFailure { .. } => FmErrorKind::GeneralFailure,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The command set that was sent, for failures after a round trip
    pub fn command_set(&self) -> Option<&CommandSet> {
        match self {
            FmError::NoResultReturned { command_set, .. }
            | FmError::RecordsNotFound { command_set, .. }
            | FmError::GeneralFailure { command_set, .. } => Some(command_set),
            FmError::InvalidArgument { .. } | FmError::MissingScope { .. } => None,
        }
    }

    /// The raw server result, kept for `RecordsNotFound` introspection
    pub fn command_result(&self) -> Option<&RawResult> {
        match self {
            FmError::RecordsNotFound { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }

    /// The remote error code, when the server produced one
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            FmError::RecordsNotFound { result, .. } => Some(result.error_code),
            FmError::GeneralFailure { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_records_not_found(&self) -> bool {
        matches!(self, FmError::RecordsNotFound { .. })
    }
}
