//! Transport contract
//!
//! The coordinator hands a finished command set to a `Transport`, which
//! performs the single remote round trip and decodes the server's answer
//! into a `RawResult`. The HTTP/XML implementation lives in `fmxml-http`;
//! tests use stubs or mocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command_set::CommandSet;
use crate::errors::FmErrorKind;

/// Error code the server reports for a successful command
pub const ERROR_CODE_OK: i64 = 0;

/// Error code the server reports when no records match the request
pub const ERROR_CODE_NO_RECORDS: i64 = 401;

/// Executes one command set against the remote server
pub trait Transport {
    /// Send the command set and decode the response
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when no result could be obtained at all
    /// (connection failure, non-success HTTP status, undecodable body).
    /// Remote FileMaker errors are not transport errors; they come back as a
    /// `RawResult` with a non-zero `error_code`.
    fn execute(&self, commands: &CommandSet) -> Result<RawResult, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, commands: &CommandSet) -> Result<RawResult, TransportError> {
        (**self).execute(commands)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, commands: &CommandSet) -> Result<RawResult, TransportError> {
        (**self).execute(commands)
    }
}

/// Failure to obtain any result from the server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// The server answered with a non-success HTTP status
    #[error("Server responded with HTTP status {status}")]
    Status { status: u16 },

    /// The response body is not a well-formed result document
    #[error("Could not decode server response: {message}")]
    Parse { message: String },

    /// The transport itself is misconfigured
    #[error("Transport misconfigured: {message}")]
    Configuration { message: String },
}

impl TransportError {
    /// Every transport failure surfaces to callers as `NoResultReturned`
    pub fn kind(&self) -> FmErrorKind {
        FmErrorKind::NoResultReturned
    }

    /// Stable code naming the transport failure
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::Http { .. } => "ERR_TRANSPORT_HTTP",
            TransportError::Status { .. } => "ERR_TRANSPORT_STATUS",
            TransportError::Parse { .. } => "ERR_TRANSPORT_PARSE",
            TransportError::Configuration { .. } => "ERR_TRANSPORT_CONFIGURATION",
        }
    }
}

/// Decoded server response for one command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    pub error_code: i64,
    pub error_message: String,
    /// Number of records in this response
    pub count: Option<u64>,
    /// Number of records the server was asked to return
    pub fetch_size: Option<u64>,
    /// Number of records in the layout's table
    pub total_count: Option<u64>,
    pub records: Vec<Record>,
}

impl RawResult {
    /// A successful result carrying the given records
    pub fn success(records: Vec<Record>) -> Self {
        let count = records.len() as u64;
        Self {
            error_code: ERROR_CODE_OK,
            error_message: "No error".to_string(),
            count: Some(count),
            fetch_size: Some(count),
            total_count: None,
            records,
        }
    }

    /// A result carrying only a remote error code and message
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            error_code: code,
            error_message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_code == ERROR_CODE_OK
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

/// One record of a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Internal record identifier, usable with `-recid`
    pub record_id: Option<i64>,
    /// Modification counter
    pub mod_id: Option<i64>,
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(record_id: i64) -> Self {
        Self {
            record_id: Some(record_id),
            ..Self::default()
        }
    }

    /// Builder-style field setter, mostly for tests and stubs
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
