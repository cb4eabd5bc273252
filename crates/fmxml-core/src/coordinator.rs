//! Execution coordinator
//!
//! `FileMaker` pairs a `CommandBuilder` with a `Transport`. Directive calls
//! accumulate on the builder; `execute_command` performs exactly one round
//! trip and classifies the outcome.
//!
//! ## Reset contract
//!
//! The command set is captured and cleared before the transport is called,
//! so whatever the outcome the next request starts from an empty set. The
//! layout is session state and survives.

use std::time::Instant;

use crate::builder::CommandBuilder;
use crate::command_set::CommandSet;
use crate::core_types::RequestId;
use crate::errors::{FmError, Result};
use crate::transport::{RawResult, Transport, TransportError, ERROR_CODE_NO_RECORDS};
use crate::{log_op_end, log_op_error, log_op_start};

const OP_EXECUTE: &str = "execute_command";

/// A database connection: one builder plus one injected transport
///
/// Not meant to be shared between threads; use one instance per logical
/// request or guard the accumulate-then-execute sequence externally.
#[derive(Debug)]
pub struct FileMaker<T> {
    builder: CommandBuilder,
    transport: T,
}

impl<T: Transport> FileMaker<T> {
    /// Create a connection to `database` over `transport`
    pub fn new(transport: T, database: impl Into<String>) -> Self {
        Self {
            builder: CommandBuilder::new(database),
            transport,
        }
    }

    pub fn builder(&self) -> &CommandBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut CommandBuilder {
        &mut self.builder
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_parts(self) -> (CommandBuilder, T) {
        (self.builder, self.transport)
    }

    /// Send the accumulated command set and classify the result
    ///
    /// # Errors
    ///
    /// `NoResultReturned` when the transport fails, `RecordsNotFound` for
    /// remote code 401, `GeneralFailure` for any other non-zero code. The
    /// command set is cleared in every case.
    pub fn execute_command(&mut self) -> Result<RawResult> {
        let request_id = RequestId::new();
        let start = Instant::now();
        let sent = self.builder.take_command_set();

        log_op_start!(
            OP_EXECUTE,
            request_id = %request_id,
            database = self.builder.database(),
            layout = self.builder.layout().unwrap_or_default(),
            directive_count = sent.len()
        );

        let outcome = self.transport.execute(&sent);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match classify(outcome, sent) {
            Ok(result) => {
                log_op_end!(
                    OP_EXECUTE,
                    duration_ms = duration_ms,
                    request_id = %request_id,
                    record_count = result.records.len()
                );
                Ok(result)
            }
            Err(err) => {
                log_op_error!(
                    OP_EXECUTE,
                    err,
                    duration_ms = duration_ms,
                    request_id = %request_id,
                    remote_code = err.remote_code()
                );
                Err(err)
            }
        }
    }
}

/// Map a transport outcome to success or a typed failure
///
/// `sent` is the command set that produced the outcome; failures carry it
/// for diagnosis.
///
/// # Errors
///
/// See `FileMaker::execute_command`.
pub fn classify(
    outcome: std::result::Result<RawResult, TransportError>,
    sent: CommandSet,
) -> Result<RawResult> {
    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            return Err(FmError::NoResultReturned {
                reason: err.to_string(),
                command_set: sent,
            })
        }
    };

    match result.error_code {
        code if code == ERROR_CODE_NO_RECORDS => Err(FmError::RecordsNotFound {
            result: Box::new(result),
            command_set: sent,
        }),
        0 => Ok(result),
        code => Err(FmError::GeneralFailure {
            code,
            message: result.error_message,
            command_set: sent,
        }),
    }
}
