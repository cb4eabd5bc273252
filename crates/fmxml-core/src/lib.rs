//! fmxml Core - command construction for the FileMaker XML web publishing API
//!
//! This crate turns chained directive calls into one flat, ordered command
//! set and runs it through a transport, including:
//! - The bit-exact directive vocabulary (`-db`, `-lay`, `-find`, ...)
//! - An insertion-ordered `CommandSet` with last-write-wins semantics
//! - `CommandBuilder`, which validates every directive call before it writes
//! - The `FileMaker` execution coordinator and its error classification
//! - A layout-bound `Model` wrapper over the `FileMakerInterface` contract
//!
//! The crate performs no I/O itself; a `Transport` implementation is injected.

pub mod builder;
pub mod command_set;
pub mod contract;
pub mod coordinator;
pub mod directive;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod sort;
pub mod transport;

pub use fmxml_core_types as core_types;

// Re-export commonly used types
pub use builder::CommandBuilder;
pub use command_set::CommandSet;
pub use contract::FileMakerInterface;
pub use coordinator::FileMaker;
pub use directive::{DirectiveKey, DirectiveValue};
pub use errors::{FmError, FmErrorKind, Result};
pub use model::{FileMakerModel, Model};
pub use sort::{SortDirection, SortSpec};
pub use transport::{RawResult, Record, Transport, TransportError};
