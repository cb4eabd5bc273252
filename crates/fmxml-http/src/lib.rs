//! fmxml HTTP - the XML web publishing transport
//!
//! This crate connects `fmxml-core` to a real server:
//! - `HostConnection`: connection settings from the environment, validated once
//! - `HttpTransport`: one blocking GET per command against `fmresultset.xml`
//! - `parse_fmresultset`: decoding of the `fmresultset` grammar
//! - `error_text`: the server's error codes as readable text

pub mod client;
pub mod codes;
pub mod config;
pub mod xml;

// Re-export commonly used types
pub use client::{encode_query, HttpTransport};
pub use codes::error_text;
pub use config::{ConfigError, HostConnection, Protocol};
pub use xml::parse_fmresultset;
