//! Blocking HTTP transport
//!
//! One GET per command set: the directives become the query string of the
//! `fmresultset.xml` endpoint, credentials travel as HTTP basic auth. There
//! is no retry; a failed or slow request fails the command. Requests go
//! straight to the configured host; proxy environment variables are ignored.

use std::time::Instant;

use fmxml_core::{
    log_op_end, log_op_error, log_op_start, CommandSet, DirectiveKey, RawResult, Transport,
    TransportError,
};
use fmxml_core_types::Sensitive;
use reqwest::blocking::Client;
use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::config::HostConnection;
use crate::xml::parse_fmresultset;

const OP_REQUEST: &str = "http_request";

/// Render a command set as a query string, in command-set order
///
/// Keys and values are form-encoded; markers are rendered as the bare key.
///
/// ```
/// use fmxml_core::{CommandSet, DirectiveKey, DirectiveValue};
/// use fmxml_http::encode_query;
///
/// let mut set = CommandSet::new();
/// set.insert(DirectiveKey::Lay, "web people");
/// set.insert(DirectiveKey::FindAll, DirectiveValue::Marker);
/// assert_eq!(encode_query(&set), "-lay=web+people&-findall");
/// ```
pub fn encode_query(commands: &CommandSet) -> String {
    commands
        .iter()
        .map(|(key, value)| {
            let key: String = byte_serialize(key.as_str().as_bytes()).collect();
            match value.as_wire() {
                Some(value) => {
                    let value: String = byte_serialize(value.as_bytes()).collect();
                    format!("{}={}", key, value)
                }
                None => key,
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// `Transport` over the XML web publishing engine
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    username: String,
    password: Sensitive<String>,
}

impl HttpTransport {
    /// Build a transport for a validated connection
    ///
    /// # Errors
    ///
    /// `TransportError::Configuration` if the connection is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(connection: &HostConnection) -> Result<Self, TransportError> {
        connection.validate().map_err(configuration)?;
        let endpoint = connection.endpoint().map_err(configuration)?;

        let client = Client::builder()
            .timeout(connection.timeout)
            .danger_accept_invalid_certs(!connection.ssl_verify_peer)
            .no_proxy()
            .use_rustls_tls()
            .build()
            .map_err(|e| configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            username: connection.username.clone(),
            password: connection.password.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The full request URL for a command set
    pub fn request_url(&self, commands: &CommandSet) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&encode_query(commands)));
        url
    }

    fn send(&self, commands: &CommandSet) -> Result<RawResult, TransportError> {
        let response = self
            .client
            .get(self.request_url(commands))
            .basic_auth(&self.username, Some(self.password.expose()))
            .send()
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(http_error)?;
        parse_fmresultset(&body)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, commands: &CommandSet) -> Result<RawResult, TransportError> {
        let start = Instant::now();
        let layout = commands
            .get(&DirectiveKey::Lay)
            .and_then(|v| v.as_wire())
            .map(|v| v.into_owned())
            .unwrap_or_default();

        log_op_start!(
            OP_REQUEST,
            host = self.endpoint.host_str().unwrap_or_default(),
            layout = layout.as_str(),
            directive_count = commands.len()
        );

        let outcome = self.send(commands);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &outcome {
            Ok(result) => {
                log_op_end!(
                    OP_REQUEST,
                    duration_ms = duration_ms,
                    remote_code = result.error_code
                );
            }
            Err(err) => {
                log_op_error!(OP_REQUEST, err, duration_ms = duration_ms);
            }
        }
        outcome
    }
}

fn configuration(err: impl std::fmt::Display) -> TransportError {
    TransportError::Configuration {
        message: err.to_string(),
    }
}

// The URL carries field values, so it is stripped from the message
fn http_error(err: reqwest::Error) -> TransportError {
    TransportError::Http {
        message: err.without_url().to_string(),
    }
}
