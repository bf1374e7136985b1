//! Shared HTTP agent and response-body reading for the prediction service.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// One agent for every request, so a hung service always ends in a timeout.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .user_agent(concat!("fwicast/", env!("CARGO_PKG_VERSION")))
            .build()
    })
}

/// Join a base URL and an endpoint path without doubling slashes.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum BodyError {
    #[error("Response body exceeds {limit} bytes")]
    TooLarge { limit: usize },
    #[error("Failed to read response body: {0}")]
    Io(#[from] io::Error),
    #[error("Response body is not UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Read a whole response body as text, refusing anything over `limit` bytes.
///
/// A declared `Content-Length` over the limit fails before any read.
pub(crate) fn read_body(response: ureq::Response, limit: usize) -> Result<String, BodyError> {
    let declared = response
        .header("Content-Length")
        .and_then(|value| value.trim().parse::<usize>().ok());
    if declared.is_some_and(|length| length > limit) {
        return Err(BodyError::TooLarge { limit });
    }
    let mut bytes = Vec::with_capacity(declared.unwrap_or(0));
    response
        .into_reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut bytes)?;
    if bytes.len() > limit {
        return Err(BodyError::TooLarge { limit });
    }
    Ok(String::from_utf8(bytes)?)
}
