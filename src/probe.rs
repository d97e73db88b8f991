use reqwest::StatusCode;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};

use crate::common::*;
use crate::transport::{HttpTransport, RawResponse, Transport, TransportError};

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub url: String,
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LOGIN_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ProbeConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct LoginProbe<T = HttpTransport> {
    config: ProbeConfig,
    transport: T,
}

impl LoginProbe<HttpTransport> {
    pub fn new(config: ProbeConfig) -> Self {
        let transport = HttpTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl<T: Transport> LoginProbe<T> {
    pub fn with_transport(config: ProbeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// POSTs `{"email", "password"}` to the login endpoint and classifies what comes back.
    /// Every failure ends up in `ProbeResult::Error`; nothing escapes.
    pub fn probe(&self, email: &str, password: &str) -> ProbeResult {
        let credentials = Credentials::new(email, password);

        let payload = match serde_json::to_vec(&credentials) {
            Ok(p) => p,
            Err(e) => {
                warn!(email, "could not encode credentials: {}", e);
                return ProbeResult::Error {
                    message: e.to_string(),
                };
            }
        };

        debug!(url = %self.config.url, email, "sending login request");
        match self.transport.post_json(&self.config.url, payload) {
            Ok(response) => classify(response),
            Err(e) => {
                warn!(url = %self.config.url, "login request failed: {}", e);
                ProbeResult::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

fn classify(response: RawResponse) -> ProbeResult {
    let RawResponse { status, body } = response;

    let body = match String::from_utf8(body) {
        Ok(body) => body,
        Err(e) => {
            warn!(status, "response body is not valid UTF-8");
            return ProbeResult::Error {
                message: TransportError::Body(e.to_string()).to_string(),
            };
        }
    };

    let is_success = StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false);

    if is_success {
        debug!(status, "login accepted");
        ProbeResult::Success {
            status_code: status,
            body,
        }
    } else {
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(reason) => debug!(status, reason = %reason.error, "login rejected"),
            _ => debug!(status, "login rejected"),
        }
        ProbeResult::Failure {
            status_code: status,
            body,
        }
    }
}

/// The fixed two-case check against the login endpoint. Results are written as they
/// arrive and never aggregated.
pub fn run_driver<T: Transport>(probe: &LoginProbe<T>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "--- Test 1: Non-existent ---")?;
    let result = probe.probe("nonexistent@example.com", "pass");
    writeln!(out, "{}", result)?;
    out.flush()?;

    writeln!(out, "\n--- Test 2: Wrong password ---")?;
    let result = probe.probe("neo", "wrongpass");
    writeln!(out, "{}", result)?;
    out.flush()
}
