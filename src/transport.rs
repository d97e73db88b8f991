use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("{0}")]
    Request(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

/// Sends one JSON POST and hands back whatever HTTP response came of it.
/// Non-2xx statuses are still `Ok`; only failures to get a response are errors.
pub trait Transport {
    fn post_json(&self, url: &str, payload: Vec<u8>) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn client(&self) -> Result<Client, TransportError> {
        // blocking client defaults to 30s, None here means really no timeout
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::Client(error_chain(&e)))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, payload: Vec<u8>) -> Result<RawResponse, TransportError> {
        let client = self.client()?;

        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(|e| TransportError::Request(error_chain(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::Body(error_chain(&e)))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Joins an error and all of its sources, e.g.
/// `error sending request: client error (Connect): Connection refused`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        let next = e.to_string();
        if !message.contains(&next) {
            message.push_str(": ");
            message.push_str(&next);
        }
        source = e.source();
    }
    message
}
