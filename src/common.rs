use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;

pub const DEFAULT_LOGIN_URL: &str = "http://localhost:5000/api/auth/login";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The pair sent as the login request body. Nothing is validated before sending.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of a single probe. Exactly one variant is produced per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// 2xx response.
    Success { status_code: u16, body: String },
    /// Any other HTTP status.
    Failure { status_code: u16, body: String },
    /// No usable HTTP response (connect, DNS, timeout, undecodable body).
    Error { message: String },
}

impl ProbeResult {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeResult::Success { status_code, .. } | ProbeResult::Failure { status_code, .. } => {
                Some(*status_code)
            }
            ProbeResult::Error { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success { .. })
    }
}

impl Display for ProbeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeResult::Success { status_code, body } => {
                write!(f, "Status: {}\nResponse: {}", status_code, body)
            }
            ProbeResult::Failure { status_code, body } => {
                write!(f, "Status: {}\nError Response: {}", status_code, body)
            }
            ProbeResult::Error { message } => write!(f, "Error: {}", message),
        }
    }
}

/// Rejection body of the login endpoint. Only read for logging.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // stdout belongs to the probe report
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_probe=warn,verify_login=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
