pub mod common;
pub mod probe;
pub mod transport;

pub use common::{Credentials, ProbeResult, DEFAULT_LOGIN_URL};
pub use probe::{run_driver, LoginProbe, ProbeConfig};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
