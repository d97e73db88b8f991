use login_probe::common::init_tracing;
use login_probe::{run_driver, LoginProbe, ProbeConfig};
use tracing::error;

// Always exits 0: the outcome of each case is only reported on stdout.
fn main() {
    init_tracing();

    let probe = LoginProbe::new(ProbeConfig::default());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run_driver(&probe, &mut out) {
        error!("could not write probe report: {}", e);
    }
}
