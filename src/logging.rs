use std::env;
use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level for a `-v` count: 0 = warn, 1 = info, 2+ = debug.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install a stderr subscriber. `RUST_LOG`, when set, overrides `verbose`.
///
/// Calling this twice is harmless; the second call leaves the first subscriber in place.
pub fn init(verbose: u8) {
    let filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(level_for_verbosity(verbose).as_str()),
        EnvFilter::new,
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
