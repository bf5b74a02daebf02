//! Tracing setup for the function binaries

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Timestamps and
/// module targets are left out since CloudWatch stamps every line itself.
/// `LOG_FORMAT=json` switches to one JSON object per line.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time();

    let json = std::env::var("LOG_FORMAT").map_or(false, |f| f.eq_ignore_ascii_case("json"));
    // a subscriber may already be installed, e.g. by a test harness
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
