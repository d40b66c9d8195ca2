use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. "gh_strength=trace"
pub const LOG_ENV_VAR: &str = "GH_STRENGTH_LOG";

/// Install the stderr log subscriber.
///
/// `GH_STRENGTH_LOG` takes precedence; otherwise `--verbose` selects debug
/// output for this crate and everything else stays at warn.
pub fn init(verbose: bool) {
    let default = if verbose { "warn,gh_strength=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
