use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (e.g. `SHIFTDECODE_LOG=debug`).
pub const LOG_ENV: &str = "SHIFTDECODE_LOG";

/// Install the stderr tracing subscriber.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("shiftdecode={}", default_level(verbose, quiet))));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(default_level(true, true), "debug");
        assert_eq!(default_level(false, true), "error");
        assert_eq!(default_level(false, false), "warn");
    }
}
