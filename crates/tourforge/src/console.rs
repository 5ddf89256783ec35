//! Log output for solver events.
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`,
//! defaulting to `tourforge_solver=info`.

use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes solver log output on stderr.
///
/// Safe to call multiple times - only the first call has effect. With
/// `verbose`, solver events down to DEBUG are shown unless `RUST_LOG`
/// says otherwise.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(directives(verbose, std::env::var("RUST_LOG").ok()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn directives(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(env) if !env.trim().is_empty() => env,
        _ if verbose => "tourforge_solver=debug".to_string(),
        _ => "tourforge_solver=info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(directives(false, None), "tourforge_solver=info");
        assert_eq!(directives(true, None), "tourforge_solver=debug");
    }

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(
            directives(true, Some("tourforge_solver=trace".into())),
            "tourforge_solver=trace"
        );
        assert_eq!(directives(false, Some("  ".into())), "tourforge_solver=info");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
