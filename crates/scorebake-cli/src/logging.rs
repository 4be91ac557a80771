//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "scorebake_score=debug,scorebake_render=debug,scorebake_cli=debug";

/// Installs a stderr `tracing` subscriber when `verbose` is set.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Without `verbose` no subscriber is
/// installed and library events are discarded.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
