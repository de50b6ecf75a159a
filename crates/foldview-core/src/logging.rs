//! Logging setup for hosts, examples, and tests.

/// Install the default fmt subscriber with an env filter.
///
/// Hosts embedding the engine in a larger application should install their
/// own subscriber instead; this is for examples and quick diagnostics.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,foldview=debug,foldview_core=debug")
        .init();
}
