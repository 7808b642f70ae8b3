//! Logging setup for binaries and demos.

/// Initializes `env_logger` once; later calls are ignored.
///
/// The filter comes from `RUST_LOG`. Without it, `info` and above are shown.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
