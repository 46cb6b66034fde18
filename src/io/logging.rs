//! Logging initialization for the command-line front end

use crate::io::configuration::DEFAULT_LOG_FILTER;

/// Initialize the logging system
///
/// Uses `env_logger` with [`DEFAULT_LOG_FILTER`] unless `RUST_LOG` says
/// otherwise. Calling it more than once leaves the first logger in place.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .try_init();
}
