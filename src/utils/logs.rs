use tracing_subscriber::EnvFilter;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// RUST_LOG wins over the configured level when it is set.
pub fn build_filter(config: &Configuration) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()))
}

pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        // stdout carries command responses, so logs go to stderr.
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = if config.log_json {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(format!("tracing setup failed {:?}", err).as_str(), None))
}
