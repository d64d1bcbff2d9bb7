use std::env;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::GeneralConfig;

/// Initialize tracing for the application
///
/// Uses the RUST_LOG environment variable if set, otherwise the configured
/// log level. Output is pretty by default, JSON when NOWPLAYING_LOG_FORMAT
/// is "json".
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(general: &GeneralConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(general.log_level).into())
        .from_env_lossy();

    let format = env::var("NOWPLAYING_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_target(true).with_level(true))
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_thread_ids(true)
                        .with_thread_names(true),
                )
                .try_init()?;
        }
    }

    Ok(())
}
