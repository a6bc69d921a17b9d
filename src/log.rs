use serde_derive::Deserialize;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// env var consulted first for the log filter
pub const LOG_ENV_VAR: &str = "TASKSTORE_LOG";

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: String,
    pub structured: bool,
}

fn default_filter(config: Option<&Log>) -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::new(config.map(|log| log.level.as_str()).unwrap_or("info")),
    }
}

/// setup logging from the TASKSTORE_LOG environment filter, falling back
/// to the config file level when the environment does not provide one
pub fn setup(config: Option<&Log>) {
    let sbuilder = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc3339())
        .with_level(true)
        .with_env_filter(default_filter(config));
    if config.map(|log| log.structured).unwrap_or(false) {
        let ss = sbuilder.json().finish();
        tracing::subscriber::set_global_default(ss)
            .expect("setting tracing default subscriber failed");
    } else {
        let ss = sbuilder.with_ansi(true).finish();
        tracing::subscriber::set_global_default(ss)
            .expect("setting tracing default subscriber failed");
    }
}
