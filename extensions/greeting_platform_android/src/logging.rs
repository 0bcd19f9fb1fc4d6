//! Android logging
//!
//! Routes both `log` and `tracing` output to logcat under the configured tag.

use greeting_core::GreetingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

pub(crate) fn init_logging(config: &GreetingConfig) {
    let level = config.level().parse().unwrap_or(log::LevelFilter::Info);

    // android_logger for the log crate
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(config.log_tag.as_str()),
    );

    // tracing-android for the tracing crate
    let layer = match tracing_android::layer(&config.log_tag) {
        Ok(layer) => layer,
        Err(e) => {
            log::error!("tracing-android layer unavailable: {}", e);
            return;
        }
    };
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(config.level()))
        .with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        log::debug!("tracing subscriber already installed");
    }
}
