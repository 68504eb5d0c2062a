//! Diagnostics for the CLI. Everything is written to stderr; stdout only
//! carries converted amounts and tables.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Level for this crate's own events: debug when verbose, silent otherwise.
fn app_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    }
}

/// `RUST_LOG` wins when set, so dependencies can be traced too.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(app_level(verbose).into()))
}

pub fn init_logging(verbose: bool) {
    let app_filter = Targets::new().with_target(APP_TARGET, app_level(verbose));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_target(verbose)
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter(verbose))
        .init();
}
