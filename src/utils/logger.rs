use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 吞下和嘔吐事件分別在 debug 與 info 等級
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "walrus_feeder=debug,info"
    } else {
        "walrus_feeder=info,warn"
    }
}

/// `RUST_LOG` wins over the `--verbose` default when it parses.
pub fn feeding_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(feeding_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
