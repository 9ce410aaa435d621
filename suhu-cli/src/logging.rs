use tracing_subscriber::EnvFilter;

/// Initialize tracing output on stderr so it never mixes with the card.
///
/// `RUST_LOG` wins over the default filter.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "suhu_core=debug,suhu=debug" } else { "warn" }
}
