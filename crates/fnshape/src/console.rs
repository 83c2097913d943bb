//! Console logging setup.
//!
//! Installs an env-filtered `tracing` subscriber and prints a short
//! version banner. Enabled with the `console` feature.

use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::from_default_env().add_directive("fnshape_core=info".parse().unwrap());

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().without_time())
            .init();
    });
}

fn print_banner() {
    let version_line = format!("fnshape v{}", env!("CARGO_PKG_VERSION"));
    println!("{}\n", version_line.bright_cyan().bold());
}
