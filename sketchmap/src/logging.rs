//! Log output setup for binaries and demos using the crate.

use std::sync::OnceLock;

use log::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs a console subscriber filtered by `RUST_LOG` (`info` if unset). Records emitted with
/// the `log` macros are forwarded to it.
///
/// Only the first call has an effect. Returns false if another global subscriber was installed
/// before it. Later calls return the result of the first one.
pub fn init_logger() -> bool {
    *INSTALLED.get_or_init(install)
}

fn install() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    debug!("Logger initialized");
    installed
}
