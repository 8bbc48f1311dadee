//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log records go to the file named by
//! `log_file` in the config. Without one, no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs a global fmt subscriber writing to the configured log file.
///
/// `RUST_LOG` overrides `config.log_filter`. Failures are reported on stderr
/// and leave logging off; they never stop startup.
pub fn init(config: &Config) {
    let Some(path) = config.log_file.as_ref() else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("vscroll: cannot open log file {:?}: {}", path, e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|e| {
            eprintln!("vscroll: invalid log_filter {:?}: {}", config.log_filter, e);
            EnvFilter::new("info")
        });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("vscroll: logging disabled: {}", e);
    }
}
