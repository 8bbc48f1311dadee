//! User configuration for vscroll.
//!
//! Read once at startup from `$XDG_CONFIG_HOME/vscroll/config.toml`, falling
//! back to `~/.config/vscroll/config.toml`. Every key is optional. A missing
//! file is silent; a malformed one is reported on stderr and ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name, `"dark"` or `"catppuccin-mocha"`.
    pub theme: String,
    /// Number of generated sample items when no input file is given.
    pub item_count: usize,
    /// Terminal rows per item node.
    pub item_rows: u32,
    /// Log file; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_owned(),
            item_count: 100_000,
            item_rows: 1,
            log_file: None,
            log_filter: "vscroll=info,vscroll_core=info".to_owned(),
        }
    }
}

/// Returns the path to the vscroll config file.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("vscroll").join("config.toml")
}

/// Parses configuration text.
pub fn parse(raw: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(raw)
}

/// Loads the config at `path`, or defaults. Never fails.
pub fn load(path: &Path) -> Config {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };
    match parse(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vscroll: config parse error in {:?}: {}", path, e);
            Config::default()
        }
    }
}
