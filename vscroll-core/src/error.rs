//! Error types for the recycling list engine.
//!
//! Only construction can fail. Steady-state scrolling has no error path: a
//! recycle that would move the window past either end of the list is reported
//! as [`crate::types::RecycleOutcome::Skipped`], never as an error.

use thiserror::Error;

/// Invalid construction arguments. Fatal to the instance being built; the
/// caller must fix its inputs and construct again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The container id did not resolve to a node in the host.
    #[error("missing root element")]
    MissingRoot,
    /// The viewport height was zero.
    #[error("invalid height")]
    InvalidHeight,
    /// The item list was empty.
    #[error("empty list")]
    EmptyList,
    /// The first rendered item measured zero or could not be measured.
    #[error("invalid item height")]
    InvalidItemHeight,
    /// `N * itemHeight` does not fit the host's height units.
    #[error("list too tall")]
    ListTooTall,
}

/// Top-level error returned by `vscroll-core`.
#[derive(Debug, Error)]
pub enum VScrollError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl VScrollError {
    /// Returns the configuration error kind, if this is one.
    pub fn configuration(&self) -> Option<ConfigurationError> {
        match self {
            VScrollError::Configuration(e) => Some(*e),
        }
    }
}

pub type Result<T> = std::result::Result<T, VScrollError>;
