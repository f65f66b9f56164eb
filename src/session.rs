//! Scoped environment overrides around terminal session start.
//!
//! Some terminals only report their full palette when `TERM` names a
//! 256-color terminal. The override is set just before the backend is probed
//! and started, and the previous value is put back when the guard drops.

use std::env;
use std::ffi::OsString;

use tracing::debug;

/// Environment variable that selects the terminal type.
pub const TERM_VAR: &str = "TERM";

/// Sets an environment variable for the lifetime of the guard.
///
/// Restores the previous value (or removes the variable if it was unset)
/// on drop. Not thread-safe: the process environment is global.
#[derive(Debug)]
pub struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
    applied: bool,
}

impl EnvOverride {
    /// Set `key` to `value`. `None` leaves the environment untouched.
    pub fn set(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var_os(key);
        let applied = match value {
            Some(value) => {
                debug!(key, value, "overriding environment for terminal session");
                env::set_var(key, value);
                true
            }
            None => false,
        };
        Self {
            key,
            previous,
            applied,
        }
    }

    /// Override `TERM`.
    pub fn term(value: Option<&str>) -> Self {
        Self::set(TERM_VAR, value)
    }

    /// Whether the guard changed anything.
    pub fn is_applied(&self) -> bool {
        self.applied
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        if !self.applied {
            return;
        }
        match self.previous.take() {
            Some(previous) => env::set_var(self.key, previous),
            None => env::remove_var(self.key),
        }
    }
}
