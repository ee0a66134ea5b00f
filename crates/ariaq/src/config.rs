//! Query configuration

use serde::{Deserialize, Serialize};

/// Defaults applied by [`Screen`](crate::Screen) queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text matching is exact and case-sensitive; when false, a
    /// case-insensitive substring match is used instead
    pub exact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { exact: true }
    }
}
