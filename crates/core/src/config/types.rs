use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Invocation parameters for a statistics run.
///
/// Built once at process entry (file, environment, then CLI flags) and
/// passed down; there is no ambient global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Path of the ticket CSV file. The default empty path fails at load
    /// time, not at config time.
    pub input: PathBuf,
    /// Destination country the total and share queries report on.
    pub destination: String,
    /// Baseline total for the percentage share query.
    pub total: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            destination: default_destination(),
            total: default_total(),
        }
    }
}

fn default_destination() -> String {
    "Brazil".to_string()
}

fn default_total() -> i64 {
    1000
}
