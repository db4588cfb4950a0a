use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::supplicant::{DEFAULT_SCAN_TIMEOUT, ScanType};

/// Scan settings used by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScanConfig {
    /// Seconds to wait for `ScanDone` in a blocking scan.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Scan type used when a command does not name one.
    #[serde(default)]
    pub scan_type: ScanType,
}

impl ScanConfig {
    /// Blocking scan timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            scan_type: ScanType::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_SCAN_TIMEOUT.as_secs()
}
