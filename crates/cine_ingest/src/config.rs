//! Runtime configuration for submission intake.

use serde::{Deserialize, Serialize};

/// Controls intake behavior. Serde defaults match [`IngestConfig::default`]
/// so partial configuration files stay valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Semantic version of the intake configuration. Version 0 is reserved
    /// and invalid.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Whether to strip ASCII control characters from submission metadata.
    #[serde(default = "default_true")]
    pub strip_control_chars: bool,

    /// Upper bound on accepted payload size; `None` disables the cap.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: Option<usize>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_control_chars: true,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_max_payload_bytes() -> Option<usize> {
    Some(10 * 1024 * 1024) // 10 MiB
}
