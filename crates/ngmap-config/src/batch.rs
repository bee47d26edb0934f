//! Batch execution over many files.

use serde::{Deserialize, Serialize};

const fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Abort the whole batch on the first unreadable or unparsable file.
    #[serde(default)]
    pub fail_fast: bool,

    /// Process files on the rayon thread pool. Output order is unaffected.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            parallel: default_parallel(),
        }
    }
}
