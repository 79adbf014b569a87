//! Phase policy configuration.

use neve_cabal::Version;
use serde::{Deserialize, Serialize};

/// Oldest compiler that does not run test suites by default.
///
/// Compilers strictly newer than this run tests unless told otherwise.
pub const CHECK_THRESHOLD: [u32; 2] = [7, 4];

/// Decides the test and benchmark phases when a package leaves them unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhasePolicy {
    /// Tests run by default only on native compilers newer than this.
    pub check_threshold: Version,
    /// Whether benchmarks run by default.
    pub benchmark_default: bool,
}

impl Default for PhasePolicy {
    fn default() -> Self {
        Self {
            check_threshold: Version::new(CHECK_THRESHOLD),
            benchmark_default: false,
        }
    }
}

impl PhasePolicy {
    /// Create a policy with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiler version tests are gated on.
    pub fn check_threshold(mut self, version: Version) -> Self {
        self.check_threshold = version;
        self
    }

    /// Run benchmarks unless a package disables them.
    pub fn benchmark_default(mut self, enabled: bool) -> Self {
        self.benchmark_default = enabled;
        self
    }
}
