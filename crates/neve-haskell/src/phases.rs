//! Test and benchmark phase control.

use crate::PhasePolicy;
use neve_cabal::{BuildConfig, ToolchainInfo};
use serde::{Deserialize, Serialize};

/// Effective phase flags for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phases {
    pub do_check: bool,
    pub do_benchmark: bool,
}

/// Resolve the phase flags of `config` under `policy`.
///
/// An explicit value in the config always wins. Otherwise tests run unless the
/// compiler is a cross compiler or not newer than the policy threshold, and
/// benchmarks follow the policy default.
pub fn resolve_phases(
    config: &BuildConfig,
    toolchain: &ToolchainInfo,
    policy: &PhasePolicy,
) -> Phases {
    let do_check = config.do_check.unwrap_or_else(|| {
        !toolchain.is_cross() && policy.check_threshold.is_older_than(toolchain.version())
    });
    let do_benchmark = config.do_benchmark.unwrap_or(policy.benchmark_default);

    Phases {
        do_check,
        do_benchmark,
    }
}

/// Resolve the phase flags of `config` under the default policy.
pub fn control_phases(config: &BuildConfig, toolchain: &ToolchainInfo) -> Phases {
    resolve_phases(config, toolchain, &PhasePolicy::default())
}
