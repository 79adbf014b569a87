//! Build-input classification.
//!
//! A `BuildConfig` lists its dependencies in about twenty role-specific
//! fields. The builder needs them in four buckets instead:
//! - propagated inputs, which consumers of the package also need
//! - other inputs, needed only while building this package
//! - Haskell inputs and system inputs, a stable partition of the two above
//!
//! Order is significant throughout (it ends up in search paths), and nothing
//! is deduplicated.

use crate::phases::{Phases, resolve_phases};
use crate::PhasePolicy;
use neve_cabal::{BuildConfig, DependencyHandle, ToolchainInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The classified build inputs of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInputs {
    /// Inputs built by the Haskell builder.
    pub ecosystem_inputs: Vec<DependencyHandle>,
    /// Every other input.
    pub system_inputs: Vec<DependencyHandle>,
    /// Inputs consumers of the package need as well.
    pub propagated_inputs: Vec<DependencyHandle>,
    /// Inputs needed only to build the package.
    pub other_inputs: Vec<DependencyHandle>,
    /// pkg-config modules after phase gating.
    pub all_pkgconfig_depends: Vec<DependencyHandle>,
    /// The phases the classification was made for.
    pub phases: Phases,
}

impl BuildInputs {
    /// Propagated inputs followed by other inputs.
    pub fn all_inputs(&self) -> Vec<DependencyHandle> {
        self.propagated_inputs
            .iter()
            .chain(&self.other_inputs)
            .cloned()
            .collect()
    }

    /// Whether no bucket holds anything.
    pub fn is_empty(&self) -> bool {
        self.propagated_inputs.is_empty() && self.other_inputs.is_empty()
    }
}

/// Classify the inputs of `config` under the default phase policy.
pub fn classify(config: &BuildConfig, toolchain: &ToolchainInfo) -> BuildInputs {
    classify_with(config, toolchain, &PhasePolicy::default())
}

/// Classify the inputs of `config` under `policy`.
pub fn classify_with(
    config: &BuildConfig,
    toolchain: &ToolchainInfo,
    policy: &PhasePolicy,
) -> BuildInputs {
    let phases = resolve_phases(config, toolchain, policy);

    let all_pkgconfig_depends = pkgconfig_depends(config, phases);

    let propagated_inputs = concat([
        &config.build_depends,
        &config.library_ecosystem_depends,
        &config.executable_ecosystem_depends,
    ]);

    let mut other_inputs = concat([
        &config.setup_depends,
        &config.extra_libraries,
        &config.library_system_depends,
        &config.executable_system_depends,
        &all_pkgconfig_depends,
    ]);
    if phases.do_check {
        other_inputs.extend(concat([
            &config.test_depends,
            &config.test_ecosystem_depends,
            &config.test_system_depends,
            &config.test_tool_depends,
        ]));
    }
    // An alternate backend's hsc2hs shells out to the native one, whatever
    // phases run.
    if toolchain.is_alternate_backend() {
        other_inputs.push(toolchain.native_toolchain().handle());
    }
    if phases.do_benchmark {
        other_inputs.extend(concat([
            &config.benchmark_depends,
            &config.benchmark_ecosystem_depends,
            &config.benchmark_system_depends,
            &config.benchmark_tool_depends,
        ]));
    }

    let (ecosystem_inputs, system_inputs): (Vec<_>, Vec<_>) = propagated_inputs
        .iter()
        .chain(&other_inputs)
        .cloned()
        .partition(DependencyHandle::is_ecosystem_package);

    debug!(
        package = %config.display_name(),
        do_check = phases.do_check,
        do_benchmark = phases.do_benchmark,
        propagated = propagated_inputs.len(),
        other = other_inputs.len(),
        haskell = ecosystem_inputs.len(),
        system = system_inputs.len(),
        "classified build inputs"
    );

    BuildInputs {
        ecosystem_inputs,
        system_inputs,
        propagated_inputs,
        other_inputs,
        all_pkgconfig_depends,
        phases,
    }
}

/// The Haskell inputs of `config` under the default phase policy.
pub fn haskell_build_inputs(
    config: &BuildConfig,
    toolchain: &ToolchainInfo,
) -> Vec<DependencyHandle> {
    classify(config, toolchain).ecosystem_inputs
}

fn pkgconfig_depends(config: &BuildConfig, phases: Phases) -> Vec<DependencyHandle> {
    let mut depends = concat([
        &config.pkgconfig_depends,
        &config.library_pkgconfig_depends,
        &config.executable_pkgconfig_depends,
    ]);
    if phases.do_check {
        depends.extend_from_slice(&config.test_pkgconfig_depends);
    }
    if phases.do_benchmark {
        depends.extend_from_slice(&config.benchmark_pkgconfig_depends);
    }
    depends
}

fn concat<const N: usize>(lists: [&Vec<DependencyHandle>; N]) -> Vec<DependencyHandle> {
    lists.into_iter().flatten().cloned().collect()
}
