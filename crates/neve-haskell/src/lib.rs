//! Haskell package helpers for Neve.
//!
//! This crate provides:
//! - Override helpers that derive a new `BuildConfig` from an old one
//! - Phase control for test suites and benchmarks
//! - Classification of a package's dependencies into build-input buckets

pub mod inputs;
pub mod overrides;
pub mod phases;
mod policy;

pub use inputs::{BuildInputs, classify, classify_with, haskell_build_inputs};
pub use overrides::{Override, Overrides, override_config};
pub use phases::{Phases, control_phases, resolve_phases};
pub use policy::{CHECK_THRESHOLD, PhasePolicy};

pub use neve_cabal::{
    BuildConfig, ConfigPatch, DependencyHandle, DependsList, FlagList, Toggle, ToolchainInfo,
    Version,
};
