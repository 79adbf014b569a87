//! Haskell package build descriptions for Neve.
//!
//! This crate holds the data the Haskell builder works on:
//! - `BuildConfig`: one package's build description
//! - `ConfigPatch`: a partial description merged over a base one
//! - `DependencyHandle`: a typed reference to a build input
//! - `ToolchainInfo`: the compiler a package is built with

mod config;
mod fields;
mod handle;
mod toolchain;
mod version;

pub use config::{BuildConfig, ConfigPatch};
pub use fields::{DependsList, FlagList, Toggle};
pub use handle::DependencyHandle;
pub use toolchain::{
    DEFAULT_COMPILER, DEFAULT_COMPILER_VERSION, ToolchainError, ToolchainInfo,
};
pub use version::{Version, VersionParseError};
