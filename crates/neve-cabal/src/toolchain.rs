//! The active Haskell compiler.

use crate::{DependencyHandle, Version};
use serde::{Deserialize, Serialize};

/// Compiler used when none is specified.
pub const DEFAULT_COMPILER: &str = "ghc";

/// Version of the default compiler.
pub const DEFAULT_COMPILER_VERSION: &str = "9.6.6";

/// Describes the compiler a package is built with.
///
/// Cross compilers and alternate backends (GHCJS and friends) cannot run the
/// programs they produce on the build host, so they carry a reference to a
/// native compiler for host-side tools. A toolchain with either flag set always
/// has that reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawToolchain", into = "RawToolchain")]
pub struct ToolchainInfo {
    name: String,
    version: Version,
    is_cross: bool,
    is_alternate_backend: bool,
    native: Option<Box<ToolchainInfo>>,
}

impl ToolchainInfo {
    /// A native compiler.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            is_cross: false,
            is_alternate_backend: false,
            native: None,
        }
    }

    /// Mark this toolchain as a cross compiler with the given host compiler.
    pub fn cross(mut self, native: ToolchainInfo) -> Self {
        self.is_cross = true;
        self.native = Some(Box::new(native));
        self
    }

    /// Mark this toolchain as an alternate backend with the given host compiler.
    pub fn alternate_backend(mut self, native: ToolchainInfo) -> Self {
        self.is_alternate_backend = true;
        self.native = Some(Box::new(native));
        self
    }

    /// Assemble a toolchain from raw parts, checking the native reference.
    pub fn from_parts(
        name: impl Into<String>,
        version: Version,
        is_cross: bool,
        is_alternate_backend: bool,
        native: Option<ToolchainInfo>,
    ) -> Result<Self, ToolchainError> {
        let name = name.into();
        if (is_cross || is_alternate_backend) && native.is_none() {
            return Err(ToolchainError::MissingNativeToolchain(name));
        }
        Ok(Self {
            name,
            version,
            is_cross,
            is_alternate_backend,
            native: native.map(Box::new),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn is_cross(&self) -> bool {
        self.is_cross
    }

    pub fn is_alternate_backend(&self) -> bool {
        self.is_alternate_backend
    }

    /// The compiler used for host-side tools.
    ///
    /// This is the toolchain itself unless it is a cross compiler or an
    /// alternate backend.
    pub fn native_toolchain(&self) -> &ToolchainInfo {
        match &self.native {
            Some(native) if self.is_cross || self.is_alternate_backend => native.as_ref(),
            _ => self,
        }
    }

    /// This compiler as a build input.
    pub fn handle(&self) -> DependencyHandle {
        DependencyHandle::tool(format!("{}-{}", self.name, self.version))
    }
}

impl Default for ToolchainInfo {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER, Version::new([9, 6, 6]))
    }
}

/// Errors from assembling a toolchain description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolchainError {
    #[error("toolchain '{0}' is cross or an alternate backend but has no native toolchain")]
    MissingNativeToolchain(String),
}

/// Wire shape of a toolchain, validated on the way in.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToolchain {
    name: String,
    version: Version,
    #[serde(default)]
    is_cross: bool,
    #[serde(default)]
    is_alternate_backend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    native: Option<Box<ToolchainInfo>>,
}

impl TryFrom<RawToolchain> for ToolchainInfo {
    type Error = ToolchainError;

    fn try_from(raw: RawToolchain) -> Result<Self, Self::Error> {
        Self::from_parts(
            raw.name,
            raw.version,
            raw.is_cross,
            raw.is_alternate_backend,
            raw.native.map(|native| *native),
        )
    }
}

impl From<ToolchainInfo> for RawToolchain {
    fn from(toolchain: ToolchainInfo) -> Self {
        Self {
            name: toolchain.name,
            version: toolchain.version,
            is_cross: toolchain.is_cross,
            is_alternate_backend: toolchain.is_alternate_backend,
            native: toolchain.native,
        }
    }
}
