//! Dependency handles.
//!
//! A handle is an opaque reference to something a build consumes. Its kind is
//! fixed when the handle is created; nothing downstream inspects the name to
//! decide what a handle is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a build dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "kebab-case")]
pub enum DependencyHandle {
    /// A package built by the Haskell builder itself.
    EcosystemPackage(String),
    /// A native library linked into the build (`zlib`, `gmp`).
    SystemLibrary(String),
    /// A pkg-config module (`gtk+-3.0`).
    PkgConfigPackage(String),
    /// A program invoked during the build (`alex`, `happy`, a compiler).
    ToolReference(String),
}

impl DependencyHandle {
    /// A Haskell package dependency.
    pub fn package(name: impl Into<String>) -> Self {
        Self::EcosystemPackage(name.into())
    }

    /// A native library dependency.
    pub fn system_library(name: impl Into<String>) -> Self {
        Self::SystemLibrary(name.into())
    }

    /// A pkg-config dependency.
    pub fn pkg_config(name: impl Into<String>) -> Self {
        Self::PkgConfigPackage(name.into())
    }

    /// A build tool dependency.
    pub fn tool(name: impl Into<String>) -> Self {
        Self::ToolReference(name.into())
    }

    /// The referenced name.
    pub fn name(&self) -> &str {
        match self {
            Self::EcosystemPackage(name)
            | Self::SystemLibrary(name)
            | Self::PkgConfigPackage(name)
            | Self::ToolReference(name) => name,
        }
    }

    /// Whether this handle refers to a package built by the Haskell builder.
    pub fn is_ecosystem_package(&self) -> bool {
        matches!(self, Self::EcosystemPackage(_))
    }

    /// Short label for the handle's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EcosystemPackage(_) => "haskell",
            Self::SystemLibrary(_) => "system",
            Self::PkgConfigPackage(_) => "pkg-config",
            Self::ToolReference(_) => "tool",
        }
    }
}

impl fmt::Display for DependencyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.kind())
    }
}
