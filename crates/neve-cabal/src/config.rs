//! Haskell package build descriptions.
//!
//! `BuildConfig` is the record the evaluator hands to the Haskell builder.
//! `ConfigPatch` is a partial record: every field it sets replaces the
//! corresponding field of a base config, every field it leaves alone is
//! copied over unchanged.

use crate::DependencyHandle;
use serde::{Deserialize, Serialize};

macro_rules! build_config {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty, )*) => {
        /// A Haskell package build description.
        ///
        /// Field names serialize in camelCase to match the evaluator. Every
        /// field may be absent on input: lists default to empty and flags to
        /// unspecified.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct BuildConfig {
            $( $(#[$meta])* pub $field: $ty, )*
        }

        /// A partial `BuildConfig`.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct ConfigPatch {
            $( $field: Option<$ty>, )*
        }

        impl ConfigPatch {
            $(
                $(#[$meta])*
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*

            /// Build a new config from `base` with this patch's fields replaced.
            pub fn apply_to(self, base: &BuildConfig) -> BuildConfig {
                BuildConfig {
                    $( $field: match self.$field {
                        Some(value) => value,
                        None => base.$field.clone(),
                    }, )*
                }
            }

            /// Names of the fields this patch sets.
            pub fn touched(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $(
                    if self.$field.is_some() {
                        fields.push(stringify!($field));
                    }
                )*
                fields
            }

            /// Whether the patch sets no field at all.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }
        }
    };
}

build_config! {
    /// Package name.
    pname: String,
    /// Package version.
    version: String,
    /// Source location.
    src: Option<String>,
    /// Revised `.cabal` file from Hackage, if any.
    edited_cabal_file: Option<String>,

    /// Dependencies of `Setup.hs`.
    setup_depends: Vec<DependencyHandle>,
    /// Native libraries from the `extra-libraries` stanza.
    extra_libraries: Vec<DependencyHandle>,
    library_system_depends: Vec<DependencyHandle>,
    executable_system_depends: Vec<DependencyHandle>,
    pkgconfig_depends: Vec<DependencyHandle>,
    library_pkgconfig_depends: Vec<DependencyHandle>,
    executable_pkgconfig_depends: Vec<DependencyHandle>,
    test_pkgconfig_depends: Vec<DependencyHandle>,
    benchmark_pkgconfig_depends: Vec<DependencyHandle>,
    test_depends: Vec<DependencyHandle>,
    test_ecosystem_depends: Vec<DependencyHandle>,
    test_system_depends: Vec<DependencyHandle>,
    test_tool_depends: Vec<DependencyHandle>,
    benchmark_depends: Vec<DependencyHandle>,
    benchmark_ecosystem_depends: Vec<DependencyHandle>,
    benchmark_system_depends: Vec<DependencyHandle>,
    benchmark_tool_depends: Vec<DependencyHandle>,
    /// Haskell dependencies propagated to consumers.
    build_depends: Vec<DependencyHandle>,
    library_ecosystem_depends: Vec<DependencyHandle>,
    executable_ecosystem_depends: Vec<DependencyHandle>,
    /// Programs run on the build host.
    build_tools: Vec<DependencyHandle>,

    /// Run the test suite. Unspecified means the phase policy decides.
    do_check: Option<bool>,
    /// Run benchmarks. Unspecified means the phase policy decides.
    do_benchmark: Option<bool>,

    /// Extra arguments to `Setup configure`.
    configure_flags: Vec<String>,
    /// Extra arguments to `Setup build`.
    build_flags: Vec<String>,
    /// Extra arguments to `Setup haddock`.
    haddock_flags: Vec<String>,
    /// Patches applied to the unpacked source, in order.
    patches: Vec<String>,

    /// Platforms the package builds on. Unspecified means all.
    platforms: Option<Vec<String>>,
    /// Platforms CI builds the package for. Unspecified means `platforms`.
    hydra_platforms: Option<Vec<String>>,
    broken: Option<bool>,

    /// Strip version bounds from the `.cabal` file.
    jailbreak: Option<bool>,
    do_haddock: Option<bool>,
    do_coverage: Option<bool>,
    dont_strip: Option<bool>,
    enable_library_profiling: Option<bool>,
    enable_executable_profiling: Option<bool>,
    enable_shared_libraries: Option<bool>,
    enable_shared_executables: Option<bool>,
    enable_static_libraries: Option<bool>,
    enable_separate_data_output: Option<bool>,
    hyperlink_source: Option<bool>,
    is_library: Option<bool>,
    is_executable: Option<bool>,
}

impl BuildConfig {
    /// Create an empty config for the given package.
    pub fn new(pname: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            pname: pname.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// `pname-version`, or just `pname` when no version is known.
    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.pname.clone()
        } else {
            format!("{}-{}", self.pname, self.version)
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ConfigPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }
}
