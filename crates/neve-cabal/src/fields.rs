//! Field selectors for generic config edits.
//!
//! Helpers like "append X to a list" or "set a flag" are written once over
//! these selectors instead of once per field.

use crate::{BuildConfig, ConfigPatch, DependencyHandle};

/// A boolean build option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Check,
    Benchmark,
    Jailbreak,
    Haddock,
    Coverage,
    DontStrip,
    Broken,
    LibraryProfiling,
    ExecutableProfiling,
    SharedLibraries,
    SharedExecutables,
    StaticLibraries,
    SeparateDataOutput,
    HyperlinkSource,
    Library,
    Executable,
}

impl Toggle {
    pub const ALL: [Toggle; 16] = [
        Toggle::Check,
        Toggle::Benchmark,
        Toggle::Jailbreak,
        Toggle::Haddock,
        Toggle::Coverage,
        Toggle::DontStrip,
        Toggle::Broken,
        Toggle::LibraryProfiling,
        Toggle::ExecutableProfiling,
        Toggle::SharedLibraries,
        Toggle::SharedExecutables,
        Toggle::StaticLibraries,
        Toggle::SeparateDataOutput,
        Toggle::HyperlinkSource,
        Toggle::Library,
        Toggle::Executable,
    ];

    /// The field name as the evaluator spells it.
    pub fn field_name(self) -> &'static str {
        match self {
            Toggle::Check => "doCheck",
            Toggle::Benchmark => "doBenchmark",
            Toggle::Jailbreak => "jailbreak",
            Toggle::Haddock => "doHaddock",
            Toggle::Coverage => "doCoverage",
            Toggle::DontStrip => "dontStrip",
            Toggle::Broken => "broken",
            Toggle::LibraryProfiling => "enableLibraryProfiling",
            Toggle::ExecutableProfiling => "enableExecutableProfiling",
            Toggle::SharedLibraries => "enableSharedLibraries",
            Toggle::SharedExecutables => "enableSharedExecutables",
            Toggle::StaticLibraries => "enableStaticLibraries",
            Toggle::SeparateDataOutput => "enableSeparateDataOutput",
            Toggle::HyperlinkSource => "hyperlinkSource",
            Toggle::Library => "isLibrary",
            Toggle::Executable => "isExecutable",
        }
    }

    /// Value the builder assumes when the field is unspecified.
    ///
    /// `Check` has no fixed default; it depends on the toolchain and is
    /// resolved by the phase policy. The value here is the native default.
    pub fn builder_default(self) -> bool {
        matches!(
            self,
            Toggle::Check
                | Toggle::Haddock
                | Toggle::LibraryProfiling
                | Toggle::SharedLibraries
                | Toggle::StaticLibraries
                | Toggle::HyperlinkSource
                | Toggle::Library
        )
    }

    /// The explicit value in `config`, if any.
    pub fn get(self, config: &BuildConfig) -> Option<bool> {
        match self {
            Toggle::Check => config.do_check,
            Toggle::Benchmark => config.do_benchmark,
            Toggle::Jailbreak => config.jailbreak,
            Toggle::Haddock => config.do_haddock,
            Toggle::Coverage => config.do_coverage,
            Toggle::DontStrip => config.dont_strip,
            Toggle::Broken => config.broken,
            Toggle::LibraryProfiling => config.enable_library_profiling,
            Toggle::ExecutableProfiling => config.enable_executable_profiling,
            Toggle::SharedLibraries => config.enable_shared_libraries,
            Toggle::SharedExecutables => config.enable_shared_executables,
            Toggle::StaticLibraries => config.enable_static_libraries,
            Toggle::SeparateDataOutput => config.enable_separate_data_output,
            Toggle::HyperlinkSource => config.hyperlink_source,
            Toggle::Library => config.is_library,
            Toggle::Executable => config.is_executable,
        }
    }

    /// The explicit value in `config`, or the builder default.
    pub fn resolve(self, config: &BuildConfig) -> bool {
        self.get(config).unwrap_or_else(|| self.builder_default())
    }

    /// Extend `patch` so that it sets this option to `value`.
    pub fn set(self, patch: ConfigPatch, value: bool) -> ConfigPatch {
        let value = Some(value);
        match self {
            Toggle::Check => patch.do_check(value),
            Toggle::Benchmark => patch.do_benchmark(value),
            Toggle::Jailbreak => patch.jailbreak(value),
            Toggle::Haddock => patch.do_haddock(value),
            Toggle::Coverage => patch.do_coverage(value),
            Toggle::DontStrip => patch.dont_strip(value),
            Toggle::Broken => patch.broken(value),
            Toggle::LibraryProfiling => patch.enable_library_profiling(value),
            Toggle::ExecutableProfiling => patch.enable_executable_profiling(value),
            Toggle::SharedLibraries => patch.enable_shared_libraries(value),
            Toggle::SharedExecutables => patch.enable_shared_executables(value),
            Toggle::StaticLibraries => patch.enable_static_libraries(value),
            Toggle::SeparateDataOutput => patch.enable_separate_data_output(value),
            Toggle::HyperlinkSource => patch.hyperlink_source(value),
            Toggle::Library => patch.is_library(value),
            Toggle::Executable => patch.is_executable(value),
        }
    }
}

/// A dependency-list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependsList {
    Setup,
    ExtraLibraries,
    LibrarySystem,
    ExecutableSystem,
    Pkgconfig,
    LibraryPkgconfig,
    ExecutablePkgconfig,
    TestPkgconfig,
    BenchmarkPkgconfig,
    Test,
    TestEcosystem,
    TestSystem,
    TestTool,
    Benchmark,
    BenchmarkEcosystem,
    BenchmarkSystem,
    BenchmarkTool,
    Build,
    LibraryEcosystem,
    ExecutableEcosystem,
    BuildTools,
}

impl DependsList {
    pub fn field_name(self) -> &'static str {
        match self {
            DependsList::Setup => "setupDepends",
            DependsList::ExtraLibraries => "extraLibraries",
            DependsList::LibrarySystem => "librarySystemDepends",
            DependsList::ExecutableSystem => "executableSystemDepends",
            DependsList::Pkgconfig => "pkgconfigDepends",
            DependsList::LibraryPkgconfig => "libraryPkgconfigDepends",
            DependsList::ExecutablePkgconfig => "executablePkgconfigDepends",
            DependsList::TestPkgconfig => "testPkgconfigDepends",
            DependsList::BenchmarkPkgconfig => "benchmarkPkgconfigDepends",
            DependsList::Test => "testDepends",
            DependsList::TestEcosystem => "testEcosystemDepends",
            DependsList::TestSystem => "testSystemDepends",
            DependsList::TestTool => "testToolDepends",
            DependsList::Benchmark => "benchmarkDepends",
            DependsList::BenchmarkEcosystem => "benchmarkEcosystemDepends",
            DependsList::BenchmarkSystem => "benchmarkSystemDepends",
            DependsList::BenchmarkTool => "benchmarkToolDepends",
            DependsList::Build => "buildDepends",
            DependsList::LibraryEcosystem => "libraryEcosystemDepends",
            DependsList::ExecutableEcosystem => "executableEcosystemDepends",
            DependsList::BuildTools => "buildTools",
        }
    }

    pub fn get(self, config: &BuildConfig) -> &[DependencyHandle] {
        match self {
            DependsList::Setup => &config.setup_depends,
            DependsList::ExtraLibraries => &config.extra_libraries,
            DependsList::LibrarySystem => &config.library_system_depends,
            DependsList::ExecutableSystem => &config.executable_system_depends,
            DependsList::Pkgconfig => &config.pkgconfig_depends,
            DependsList::LibraryPkgconfig => &config.library_pkgconfig_depends,
            DependsList::ExecutablePkgconfig => &config.executable_pkgconfig_depends,
            DependsList::TestPkgconfig => &config.test_pkgconfig_depends,
            DependsList::BenchmarkPkgconfig => &config.benchmark_pkgconfig_depends,
            DependsList::Test => &config.test_depends,
            DependsList::TestEcosystem => &config.test_ecosystem_depends,
            DependsList::TestSystem => &config.test_system_depends,
            DependsList::TestTool => &config.test_tool_depends,
            DependsList::Benchmark => &config.benchmark_depends,
            DependsList::BenchmarkEcosystem => &config.benchmark_ecosystem_depends,
            DependsList::BenchmarkSystem => &config.benchmark_system_depends,
            DependsList::BenchmarkTool => &config.benchmark_tool_depends,
            DependsList::Build => &config.build_depends,
            DependsList::LibraryEcosystem => &config.library_ecosystem_depends,
            DependsList::ExecutableEcosystem => &config.executable_ecosystem_depends,
            DependsList::BuildTools => &config.build_tools,
        }
    }

    /// Extend `patch` so that it replaces this list with `value`.
    pub fn set(self, patch: ConfigPatch, value: Vec<DependencyHandle>) -> ConfigPatch {
        match self {
            DependsList::Setup => patch.setup_depends(value),
            DependsList::ExtraLibraries => patch.extra_libraries(value),
            DependsList::LibrarySystem => patch.library_system_depends(value),
            DependsList::ExecutableSystem => patch.executable_system_depends(value),
            DependsList::Pkgconfig => patch.pkgconfig_depends(value),
            DependsList::LibraryPkgconfig => patch.library_pkgconfig_depends(value),
            DependsList::ExecutablePkgconfig => patch.executable_pkgconfig_depends(value),
            DependsList::TestPkgconfig => patch.test_pkgconfig_depends(value),
            DependsList::BenchmarkPkgconfig => patch.benchmark_pkgconfig_depends(value),
            DependsList::Test => patch.test_depends(value),
            DependsList::TestEcosystem => patch.test_ecosystem_depends(value),
            DependsList::TestSystem => patch.test_system_depends(value),
            DependsList::TestTool => patch.test_tool_depends(value),
            DependsList::Benchmark => patch.benchmark_depends(value),
            DependsList::BenchmarkEcosystem => patch.benchmark_ecosystem_depends(value),
            DependsList::BenchmarkSystem => patch.benchmark_system_depends(value),
            DependsList::BenchmarkTool => patch.benchmark_tool_depends(value),
            DependsList::Build => patch.build_depends(value),
            DependsList::LibraryEcosystem => patch.library_ecosystem_depends(value),
            DependsList::ExecutableEcosystem => patch.executable_ecosystem_depends(value),
            DependsList::BuildTools => patch.build_tools(value),
        }
    }
}

/// A list-of-strings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagList {
    ConfigureFlags,
    BuildFlags,
    HaddockFlags,
    Patches,
}

impl FlagList {
    pub fn field_name(self) -> &'static str {
        match self {
            FlagList::ConfigureFlags => "configureFlags",
            FlagList::BuildFlags => "buildFlags",
            FlagList::HaddockFlags => "haddockFlags",
            FlagList::Patches => "patches",
        }
    }

    pub fn get(self, config: &BuildConfig) -> &[String] {
        match self {
            FlagList::ConfigureFlags => &config.configure_flags,
            FlagList::BuildFlags => &config.build_flags,
            FlagList::HaddockFlags => &config.haddock_flags,
            FlagList::Patches => &config.patches,
        }
    }

    pub fn set(self, patch: ConfigPatch, value: Vec<String>) -> ConfigPatch {
        match self {
            FlagList::ConfigureFlags => patch.configure_flags(value),
            FlagList::BuildFlags => patch.build_flags(value),
            FlagList::HaddockFlags => patch.haddock_flags(value),
            FlagList::Patches => patch.patches(value),
        }
    }
}
