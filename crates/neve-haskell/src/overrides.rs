//! Override helpers for Haskell packages.
//!
//! Every helper here is `override_config` with a fixed patch function. They
//! take the config by reference and return a new one; the input is never
//! modified.

use neve_cabal::{BuildConfig, ConfigPatch, DependencyHandle, DependsList, FlagList, Toggle};
use tracing::trace;

/// Apply `patch` to `config`.
///
/// `patch` sees the config as it was before the override, so it can read a
/// field and return an extended copy. Fields the returned patch sets replace
/// the originals outright; everything else is carried over.
pub fn override_config<F>(config: &BuildConfig, patch: F) -> BuildConfig
where
    F: FnOnce(&BuildConfig) -> ConfigPatch,
{
    let patch = patch(config);
    trace!(
        package = %config.display_name(),
        fields = ?patch.touched(),
        "overriding build config"
    );
    patch.apply_to(config)
}

// Generic field edits

/// Set a boolean option.
pub fn set_toggle(config: &BuildConfig, toggle: Toggle, value: bool) -> BuildConfig {
    override_config(config, |_| toggle.set(ConfigPatch::new(), value))
}

/// Append handles to a dependency list.
pub fn append_depends<I>(config: &BuildConfig, list: DependsList, items: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    override_config(config, |old| {
        let mut depends = list.get(old).to_vec();
        depends.extend(items);
        list.set(ConfigPatch::new(), depends)
    })
}

/// Remove every occurrence of `item` from a dependency list.
pub fn remove_depends(
    config: &BuildConfig,
    list: DependsList,
    item: &DependencyHandle,
) -> BuildConfig {
    override_config(config, |old| {
        let depends = list.get(old).iter().filter(|d| *d != item).cloned().collect();
        list.set(ConfigPatch::new(), depends)
    })
}

/// Append strings to a flag list.
pub fn append_flags<I, S>(config: &BuildConfig, list: FlagList, items: I) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    override_config(config, |old| {
        let mut flags = list.get(old).to_vec();
        flags.extend(items.into_iter().map(Into::into));
        list.set(ConfigPatch::new(), flags)
    })
}

/// Remove every occurrence of `item` from a flag list.
pub fn remove_flag(config: &BuildConfig, list: FlagList, item: &str) -> BuildConfig {
    override_config(config, |old| {
        let flags = list.get(old).iter().filter(|f| *f != item).cloned().collect();
        list.set(ConfigPatch::new(), flags)
    })
}

// Toggles

pub fn do_jailbreak(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Jailbreak, true)
}

pub fn dont_jailbreak(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Jailbreak, false)
}

pub fn do_check(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Check, true)
}

pub fn dont_check(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Check, false)
}

pub fn do_benchmark(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Benchmark, true)
}

pub fn dont_benchmark(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Benchmark, false)
}

pub fn do_haddock(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Haddock, true)
}

pub fn dont_haddock(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Haddock, false)
}

pub fn do_coverage(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Coverage, true)
}

pub fn dont_coverage(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Coverage, false)
}

pub fn do_strip(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::DontStrip, false)
}

pub fn dont_strip(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::DontStrip, true)
}

pub fn enable_library_profiling(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::LibraryProfiling, true)
}

pub fn disable_library_profiling(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::LibraryProfiling, false)
}

pub fn enable_executable_profiling(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::ExecutableProfiling, true)
}

pub fn disable_executable_profiling(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::ExecutableProfiling, false)
}

pub fn enable_shared_libraries(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::SharedLibraries, true)
}

pub fn disable_shared_libraries(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::SharedLibraries, false)
}

pub fn enable_shared_executables(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::SharedExecutables, true)
}

pub fn disable_shared_executables(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::SharedExecutables, false)
}

pub fn enable_static_libraries(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::StaticLibraries, true)
}

pub fn disable_static_libraries(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::StaticLibraries, false)
}

pub fn enable_separate_data_output(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::SeparateDataOutput, true)
}

pub fn dont_hyperlink_source(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::HyperlinkSource, false)
}

/// Build only statically linked executables: no shared executables, no
/// library output, no documentation.
pub fn just_static_executables(config: &BuildConfig) -> BuildConfig {
    override_config(config, |_| {
        ConfigPatch::new()
            .enable_shared_executables(Some(false))
            .is_library(Some(false))
            .do_haddock(Some(false))
    })
}

// Distribution

/// Let CI build the package on every platform it supports.
pub fn do_distribute(config: &BuildConfig) -> BuildConfig {
    override_config(config, |old| ConfigPatch::new().hydra_platforms(old.platforms.clone()))
}

/// Keep CI from building the package.
pub fn dont_distribute(config: &BuildConfig) -> BuildConfig {
    override_config(config, |_| ConfigPatch::new().hydra_platforms(Some(Vec::new())))
}

/// Mark the package broken and keep CI from building it.
pub fn mark_broken(config: &BuildConfig) -> BuildConfig {
    override_config(config, |_| {
        ConfigPatch::new()
            .broken(Some(true))
            .hydra_platforms(Some(Vec::new()))
    })
}

/// Clear the broken mark. Distribution settings are left as they are.
pub fn unmark_broken(config: &BuildConfig) -> BuildConfig {
    set_toggle(config, Toggle::Broken, false)
}

// Flags

pub fn append_configure_flag(config: &BuildConfig, flag: impl Into<String>) -> BuildConfig {
    append_flags(config, FlagList::ConfigureFlags, [flag])
}

pub fn append_configure_flags<I, S>(config: &BuildConfig, flags: I) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    append_flags(config, FlagList::ConfigureFlags, flags)
}

pub fn remove_configure_flag(config: &BuildConfig, flag: &str) -> BuildConfig {
    remove_flag(config, FlagList::ConfigureFlags, flag)
}

pub fn append_build_flag(config: &BuildConfig, flag: impl Into<String>) -> BuildConfig {
    append_flags(config, FlagList::BuildFlags, [flag])
}

pub fn append_build_flags<I, S>(config: &BuildConfig, flags: I) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    append_flags(config, FlagList::BuildFlags, flags)
}

/// Turn a Cabal flag on, replacing any earlier `-f-flag`.
pub fn enable_cabal_flag(config: &BuildConfig, flag: &str) -> BuildConfig {
    let config = remove_configure_flag(config, &format!("-f-{flag}"));
    append_configure_flag(&config, format!("-f{flag}"))
}

/// Turn a Cabal flag off, replacing any earlier `-fflag`.
pub fn disable_cabal_flag(config: &BuildConfig, flag: &str) -> BuildConfig {
    let config = remove_configure_flag(config, &format!("-f{flag}"));
    append_configure_flag(&config, format!("-f-{flag}"))
}

/// Make every GHC warning an error.
pub fn fail_on_all_warnings(config: &BuildConfig) -> BuildConfig {
    append_configure_flags(config, ["--ghc-option=-Wall", "--ghc-option=-Werror"])
}

pub fn append_patch(config: &BuildConfig, patch: impl Into<String>) -> BuildConfig {
    append_flags(config, FlagList::Patches, [patch])
}

pub fn append_patches<I, S>(config: &BuildConfig, patches: I) -> BuildConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    append_flags(config, FlagList::Patches, patches)
}

// Dependencies

pub fn add_build_tool(config: &BuildConfig, tool: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::BuildTools, [tool])
}

pub fn add_build_tools<I>(config: &BuildConfig, tools: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::BuildTools, tools)
}

pub fn add_extra_library(config: &BuildConfig, library: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::ExtraLibraries, [library])
}

pub fn add_extra_libraries<I>(config: &BuildConfig, libraries: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::ExtraLibraries, libraries)
}

/// Add a Haskell dependency of the library.
pub fn add_build_depend(config: &BuildConfig, depend: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::LibraryEcosystem, [depend])
}

pub fn add_build_depends<I>(config: &BuildConfig, depends: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::LibraryEcosystem, depends)
}

pub fn add_test_tool_depend(config: &BuildConfig, tool: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::TestTool, [tool])
}

pub fn add_test_tool_depends<I>(config: &BuildConfig, tools: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::TestTool, tools)
}

pub fn add_pkgconfig_depend(config: &BuildConfig, depend: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::LibraryPkgconfig, [depend])
}

pub fn add_pkgconfig_depends<I>(config: &BuildConfig, depends: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::LibraryPkgconfig, depends)
}

pub fn add_setup_depend(config: &BuildConfig, depend: DependencyHandle) -> BuildConfig {
    append_depends(config, DependsList::Setup, [depend])
}

pub fn add_setup_depends<I>(config: &BuildConfig, depends: I) -> BuildConfig
where
    I: IntoIterator<Item = DependencyHandle>,
{
    append_depends(config, DependsList::Setup, depends)
}

// Source

/// Build from a different source tree.
///
/// A Hackage revision belongs to the original tarball, so the edited
/// `.cabal` file is dropped. The version is kept unless a new one is given.
pub fn override_src(
    config: &BuildConfig,
    src: impl Into<String>,
    version: Option<&str>,
) -> BuildConfig {
    let src = src.into();
    override_config(config, |old| {
        ConfigPatch::new()
            .src(Some(src))
            .version(version.map_or_else(|| old.version.clone(), str::to_string))
            .edited_cabal_file(None)
    })
}

/// A boxed override, as stored in an `Overrides` chain.
pub type Override = Box<dyn Fn(&BuildConfig) -> BuildConfig>;

/// An ordered chain of overrides, applied left to right.
#[derive(Default)]
pub struct Overrides {
    steps: Vec<Override>,
}

impl Overrides {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an override to the chain.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: Fn(&BuildConfig) -> BuildConfig + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every override in order, starting from `config`.
    pub fn apply(&self, config: &BuildConfig) -> BuildConfig {
        self.steps
            .iter()
            .fold(config.clone(), |acc, step| step(&acc))
    }
}

impl std::fmt::Debug for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overrides").field("steps", &self.steps.len()).finish()
    }
}
