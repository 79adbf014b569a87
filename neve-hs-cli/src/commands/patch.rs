//! The `neve-hs override` command.
//! `neve-hs override` 命令。

use crate::commands::load_config;
use neve_cabal::DependencyHandle;
use neve_haskell::Overrides;
use neve_haskell::overrides::{
    add_build_depend, append_configure_flag, disable_cabal_flag, do_benchmark, do_check,
    do_jailbreak, dont_benchmark, dont_check, enable_cabal_flag, mark_broken, override_src,
    remove_configure_flag,
};
use std::path::Path;
use tracing::debug;

/// Overrides requested on the command line.
/// 命令行请求的覆盖操作。
#[derive(Debug, Default)]
pub struct PatchOptions {
    pub dont_check: bool,
    pub do_check: bool,
    pub do_benchmark: bool,
    pub dont_benchmark: bool,
    pub jailbreak: bool,
    pub mark_broken: bool,
    pub configure_flags: Vec<String>,
    pub remove_configure_flags: Vec<String>,
    pub enable_cabal_flags: Vec<String>,
    pub disable_cabal_flags: Vec<String>,
    pub build_depends: Vec<String>,
    pub src: Option<String>,
}

impl PatchOptions {
    /// Turn the options into an override chain.
    ///
    /// Steps run in the order the fields are declared, so a `--do-check`
    /// given together with `--dont-check` wins.
    pub fn to_overrides(&self) -> Overrides {
        let mut chain = Overrides::new();

        if self.dont_check {
            chain = chain.then(dont_check);
        }
        if self.do_check {
            chain = chain.then(do_check);
        }
        if self.do_benchmark {
            chain = chain.then(do_benchmark);
        }
        if self.dont_benchmark {
            chain = chain.then(dont_benchmark);
        }
        if self.jailbreak {
            chain = chain.then(do_jailbreak);
        }
        if self.mark_broken {
            chain = chain.then(mark_broken);
        }
        for flag in self.configure_flags.clone() {
            chain = chain.then(move |c| append_configure_flag(c, flag.clone()));
        }
        for flag in self.remove_configure_flags.clone() {
            chain = chain.then(move |c| remove_configure_flag(c, &flag));
        }
        for flag in self.enable_cabal_flags.clone() {
            chain = chain.then(move |c| enable_cabal_flag(c, &flag));
        }
        for flag in self.disable_cabal_flags.clone() {
            chain = chain.then(move |c| disable_cabal_flag(c, &flag));
        }
        for name in self.build_depends.clone() {
            chain = chain.then(move |c| {
                add_build_depend(c, DependencyHandle::package(name.clone()))
            });
        }
        if let Some(src) = self.src.clone() {
            chain = chain.then(move |c| override_src(c, src.clone(), None));
        }

        chain
    }
}

/// Apply overrides to a config file and print the result.
/// 对配置文件应用覆盖并打印结果。
pub fn run(config: &Path, options: &PatchOptions) -> Result<(), String> {
    let base = load_config(config)?;
    let chain = options.to_overrides();
    debug!(steps = chain.len(), "applying overrides");

    let patched = chain.apply(&base);
    let rendered = patched
        .to_json()
        .map_err(|e| format!("cannot render config: {}", e))?;
    println!("{rendered}");
    Ok(())
}
