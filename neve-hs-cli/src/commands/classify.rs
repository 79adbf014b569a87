//! The `neve-hs classify` command.
//! `neve-hs classify` 命令。

use crate::commands::{load_config, load_toolchain};
use crate::output;
use neve_cabal::Version;
use neve_haskell::{PhasePolicy, classify_with};
use std::path::Path;

/// Classify the build inputs of a package.
/// 对软件包的构建输入进行分类。
pub fn run(
    config: &Path,
    toolchain: Option<&Path>,
    check_threshold: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let config = load_config(config)?;
    let toolchain = load_toolchain(toolchain)?;

    let mut policy = PhasePolicy::new();
    if let Some(threshold) = check_threshold {
        let version = Version::parse(threshold)
            .map_err(|e| format!("invalid --check-threshold '{}': {}", threshold, e))?;
        policy = policy.check_threshold(version);
    }

    let inputs = classify_with(&config, &toolchain, &policy);

    if json {
        let rendered = serde_json::to_string_pretty(&inputs)
            .map_err(|e| format!("cannot render classification: {}", e))?;
        println!("{rendered}");
        return Ok(());
    }

    if config.pname.is_empty() {
        output::warning("config has no pname");
    }

    println!(
        "{} with {} {}",
        config.display_name(),
        toolchain.name(),
        toolchain.version()
    );
    println!(
        "doCheck = {}, doBenchmark = {}",
        inputs.phases.do_check, inputs.phases.do_benchmark
    );
    println!();

    output::header("propagated inputs", inputs.propagated_inputs.len());
    output::handles(&inputs.propagated_inputs);
    output::header("other inputs", inputs.other_inputs.len());
    output::handles(&inputs.other_inputs);
    output::header("haskell inputs", inputs.ecosystem_inputs.len());
    output::handles(&inputs.ecosystem_inputs);
    output::header("system inputs", inputs.system_inputs.len());
    output::handles(&inputs.system_inputs);

    Ok(())
}
