//! neve-hs - Haskell package build tooling for Neve.
//! neve-hs - Neve 的 Haskell 软件包构建工具。

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::patch::PatchOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "neve-hs")]
#[command(author, version, about = "Inspect and override Haskell package builds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Classify the build inputs of a package. / 对软件包的构建输入进行分类。
    Classify {
        /// Build config (JSON). / 构建配置（JSON）。
        config: PathBuf,

        /// Toolchain description (JSON). / 工具链描述（JSON）。
        #[arg(long)]
        toolchain: Option<PathBuf>,

        /// Run tests by default only on compilers newer than this.
        /// 仅在比此版本更新的编译器上默认运行测试。
        #[arg(long)]
        check_threshold: Option<String>,

        /// Print the result as JSON. / 以 JSON 格式打印结果。
        #[arg(long)]
        json: bool,
    },

    /// Apply overrides to a build config. / 对构建配置应用覆盖。
    Override {
        /// Build config (JSON). / 构建配置（JSON）。
        config: PathBuf,

        /// Disable the test suite. / 禁用测试套件。
        #[arg(long)]
        dont_check: bool,

        /// Enable the test suite. / 启用测试套件。
        #[arg(long)]
        do_check: bool,

        /// Enable benchmarks. / 启用基准测试。
        #[arg(long)]
        do_benchmark: bool,

        /// Disable benchmarks. / 禁用基准测试。
        #[arg(long)]
        dont_benchmark: bool,

        /// Strip version bounds. / 移除版本约束。
        #[arg(long)]
        jailbreak: bool,

        /// Mark the package broken. / 将软件包标记为损坏。
        #[arg(long)]
        mark_broken: bool,

        /// Append a configure flag. / 追加 configure 参数。
        #[arg(long = "configure-flag", value_name = "FLAG")]
        configure_flags: Vec<String>,

        /// Remove a configure flag. / 移除 configure 参数。
        #[arg(long = "remove-configure-flag", value_name = "FLAG")]
        remove_configure_flags: Vec<String>,

        /// Enable a Cabal flag. / 启用 Cabal 标志。
        #[arg(long = "enable-cabal-flag", value_name = "FLAG")]
        enable_cabal_flags: Vec<String>,

        /// Disable a Cabal flag. / 禁用 Cabal 标志。
        #[arg(long = "disable-cabal-flag", value_name = "FLAG")]
        disable_cabal_flags: Vec<String>,

        /// Add a Haskell dependency. / 添加 Haskell 依赖。
        #[arg(long = "build-depend", value_name = "PACKAGE")]
        build_depends: Vec<String>,

        /// Build from a different source. / 从其他源码构建。
        #[arg(long)]
        src: Option<String>,
    },
}

/// Install the log subscriber. `RUST_LOG` takes precedence over `--verbose`.
/// 安装日志订阅者。`RUST_LOG` 优先于 `--verbose`。
fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Classify {
            config,
            toolchain,
            check_threshold,
            json,
        } => commands::classify::run(
            &config,
            toolchain.as_deref(),
            check_threshold.as_deref(),
            json,
        ),
        Commands::Override {
            config,
            dont_check,
            do_check,
            do_benchmark,
            dont_benchmark,
            jailbreak,
            mark_broken,
            configure_flags,
            remove_configure_flags,
            enable_cabal_flags,
            disable_cabal_flags,
            build_depends,
            src,
        } => {
            let options = PatchOptions {
                dont_check,
                do_check,
                do_benchmark,
                dont_benchmark,
                jailbreak,
                mark_broken,
                configure_flags,
                remove_configure_flags,
                enable_cabal_flags,
                disable_cabal_flags,
                build_depends,
                src,
            };
            commands::patch::run(&config, &options)
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
