//! Integration tests for build-input classification.

use neve_haskell::{
    BuildConfig, DependencyHandle, PhasePolicy, ToolchainInfo, Version, classify, classify_with,
    control_phases, haskell_build_inputs,
};

fn pkg(name: &str) -> DependencyHandle {
    DependencyHandle::package(name)
}

fn lib(name: &str) -> DependencyHandle {
    DependencyHandle::system_library(name)
}

fn pc(name: &str) -> DependencyHandle {
    DependencyHandle::pkg_config(name)
}

fn tool(name: &str) -> DependencyHandle {
    DependencyHandle::tool(name)
}

fn ghc(version: &str) -> ToolchainInfo {
    ToolchainInfo::new("ghc", Version::parse(version).unwrap())
}

/// A config with two entries in every dependency list, named after the list.
fn full_config() -> BuildConfig {
    BuildConfig {
        setup_depends: vec![pkg("setup1"), pkg("setup2")],
        extra_libraries: vec![lib("extra1"), lib("extra2")],
        library_system_depends: vec![lib("libsys1"), lib("libsys2")],
        executable_system_depends: vec![lib("exesys1"), lib("exesys2")],
        pkgconfig_depends: vec![pc("pc1"), pc("pc2")],
        library_pkgconfig_depends: vec![pc("libpc1"), pc("libpc2")],
        executable_pkgconfig_depends: vec![pc("exepc1"), pc("exepc2")],
        test_pkgconfig_depends: vec![pc("testpc1"), pc("testpc2")],
        benchmark_pkgconfig_depends: vec![pc("benchpc1"), pc("benchpc2")],
        test_depends: vec![pkg("test1"), pkg("test2")],
        test_ecosystem_depends: vec![pkg("tesths1"), pkg("tesths2")],
        test_system_depends: vec![lib("testsys1"), lib("testsys2")],
        test_tool_depends: vec![tool("testtool1"), tool("testtool2")],
        benchmark_depends: vec![pkg("bench1"), pkg("bench2")],
        benchmark_ecosystem_depends: vec![pkg("benchhs1"), pkg("benchhs2")],
        benchmark_system_depends: vec![lib("benchsys1"), lib("benchsys2")],
        benchmark_tool_depends: vec![tool("benchtool1"), tool("benchtool2")],
        build_depends: vec![pkg("build1"), pkg("build2")],
        library_ecosystem_depends: vec![pkg("libhs1"), pkg("libhs2")],
        executable_ecosystem_depends: vec![pkg("exehs1"), pkg("exehs2")],
        ..BuildConfig::new("everything", "1.0")
    }
}

fn names(list: &[DependencyHandle]) -> Vec<&str> {
    list.iter().map(DependencyHandle::name).collect()
}

// Totality

#[test]
fn test_empty_config_default_toolchain() {
    let inputs = classify(&BuildConfig::default(), &ToolchainInfo::default());

    assert!(inputs.ecosystem_inputs.is_empty());
    assert!(inputs.system_inputs.is_empty());
    assert!(inputs.propagated_inputs.is_empty());
    assert!(inputs.other_inputs.is_empty());
    assert!(inputs.phases.do_check);
    assert!(!inputs.phases.do_benchmark);
}

// Phase gating

#[test]
fn test_test_depends_included_by_default() {
    let config = BuildConfig {
        test_depends: vec![pkg("hspec")],
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());
    assert_eq!(inputs.other_inputs, vec![pkg("hspec")]);
    assert_eq!(inputs.ecosystem_inputs, vec![pkg("hspec")]);
}

#[test]
fn test_explicit_dont_check_removes_test_depends() {
    let config = BuildConfig {
        test_depends: vec![pkg("hspec")],
        test_pkgconfig_depends: vec![pc("check")],
        do_check: Some(false),
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());
    assert!(inputs.other_inputs.is_empty());
    assert!(inputs.all_pkgconfig_depends.is_empty());
    assert!(!inputs.phases.do_check);
}

#[test]
fn test_benchmarks_need_explicit_enable() {
    let config = BuildConfig {
        benchmark_depends: vec![pkg("criterion")],
        benchmark_pkgconfig_depends: vec![pc("papi")],
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());
    assert!(inputs.other_inputs.is_empty());

    let config = BuildConfig {
        do_benchmark: Some(true),
        ..config
    };
    let inputs = classify(&config, &ToolchainInfo::default());
    assert_eq!(inputs.other_inputs, vec![pc("papi"), pkg("criterion")]);
    assert_eq!(inputs.all_pkgconfig_depends, vec![pc("papi")]);
}

// Cross compilation and compiler version

#[test]
fn test_cross_compiler_disables_check_by_default() {
    let toolchain = ghc("9.6.3").cross(ghc("9.6.3"));
    assert!(!control_phases(&BuildConfig::default(), &toolchain).do_check);
}

#[test]
fn test_old_cross_compiler_precedence() {
    let toolchain = ghc("7.2.2").cross(ghc("7.2.2"));

    let unspecified = BuildConfig::default();
    assert!(!control_phases(&unspecified, &toolchain).do_check);

    let explicit = BuildConfig {
        do_check: Some(true),
        ..BuildConfig::default()
    };
    assert!(control_phases(&explicit, &toolchain).do_check);

    let explicit_off = BuildConfig {
        do_check: Some(false),
        ..BuildConfig::default()
    };
    assert!(!control_phases(&explicit_off, &ghc("9.6.3")).do_check);
}

#[test]
fn test_old_native_compiler_disables_check() {
    assert!(!control_phases(&BuildConfig::default(), &ghc("7.0.4")).do_check);
    assert!(control_phases(&BuildConfig::default(), &ghc("8.10.7")).do_check);
}

#[test]
fn test_custom_threshold() {
    let policy = PhasePolicy::new().check_threshold(Version::parse("9.8").unwrap());
    let config = BuildConfig {
        test_depends: vec![pkg("tasty")],
        ..BuildConfig::default()
    };
    let inputs = classify_with(&config, &ghc("9.6.3"), &policy);
    assert!(!inputs.phases.do_check);
    assert!(inputs.other_inputs.is_empty());
}

// Partitioning

#[test]
fn test_stable_partition() {
    let config = BuildConfig {
        build_depends: vec![pkg("pkgA"), lib("sysB"), pkg("pkgC")],
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());

    assert_eq!(inputs.propagated_inputs, vec![pkg("pkgA"), lib("sysB"), pkg("pkgC")]);
    assert_eq!(inputs.ecosystem_inputs, vec![pkg("pkgA"), pkg("pkgC")]);
    assert_eq!(inputs.system_inputs, vec![lib("sysB")]);
}

#[test]
fn test_partition_spans_propagated_and_other() {
    let config = BuildConfig {
        build_depends: vec![pkg("base"), lib("gmp")],
        setup_depends: vec![pkg("Cabal"), tool("cpphs")],
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());

    assert_eq!(inputs.ecosystem_inputs, vec![pkg("base"), pkg("Cabal")]);
    assert_eq!(inputs.system_inputs, vec![lib("gmp"), tool("cpphs")]);
    assert_eq!(haskell_build_inputs(&config, &ToolchainInfo::default()), inputs.ecosystem_inputs);
}

// Alternate backend

#[test]
fn test_alternate_backend_adds_native_compiler_once() {
    let native = ghc("8.10.7");
    let toolchain = ToolchainInfo::new("ghcjs", Version::parse("8.10.7").unwrap())
        .alternate_backend(native.clone());

    for (do_check, do_benchmark) in [(false, false), (true, false), (false, true), (true, true)] {
        let config = BuildConfig {
            do_check: Some(do_check),
            do_benchmark: Some(do_benchmark),
            ..BuildConfig::default()
        };
        let inputs = classify(&config, &toolchain);
        assert_eq!(inputs.other_inputs, vec![native.handle()]);
        assert_eq!(inputs.system_inputs, vec![native.handle()]);
        assert!(inputs.ecosystem_inputs.is_empty());
    }
}

#[test]
fn test_alternate_backend_position() {
    let toolchain = ToolchainInfo::new("ghcjs", Version::parse("8.10.7").unwrap())
        .alternate_backend(ghc("8.10.7"));
    let config = BuildConfig {
        test_depends: vec![pkg("hspec")],
        benchmark_depends: vec![pkg("gauge")],
        do_benchmark: Some(true),
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &toolchain);
    assert_eq!(names(&inputs.other_inputs), vec!["hspec", "ghc-8.10.7", "gauge"]);
}

#[test]
fn test_cross_compiler_adds_no_native_input() {
    let toolchain = ghc("9.6.3").cross(ghc("9.6.3"));
    let inputs = classify(&BuildConfig::default(), &toolchain);
    assert!(inputs.other_inputs.is_empty());
}

// Ordering

#[test]
fn test_other_inputs_order_all_phases() {
    let config = BuildConfig {
        do_check: Some(true),
        do_benchmark: Some(true),
        ..full_config()
    };
    let inputs = classify(&config, &ToolchainInfo::default());

    assert_eq!(
        names(&inputs.propagated_inputs),
        vec!["build1", "build2", "libhs1", "libhs2", "exehs1", "exehs2"]
    );
    assert_eq!(
        names(&inputs.all_pkgconfig_depends),
        vec![
            "pc1", "pc2", "libpc1", "libpc2", "exepc1", "exepc2", "testpc1", "testpc2",
            "benchpc1", "benchpc2",
        ]
    );
    assert_eq!(
        names(&inputs.other_inputs),
        vec![
            "setup1", "setup2", "extra1", "extra2", "libsys1", "libsys2", "exesys1", "exesys2",
            "pc1", "pc2", "libpc1", "libpc2", "exepc1", "exepc2", "testpc1", "testpc2",
            "benchpc1", "benchpc2", "test1", "test2", "tesths1", "tesths2", "testsys1",
            "testsys2", "testtool1", "testtool2", "bench1", "bench2", "benchhs1", "benchhs2",
            "benchsys1", "benchsys2", "benchtool1", "benchtool2",
        ]
    );
}

#[test]
fn test_other_inputs_order_no_optional_phases() {
    let config = BuildConfig {
        do_check: Some(false),
        ..full_config()
    };
    let inputs = classify(&config, &ToolchainInfo::default());

    assert_eq!(
        names(&inputs.other_inputs),
        vec![
            "setup1", "setup2", "extra1", "extra2", "libsys1", "libsys2", "exesys1", "exesys2",
            "pc1", "pc2", "libpc1", "libpc2", "exepc1", "exepc2",
        ]
    );
}

#[test]
fn test_ecosystem_inputs_follow_all_inputs_order() {
    let inputs = classify(&full_config(), &ToolchainInfo::default());
    let expected: Vec<_> = inputs
        .all_inputs()
        .into_iter()
        .filter(DependencyHandle::is_ecosystem_package)
        .collect();
    assert_eq!(inputs.ecosystem_inputs, expected);
    assert_eq!(
        inputs.ecosystem_inputs.len() + inputs.system_inputs.len(),
        inputs.all_inputs().len()
    );
}

#[test]
fn test_duplicates_retained() {
    let config = BuildConfig {
        build_depends: vec![pkg("text"), pkg("text")],
        library_ecosystem_depends: vec![pkg("text")],
        extra_libraries: vec![lib("z"), lib("z")],
        ..BuildConfig::default()
    };
    let inputs = classify(&config, &ToolchainInfo::default());

    assert_eq!(names(&inputs.propagated_inputs), vec!["text", "text", "text"]);
    assert_eq!(names(&inputs.other_inputs), vec!["z", "z"]);
    assert_eq!(inputs.ecosystem_inputs.len(), 3);
    assert_eq!(inputs.system_inputs.len(), 2);
}

#[test]
fn test_classify_does_not_modify_config() {
    let config = full_config();
    let before = config.clone();
    let _ = classify(&config, &ToolchainInfo::default());
    assert_eq!(config, before);
}

#[test]
fn test_build_inputs_json() {
    let config = BuildConfig {
        build_depends: vec![pkg("base")],
        ..BuildConfig::default()
    };
    let json = serde_json::to_value(classify(&config, &ToolchainInfo::default())).unwrap();
    assert_eq!(json["ecosystemInputs"][0]["name"], "base");
    assert_eq!(json["phases"]["doCheck"], true);
}
