use std::env;
use std::path::PathBuf;

use asm_mirror::config::{expand_path, parse_config};

#[test]
fn test_expand_path_with_env_variables() {
    unsafe {
        env::set_var("ASM_MIRROR_TEST_VAR", "kernel");
    }

    let expanded = expand_path("$ASM_MIRROR_TEST_VAR/src");
    assert_eq!(expanded, "kernel/src");

    // Tilde and variables together
    let expanded = expand_path("~/$ASM_MIRROR_TEST_VAR/asm");
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .unwrap_or_default();
    assert_eq!(expanded, format!("{home}/kernel/asm"));

    unsafe {
        env::remove_var("ASM_MIRROR_TEST_VAR");
    }
}

#[test]
fn test_expand_path_with_missing_env_variables() {
    unsafe {
        env::remove_var("ASM_MIRROR_MISSING_VAR");
    }

    // Falls back to tilde expansion only, leaving the variable in place
    let expanded = expand_path("$ASM_MIRROR_MISSING_VAR/src");
    assert_eq!(expanded, "$ASM_MIRROR_MISSING_VAR/src");
}

#[test]
fn test_config_root_is_expanded() {
    unsafe {
        env::set_var("ASM_MIRROR_CONFIG_VAR", "project");
    }

    let config = parse_config(
        "rules:\n  - title: forward\n    root: $ASM_MIRROR_CONFIG_VAR/src\n    extension: .S\n    root_from: src\n    root_to: asm\n",
    )
    .unwrap();
    assert_eq!(config.rules[0].root, PathBuf::from("project/src"));

    unsafe {
        env::remove_var("ASM_MIRROR_CONFIG_VAR");
    }
}
