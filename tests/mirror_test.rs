use std::fs::{create_dir_all, read_to_string, write};
use std::path::Path;

use asm_mirror::rules::TransformRule;
use asm_mirror::workflow::{MirrorOptions, mirror};
use tempfile::tempdir;

fn options_for(base: &Path) -> MirrorOptions {
    MirrorOptions {
        base_dir: base.to_path_buf(),
        dry_run: false,
    }
}

fn write_file(base: &Path, relative: &str, contents: &str) {
    let path = base.join(relative);
    create_dir_all(path.parent().unwrap()).unwrap();
    write(path, contents).unwrap();
}

#[test]
fn test_forward_scenario() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/a/b.S", "mov r0, r1");

    let context = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(context.stats.files_copied, 1);
    assert_eq!(
        read_to_string(dir.path().join("asm/a/b.S")).unwrap(),
        "mov r0, r1"
    );
    // The source is left where it was
    assert_eq!(
        read_to_string(dir.path().join("src/a/b.S")).unwrap(),
        "mov r0, r1"
    );
}

#[test]
fn test_reverse_scenario_removes_asm_segment() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "asm/a/b.asm", "ldr r2, [r3]");

    mirror(
        Path::new("asm"),
        &TransformRule::reverse(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(
        read_to_string(dir.path().join("a/b.S")).unwrap(),
        "ldr r2, [r3]"
    );
    // The asm segment is removed, not replaced with src
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_every_match_copied_and_nothing_else() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/boot/entry.S", "j _start");
    write_file(dir.path(), "src/arch/x86/switch.S", "push %rbp");
    write_file(dir.path(), "src/trap.S", "sret");
    write_file(dir.path(), "src/main.rs", "fn main() {}");
    write_file(dir.path(), "src/arch/x86/notes.s", "lowercase is not a match");
    write_file(dir.path(), "src/arch/x86/old.S.orig", "suffix must be last");

    let context = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(context.stats.files_visited, 6);
    assert_eq!(context.stats.files_matched, 3);
    assert_eq!(context.stats.files_copied, 3);

    for (relative, contents) in [
        ("boot/entry.S", "j _start"),
        ("arch/x86/switch.S", "push %rbp"),
        ("trap.S", "sret"),
    ] {
        let copied = dir.path().join("asm").join(relative);
        assert_eq!(read_to_string(copied).unwrap(), contents);
    }

    assert!(!dir.path().join("asm/main.rs").exists());
    assert!(!dir.path().join("asm/arch/x86/notes.s").exists());
    assert!(!dir.path().join("asm/arch/x86/old.S.orig").exists());
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/a/b.S", "mov r0, r1");
    write_file(dir.path(), "src/c.S", "bx lr");
    let rule = TransformRule::forward();
    let options = options_for(dir.path());

    mirror(Path::new("src"), &rule, &options).unwrap();
    let first = read_to_string(dir.path().join("asm/a/b.S")).unwrap();

    let context = mirror(Path::new("src"), &rule, &options).unwrap();
    let second = read_to_string(dir.path().join("asm/a/b.S")).unwrap();

    assert_eq!(first, second);
    assert_eq!(context.stats.files_copied, 2);
    assert_eq!(read_to_string(dir.path().join("asm/c.S")).unwrap(), "bx lr");
}

#[test]
fn test_existing_destination_is_overwritten() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/a/b.S", "mov r0, r1");
    write_file(dir.path(), "asm/a/b.S", "stale contents from an older run");

    mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(
        read_to_string(dir.path().join("asm/a/b.S")).unwrap(),
        "mov r0, r1"
    );
}

#[test]
fn test_missing_root_produces_nothing() {
    let dir = tempdir().unwrap();

    let context = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(context.stats.files_visited, 0);
    assert_eq!(context.stats.files_copied, 0);
    assert!(!dir.path().join("asm").exists());
}

#[test]
fn test_forward_then_reverse_is_not_a_round_trip() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/a/b.S", "mov r0, r1");
    write_file(dir.path(), "asm/a/c.asm", "ldr r2, [r3]");
    let options = options_for(dir.path());

    mirror(Path::new("src"), &TransformRule::forward(), &options).unwrap();
    mirror(Path::new("asm"), &TransformRule::reverse(), &options).unwrap();

    // Forward output has the .S extension, so reverse only picks up c.asm
    assert_eq!(read_to_string(dir.path().join("a/c.S")).unwrap(), "ldr r2, [r3]");
    assert!(!dir.path().join("a/b.S").exists());
    assert!(!dir.path().join("src/a/c.S").exists());
}

#[test]
fn test_destination_directory_failure_aborts() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/a/b.S", "mov r0, r1");
    // A regular file where the destination directory should be
    write_file(dir.path(), "asm", "not a directory");

    let result = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    );

    let err = result.unwrap_err();
    assert!(format!("{err}").contains("create directory"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_a_traversal_error() {
    use std::fs::{read_dir, set_permissions, Permissions};
    use std::os::unix::fs::PermissionsExt;

    use asm_mirror::errors::Error;

    let dir = tempdir().unwrap();
    write_file(dir.path(), "src/locked/x.S", "mov r0, r1");
    let locked = dir.path().join("src/locked");
    set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user
    if read_dir(&locked).is_ok() {
        set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    );
    set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Traversal { .. }), "{err:?}");
    assert!(format!("{err}").contains("locked"));
    assert!(!dir.path().join("asm/locked/x.S").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_unicode_file_names_are_mirrored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let name = OsStr::from_bytes(b"bo\xffot.S");
    create_dir_all(dir.path().join("src/k")).unwrap();
    write(dir.path().join("src/k").join(name), "mov r0, r1").unwrap();

    let context = mirror(
        Path::new("src"),
        &TransformRule::forward(),
        &options_for(dir.path()),
    )
    .unwrap();

    assert_eq!(context.stats.files_copied, 1);
    let copied = dir.path().join("asm/k").join(OsStr::from_bytes(b"bo\xffot.asm"));
    assert_eq!(read_to_string(copied).unwrap(), "mov r0, r1");
}
