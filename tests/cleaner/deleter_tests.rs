// Tests for the deletion executor

use dirsweep::cleaner::delete_tree;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_removes_tree_and_accounts_contents() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("node_modules");
    fs::create_dir_all(target.join("pkg/sub")).unwrap();
    fs::write(target.join("pkg/index.js"), b"1234567890").unwrap();
    fs::write(target.join("pkg/sub/util.js"), b"abcde").unwrap();

    let stats = delete_tree(&target);

    assert!(!target.exists());
    assert_eq!(stats.files(), 2);
    assert_eq!(stats.bytes(), 15);
    assert_eq!(stats.directories(), 3);
}

#[test]
fn test_missing_target_is_not_an_error() {
    let dir = tempdir().unwrap();
    let stats = delete_tree(&dir.path().join("gone"));

    assert_eq!(stats.files(), 0);
    assert_eq!(stats.directories(), 0);
    assert_eq!(stats.bytes(), 0);
}

#[test]
fn test_siblings_are_untouched() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("venv");
    let sibling = dir.path().join("src");
    fs::create_dir_all(&target).unwrap();
    fs::create_dir_all(&sibling).unwrap();
    fs::write(sibling.join("main.rs"), b"fn main() {}").unwrap();

    delete_tree(&target);

    assert!(!target.exists());
    assert!(sibling.join("main.rs").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_removed_not_followed() {
    let dir = tempdir().unwrap();
    let outside = dir.path().join("outside");
    fs::create_dir_all(&outside).unwrap();
    fs::write(outside.join("keep.txt"), b"keep").unwrap();

    let target = dir.path().join("node_modules");
    fs::create_dir_all(&target).unwrap();
    std::os::unix::fs::symlink(&outside, target.join("link")).unwrap();

    delete_tree(&target);

    assert!(!target.exists());
    assert!(outside.join("keep.txt").exists());
}
