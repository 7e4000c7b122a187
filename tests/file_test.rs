mod common;
use common::*;
use std::fs;

#[test]
fn test_del_missing_file_reports_and_continues() {
    let out = run("del missing.txt\necho next");
    assert_eq!(out, "?FILE NOT FOUND IN LINE 1; missing.txt\nnext");
}

#[test]
fn test_copy_del_mkdir_through_a_script() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "payload").unwrap();
    let source = format!(
        "set DIR={}\n\
         copy %DIR%/a.txt %DIR%/b.txt\n\
         del %DIR%/a.txt\n\
         mkdir %DIR%/sub",
        dir.path().display()
    );
    let out = run(&source);
    let base = dir.path().display();
    assert_eq!(
        out,
        format!(
            "Copied {base}/a.txt to {base}/b.txt\n\
             Deleted: {base}/a.txt\n\
             Directory created: {base}/sub",
            base = base
        )
    );
    assert!(!dir.path().join("a.txt").exists());
    assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "payload");
    assert!(dir.path().join("sub").is_dir());
}

#[test]
fn test_move_and_ren_through_a_script() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let source = format!(
        "set DIR={}\n\
         move %DIR%/a.txt %DIR%/sub/a.txt\n\
         ren %DIR%/sub/a.txt %DIR%/sub/renamed.txt",
        dir.path().display()
    );
    run(&source);
    assert!(!dir.path().join("a.txt").exists());
    assert!(dir.path().join("sub").join("renamed.txt").exists());
}

#[test]
fn test_mkdir_existing_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let source = format!("mkdir {}\necho next", dir.path().display());
    let out = run(&source);
    assert_eq!(
        out,
        format!("?FILE ALREADY EXISTS IN LINE 1; {}\nnext", dir.path().display())
    );
}

#[test]
fn test_dir_lists_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "").unwrap();
    fs::write(dir.path().join("two.txt"), "").unwrap();
    let out = run(&format!("dir {}", dir.path().display()));
    // name order, whatever order the filesystem returns
    assert_eq!(out.lines().collect::<Vec<&str>>(), vec!["one.txt", "two.txt"]);
}

#[test]
fn test_dir_recursive_lists_files_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("top.txt"), "").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("deep.txt"), "").unwrap();
    let out = run(&format!("dir {} /s", dir.path().display()));
    let paths: Vec<&str> = out.lines().collect();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("deep.txt"));
    assert!(paths[1].ends_with("top.txt"));
}

#[test]
fn test_dir_missing_path_reports_and_continues() {
    let out = run("dir definitely-not-here\necho next");
    assert_eq!(
        out,
        "?FILE NOT FOUND IN LINE 1; definitely-not-here\nnext"
    );
}
