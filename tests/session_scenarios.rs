use std::fs;
use std::io::Cursor;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use fexplore::core::session::Session;
use fexplore::highlight::SyntaxHighlighter;
use fexplore::input::ScriptInput;
use fexplore::shell::Repl;
use filetime::FileTime;
use tempfile::tempdir;

struct Transcript {
    out: String,
    err: String,
}

fn run_in(dir: &Path, script: &str) -> (Repl, Transcript) {
    let mut repl = Repl::new(Session::with_dir(dir), SyntaxHighlighter::plain(), true);
    let mut input = ScriptInput::new(Cursor::new(script.to_string()));
    let mut out = Vec::new();
    let mut err = Vec::new();
    repl.run(&mut input, &mut out, &mut err).unwrap();
    let transcript = Transcript {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    };
    (repl, transcript)
}

#[test]
fn ls_matches_directory_listing() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("one.txt"), b"1").unwrap();
    fs::write(tmp.path().join("two.txt"), b"22").unwrap();
    fs::create_dir(tmp.path().join("three")).unwrap();

    let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
    filetime::set_file_mtime(tmp.path().join("two.txt"), FileTime::from_system_time(mtime))
        .unwrap();

    let (_, t) = run_in(tmp.path(), "ls\n");
    let rows: Vec<&str> = t
        .out
        .lines()
        .filter(|l| l.starts_with('-') || l.starts_with('d'))
        .collect();
    assert_eq!(rows.len(), 3);

    let mut names: Vec<&str> = rows.iter().map(|r| r.rsplit(' ').next().unwrap()).collect();
    names.sort();
    assert_eq!(names, vec!["one.txt", "three/", "two.txt"]);

    let expected_time = DateTime::<Local>::from(mtime).format("%Y-%m-%d %H:%M").to_string();
    let two = rows.iter().find(|r| r.ends_with(" two.txt")).unwrap();
    assert!(two.contains(&format!("        2 {} two.txt", expected_time)));
}

#[test]
fn create_then_info_reports_empty_file() {
    let tmp = tempdir().unwrap();
    let (_, t) = run_in(tmp.path(), "create fresh.dat\ninfo fresh.dat\n");

    assert!(t.out.contains("Created."));
    assert!(t.out.contains("Size: 0 bytes"));
    assert!(t.out.contains("Type: file"));
    assert!(t.err.is_empty());
}

#[test]
fn copy_produces_identical_bytes() {
    let tmp = tempdir().unwrap();
    let data: Vec<u8> = (0..50_000u32).map(|i| (i * 7 % 256) as u8).collect();
    fs::write(tmp.path().join("a.bin"), &data).unwrap();
    fs::write(tmp.path().join("c.bin"), b"old content to overwrite").unwrap();

    let (_, t) = run_in(tmp.path(), "copy a.bin b.bin\ncopy a.bin c.bin\n");
    assert_eq!(t.out.matches("Copied.").count(), 2);
    assert_eq!(fs::read(tmp.path().join("b.bin")).unwrap(), data);
    assert_eq!(fs::read(tmp.path().join("c.bin")).unwrap(), data);
}

#[test]
fn move_removes_source_and_keeps_size() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("a"), b"0123456789").unwrap();

    let (_, t) = run_in(tmp.path(), "move a b\ninfo a\ninfo b\n");
    assert!(t.out.contains("Moved."));
    assert!(t.err.contains("stat: "));
    assert!(t.out.contains("Path: b\nSize: 10 bytes"));
    assert!(!tmp.path().join("a").exists());
}

#[test]
fn delete_refuses_directories() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("keep")).unwrap();
    fs::write(tmp.path().join("keep").join("x"), b"x").unwrap();
    fs::write(tmp.path().join("gone"), b"x").unwrap();

    let (_, t) = run_in(tmp.path(), "delete keep\ndelete gone\n");
    assert!(t.err.contains("directory deletion not implemented"));
    assert!(tmp.path().join("keep").join("x").exists());
    assert!(t.out.contains("Deleted."));
    assert!(!tmp.path().join("gone").exists());
}

#[test]
fn search_reports_exactly_the_matches() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("a").join("needle_dir")).unwrap();
    fs::write(tmp.path().join("a").join("needle_dir").join("hay"), b"").unwrap();
    fs::write(tmp.path().join("a").join("big_needle.txt"), b"").unwrap();
    fs::write(tmp.path().join("Needle"), b"").unwrap();
    fs::write(tmp.path().join("plain"), b"").unwrap();

    let (_, t) = run_in(tmp.path(), "search needle\n");
    let mut found: Vec<PathBuf> = t
        .out
        .lines()
        .filter_map(|l| l.strip_prefix("FOUND: "))
        .map(PathBuf::from)
        .collect();
    found.sort();
    assert_eq!(
        found,
        vec![
            PathBuf::from("./a/big_needle.txt"),
            PathBuf::from("./a/needle_dir"),
        ]
    );
}

#[test]
fn chmod_then_info_shows_permission_string() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("f"), b"").unwrap();
    fs::set_permissions(tmp.path().join("f"), fs::Permissions::from_mode(0o700)).unwrap();

    let (_, t) = run_in(tmp.path(), "chmod 644 f\ninfo f\n");
    assert!(t.out.contains("Permissions updated."));
    assert!(t.out.contains("Permissions: -rw-r--r--"));
}

#[test]
fn cd_to_missing_directory_keeps_working_directory() {
    let tmp = tempdir().unwrap();
    let (repl, t) = run_in(tmp.path(), "cd does-not-exist\npwd\n");

    assert!(t.err.contains("chdir: "));
    assert!(t.out.contains(&format!("{}\n", tmp.path().display())));
    assert_eq!(repl.session().current_dir(), tmp.path());
}

#[test]
fn usage_errors_are_reported_and_loop_continues() {
    let tmp = tempdir().unwrap();
    let (_, t) = run_in(
        tmp.path(),
        "info\ncopy one\nmove\ndelete\ncreate\nsearch\nchmod 644\nchmod xyz f\nwhat\npwd\n",
    );

    for message in [
        "info: missing path",
        "copy: need src dst",
        "move: need src dst",
        "delete: missing path",
        "create: missing path",
        "search: missing pattern",
        "chmod: usage chmod 644 file",
        "chmod: invalid octal mode: xyz",
        "Unknown command: what",
    ] {
        assert!(t.err.contains(message), "missing {:?} in {:?}", message, t.err);
    }
    assert!(t.out.ends_with("Goodbye!\n"));
}

#[test]
fn extra_tokens_are_ignored() {
    let tmp = tempdir().unwrap();
    let mut line = String::from("create x.txt");
    for i in 0..20 {
        line.push_str(&format!(" extra{}", i));
    }
    line.push('\n');

    let (_, t) = run_in(tmp.path(), &line);
    assert!(t.out.contains("Created."));
    assert!(tmp.path().join("x.txt").exists());
}
