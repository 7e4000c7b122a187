mod common;
use blb::mach::{Runtime, Script};
use common::*;

#[test]
fn test_echo_with_substitution() {
    let out = run("set NAME=Ferris\necho hello %NAME%");
    assert_eq!(out, "hello Ferris");
}

#[test]
fn test_unbound_reference_passes_through() {
    assert_eq!(run("echo %NOBODY% here"), "%NOBODY% here");
}

#[test]
fn test_set_last_write_wins() {
    assert_eq!(run("set X=1\nset X=2\necho %X%"), "2");
}

#[test]
fn test_comments_and_blanks_are_skipped() {
    let out = run(":: banner comment\nrem old style\n\n   \necho only");
    assert_eq!(out, "only");
}

#[test]
fn test_unknown_command_reports_and_continues() {
    let out = run("frobnicate x\necho next");
    assert_eq!(out, "?UNKNOWN COMMAND IN LINE 1; frobnicate x\nnext");
}

#[test]
fn test_bad_set_reports_and_continues() {
    let out = run("set ORPHAN\necho next");
    assert_eq!(out, "?SYNTAX ERROR IN LINE 1; ORPHAN\nnext");
}

#[test]
fn test_blocking_commands_in_order() {
    assert_eq!(run("cls\ntimeout 2\npause"), "[cls]\n[sleep 2]\n[pause]");
}

#[test]
fn test_bad_timeout_reports_and_continues() {
    let out = run("timeout soon\necho next");
    assert_eq!(out, "?SYNTAX ERROR IN LINE 1; BAD DELAY \"soon\"\nnext");
}

#[test]
fn test_shift() {
    let mut console = Capture::new();
    let script = Script::from_source("shift\nshift\nshift");
    let mut runtime = Runtime::new(&mut console);
    runtime.set_args(vec!["a".to_string(), "b".to_string()]);
    runtime.run(&script).unwrap();
    assert_eq!(
        console.lines,
        vec!["Shifted arguments.", "Shifted arguments.", "No arguments to shift."]
    );
}

#[test]
fn test_empty_script_halts() {
    assert_eq!(run(""), "");
}
