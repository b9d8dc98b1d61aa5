use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("interactive_cli").unwrap();
    cmd.env("INTERACTIVE_CLI_DELAY_MS", "0").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag_prints_usage_and_exits() {
    for flag in ["-h", "--help"] {
        cli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage: interactive_cli"))
            .stdout(predicate::str::contains("--prompt"));
    }
}

#[test]
fn test_version_flag_prints_version_and_exits() {
    for flag in ["-v", "--version"] {
        cli()
            .arg(flag)
            .assert()
            .success()
            .stdout("Interactive CLI Version 1.0.0\n");
    }
}

#[test]
fn test_help_wins_over_version_at_startup() {
    for args in [["-h", "-v"], ["-v", "-h"], ["--help", "--version"]] {
        cli()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("Interactive CLI Version").not());
    }
}

#[test]
fn test_help_wins_over_prompt_at_startup() {
    cli()
        .args(["-h", "-p", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Interactive CLI (Version").not());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_a_usage_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    cli()
        .arg(OsStr::from_bytes(b"-p\xff"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    cli()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_missing_prompt_value_is_a_usage_error() {
    cli().arg("-p").assert().code(2);
}

#[test]
fn test_session_until_end_of_input() {
    cli()
        .write_stdin("hello\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive CLI (Version 1.0.0)"))
        .stdout(predicate::str::contains("\x1b[3m"))
        .stdout(predicate::str::contains("User: hello\x1b[0m"))
        .stdout(predicate::str::contains("System: You said 'hello'"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_session_stops_at_quit() {
    cli()
        .write_stdin("QUIT\nignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn test_session_prompt_change_and_bad_flag() {
    cli()
        .args(["-p", "** "])
        .write_stdin(
            "interactive_cli --bogus\ninteractive_cli -h -p x\ninteractive_cli -p \"NEW> \"\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error parsing arguments:").count(1))
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains(
            "Prompt changed from '** ' to 'NEW> '",
        ));
}
