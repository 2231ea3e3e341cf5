use assert_cmd::Command;
use passgen::ALPHABET;
use std::fs;
use std::path::Path;

fn passgen(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.arg("-C").arg(config_dir.join("passgen.toml"));
    cmd
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

#[test]
fn it_output_version() {
    let mut cmd = Command::cargo_bin("passgen").unwrap();

    let assert = cmd.args(["-V"]).assert();

    assert.success().stdout("passgen 0.1.0\n");
}

#[test]
fn it_generates_a_password_of_the_requested_length() {
    let dir = tempfile::tempdir().unwrap();

    let assert = passgen(dir.path()).args(["gen", "12"]).assert().success();

    let stdout = stdout_of(&assert);
    let password = stdout.strip_suffix('\n').unwrap();
    assert_eq!(12, password.len());
    assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
}

#[test]
fn it_generates_an_empty_password_for_zero() {
    let dir = tempfile::tempdir().unwrap();

    passgen(dir.path())
        .args(["gen", "0"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn it_uses_the_configured_default_length() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("passgen.toml"), "default_length = 20\n").unwrap();

    let assert = passgen(dir.path()).args(["gen"]).assert().success();

    assert_eq!(20, stdout_of(&assert).trim_end_matches('\n').len());
}

#[test]
fn it_exit_with_error_if_the_length_is_not_a_number() {
    let dir = tempfile::tempdir().unwrap();

    let assert = passgen(dir.path())
        .args(["gen", "abc"])
        .assert()
        .failure()
        .code(1)
        .stdout("");

    let stderr = stderr_of(&assert);
    assert!(stderr.starts_with("Error: \"abc\" is not a number"));
}

#[test]
fn it_exit_with_error_if_the_length_is_negative() {
    let dir = tempfile::tempdir().unwrap();

    let assert = passgen(dir.path())
        .args(["gen", "-4"])
        .assert()
        .failure()
        .code(1)
        .stdout("");

    assert!(stderr_of(&assert).contains("got -4"));
}

#[test]
fn it_generates_when_the_config_dir_cannot_be_created() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("home");
    fs::write(&not_a_dir, "").unwrap();

    let assert = Command::cargo_bin("passgen")
        .unwrap()
        .env("XDG_CONFIG_HOME", &not_a_dir)
        .env("HOME", &not_a_dir)
        .args(["gen", "8"])
        .assert()
        .success();

    assert_eq!(8, stdout_of(&assert).trim_end_matches('\n').len());
    assert!(not_a_dir.is_file());
}

#[test]
fn it_generates_with_the_defaults_when_the_config_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("passgen.toml"), "default_length = [").unwrap();

    let assert = passgen(dir.path()).args(["gen"]).assert().success();

    assert_eq!(16, stdout_of(&assert).trim_end_matches('\n').len());
}

#[test]
fn it_does_not_write_a_config_file() {
    let dir = tempfile::tempdir().unwrap();

    passgen(dir.path()).args(["gen", "8"]).assert().success();

    assert!(!dir.path().join("passgen.toml").exists());
}

#[test]
fn it_saves_the_printed_password_to_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("password.txt");
    fs::write(&path, "some previous, longer content").unwrap();

    let assert = passgen(dir.path())
        .args(["gen", "8", "-o"])
        .arg(&path)
        .assert()
        .success();

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(8, saved.len());
    assert_eq!(format!("{}\n", saved), stdout_of(&assert));
}

#[test]
fn it_exit_with_error_if_the_output_file_cannot_be_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("password.txt");

    let assert = passgen(dir.path())
        .args(["gen", "8", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .code(1);

    assert!(stderr_of(&assert).starts_with("Error: cannot write to"));
    assert!(!path.exists());
}

#[test]
fn the_form_generates_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.txt");

    let assert = passgen(dir.path())
        .args(["form"])
        .write_stdin(format!("l 10\ng\ns\n{}\nq\n", path.display()))
        .assert()
        .success();

    let saved = fs::read_to_string(&path).unwrap();
    let stdout = stdout_of(&assert);
    assert_eq!(10, saved.len());
    assert!(stdout.contains(&format!("Password: {}\n", saved)));
    assert!(stdout.contains("Saved: File saved successfully\n"));
}

#[test]
fn the_form_keeps_the_password_when_the_length_is_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let assert = passgen(dir.path())
        .args(["form"])
        .write_stdin("l 6\ng\nl abc\ng\nq\n")
        .assert()
        .success();

    let stdout = stdout_of(&assert);
    let passwords: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Password: "))
        .collect();

    // l 6, g, l abc, g
    assert_eq!(4, passwords.len());
    assert_eq!("", passwords[0]);
    assert_eq!(6, passwords[1].len());
    assert_eq!(passwords[1], passwords[2]);
    assert_eq!(passwords[1], passwords[3]);
    assert!(stderr_of(&assert).contains("Error: \"abc\" is not a number"));
}

#[test]
fn the_form_keeps_the_password_when_saving_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("password.txt");

    let assert = passgen(dir.path())
        .args(["form"])
        .write_stdin(format!("l 6\ng\ns\n{}\nq\n", path.display()))
        .assert()
        .success();

    assert!(stderr_of(&assert).contains("Error: cannot write to"));
    assert!(!stdout_of(&assert).contains("Saved:"));
    assert!(!path.exists());
}

#[test]
fn the_form_stops_at_end_of_input() {
    let dir = tempfile::tempdir().unwrap();

    passgen(dir.path())
        .args(["form"])
        .write_stdin("g\n")
        .assert()
        .success();
}
