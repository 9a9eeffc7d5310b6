use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_markdown-autolink-cli"))
        .args(args)
        .env("HOME", "/nonexistent-home")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    {
        let mut child_stdin = child.stdin.take().expect("stdin");
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).expect("write stdin");
        }
    }
    child.wait_with_output().expect("wait for cli")
}

#[test]
fn escapes_each_argument_on_its_own_line() {
    let output = run(&["a b@c.d", "a www.b.c", "https:a"], None);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "a b\\@c.d\na www\\.b.c\nhttps:a\n"
    );
}

#[test]
fn reads_stdin_without_arguments() {
    let output = run(&[], Some("see https://x.y\nplain.text\n"));
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "see https\\://x.y\nplain.text\n"
    );
}

#[test]
fn config_file_selects_literals() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(&config_file, "protocols = [\"xmpp\"]\nwww = false\n").unwrap();

    let output = run(
        &[
            "--config",
            config_file.to_str().unwrap(),
            "xmpp://a www.b.c https://d",
        ],
        None,
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "xmpp\\://a www.b.c https://d\n"
    );
}

#[test]
fn unreadable_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(&config_file, "email = 3\n").unwrap();

    let output = run(&["--config", config_file.to_str().unwrap(), "x"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Failed to load config file"),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
