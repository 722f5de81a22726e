use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_server_flags() {
    Command::cargo_bin("rolodex-web")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--addr"))
        .stdout(predicate::str::contains("--delete-delay-ms"))
        .stdout(predicate::str::contains("--assets-dir"));
}

#[test]
fn invalid_inputs() {
    // INVALID DELAY
    Command::cargo_bin("rolodex-web")
        .unwrap()
        .args(["--delete-delay-ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'soon'"));

    // INVALID ADDRESS
    Command::cargo_bin("rolodex-web")
        .unwrap()
        .args(["--addr", "localhost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--addr"));

    // UNKNOWN FLAG
    Command::cargo_bin("rolodex-web")
        .unwrap()
        .arg("--persist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--persist'"));
}

#[test]
fn bind_failure_is_reported() {
    // Hold the port so the server cannot bind it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    Command::cargo_bin("rolodex-web")
        .unwrap()
        .args(["--addr", &addr])
        .env("ROLODEX_LOG", "off")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}
