use std::process::Command;

// Whatever is (or isn't) listening on localhost:5000, the run reports both cases and exits 0.
#[test]
fn binary_reports_both_cases_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_verify-login"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("--- Test 1: Non-existent ---\n"), "{}", stdout);

    let second = stdout
        .find("\n\n--- Test 2: Wrong password ---\n")
        .expect("second header missing");
    let first_report = &stdout["--- Test 1: Non-existent ---\n".len()..second];
    assert!(
        first_report.starts_with("Status: ") || first_report.starts_with("Error: "),
        "{}",
        first_report
    );

    let second_report = &stdout[second + "\n\n--- Test 2: Wrong password ---\n".len()..];
    assert!(
        second_report.starts_with("Status: ") || second_report.starts_with("Error: "),
        "{}",
        second_report
    );
}
