use std::process::Command;

#[test]
fn exits_with_status_20() {
    // two runs: no state carries over between processes
    for _ in 0..2 {
        let status = Command::new(env!("CARGO_BIN_EXE_loop_arith"))
            .status()
            .unwrap();
        assert_eq!(status.code(), Some(20));
    }
}

#[test]
fn print_state_shows_final_variables() {
    let output = Command::new(env!("CARGO_BIN_EXE_loop_arith"))
        .arg("--print-state")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(20));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("e = 0"));
    assert!(stdout.contains("f = 20"));
}

#[test]
fn silent_without_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_loop_arith"))
        .output()
        .unwrap();
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}
