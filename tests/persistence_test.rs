use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_state_file_recovery() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("ledger.json");

    // 1. First run: enable connectivity and load the watch.
    let mut script1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(script1, "op, target, amount, value").unwrap();
    writeln!(script1, "connect, wifi, , true").unwrap();
    writeln!(script1, "connect, bluetooth, , true").unwrap();
    writeln!(script1, "load, , 100, ").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("flashpay"));
    cmd1.arg(script1.path()).arg("--state-path").arg(&state_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("user,100.00,9900.00,0,1,true"));

    // 2. Second run against the same state file. Connectivity persisted,
    // so the load goes straight through.
    let mut script2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(script2, "op, target, amount, value").unwrap();
    writeln!(script2, "load, , 50, ").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("flashpay"));
    cmd2.arg(script2.path()).arg("--state-path").arg(&state_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains("user,150.00,9850.00,0,2,true"));
}

#[test]
fn test_invalid_state_file_is_rejected() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("ledger.json");

    // A structurally valid document violating the watch-capacity invariant.
    std::fs::write(
        &state_path,
        serde_json::json!({
            "flashpay_state": {
                "userWallet": {
                    "balance": "9999",
                    "phoneBalance": "10000",
                    "transactions": [],
                    "pendingSync": [],
                    "offlineCount": 0,
                    "isActive": true
                },
                "merchantWallet": {
                    "balance": "0",
                    "bankBalance": "0",
                    "transactions": [],
                    "isActive": true
                },
                "pendingPaymentRequest": null,
                "connectivity": { "wifi": false, "bluetooth": false },
                "txSeq": { "next": 1 }
            }
        })
        .to_string(),
    )
    .unwrap();

    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "op, target, amount, value").unwrap();

    let mut cmd = Command::new(cargo_bin!("flashpay"));
    cmd.arg(script.path()).arg("--state-path").arg(&state_path);

    let output = cmd.output().expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rejecting persisted state"));
}
