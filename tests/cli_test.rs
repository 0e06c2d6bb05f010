use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("flashpay"));
    cmd.arg("tests/fixtures/demo.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "wallet,balance,bank,offline,transactions,active",
        ))
        // 300 loaded, 120 spent: 180 on the watch, 9700 in the bank, one
        // settled credit in history, one debit waiting in the sync queue.
        .stdout(predicate::str::contains("user,180.00,9700.00,1,1,true"))
        .stdout(predicate::str::contains("merchant,120.00,0.00,0,1,true"));

    Ok(())
}

#[test]
fn test_cli_without_connectivity_rejects_load() -> Result<(), Box<dyn std::error::Error>> {
    let mut script = tempfile::NamedTempFile::new()?;
    {
        let mut wtr = csv::Writer::from_writer(&mut script);
        wtr.write_record(["op", "target", "amount", "value"])?;
        wtr.write_record(["load", "", "100", ""])?;
        wtr.flush()?;
    }

    let mut cmd = Command::new(cargo_bin!("flashpay"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("turn on Wi-Fi"))
        .stdout(predicate::str::contains("user,0.00,10000.00,0,0,true"));

    Ok(())
}
