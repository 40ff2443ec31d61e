use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_log(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp log file");
    for line in lines {
        writeln!(file, "{line}").expect("write log line");
    }
    file
}

#[test]
fn test_missing_argument_prints_usage() {
    Command::cargo_bin("linklog")
        .expect("binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unreadable_file_is_fatal() {
    Command::cargo_bin("linklog")
        .expect("binary")
        .arg("/no/such/log.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read log file"));
}

#[test]
fn test_clean_log_reports_success() {
    let log = write_log(&[
        "WR Core booting...",
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:100 nsec:0 mu:5000 cko:2",
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:101 nsec:0 mu:5010 cko:3",
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:102 nsec:0 mu:5020 cko:1",
    ]);

    Command::cargo_bin("linklog")
        .expect("binary")
        .arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("LOCK:\t Success, always locked"))
        .stdout(predicate::str::contains("STATE:\t Success, always TRACK_PHASE"))
        .stdout(predicate::str::contains("TIME:\t Success, always growing"))
        .stdout(predicate::str::contains("RTT:\t Success, no jumps detected"))
        .stdout(predicate::str::contains(
            "CKO:\t Success, no values outside accepted range",
        ));
}

#[test]
fn test_violations_print_diagnostics_not_success() {
    let log = write_log(&[
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:100 nsec:0 mu:5000 cko:2",
        "lnk:1 lock:0 ss:'TRACK_PHASE' sec:101 nsec:0 mu:5010 cko:3",
    ]);

    Command::cargo_bin("linklog")
        .expect("binary")
        .arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: loss of lock at sample 1"))
        .stdout(predicate::str::contains("LOCK:").not());
}

#[test]
fn test_threshold_override_flags() {
    // 9000 -> 1000 is a jump under defaults, fine with a raised limit
    let log = write_log(&[
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:100 nsec:0 mu:9000 cko:2",
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:101 nsec:0 mu:1000 cko:3",
    ]);

    Command::cargo_bin("linklog")
        .expect("binary")
        .arg(log.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: rtt jump at sample 1 is -8000ps"));

    Command::cargo_bin("linklog")
        .expect("binary")
        .arg(log.path())
        .args(["--max-mu-jump", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RTT:\t Success, no jumps detected"));
}

#[test]
fn test_json_report() {
    let log = write_log(&[
        "lnk:1 lock:1 ss:'TRACK_PHASE' sec:100 nsec:0 mu:5000 cko:2",
    ]);

    Command::cargo_bin("linklog")
        .expect("binary")
        .arg(log.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"))
        .stdout(predicate::str::contains("\"lock\""));
}
