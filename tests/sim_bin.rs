use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--rounds", "3"])
        .env("BULLS_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["rounds"].as_array().unwrap().len(), 3);
    assert!(v["mean_attempts"].as_f64().unwrap() >= 1.0);
}

#[test]
fn sim_rejects_zero_rounds() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--rounds", "0"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn game_binary_has_no_ai_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_bulls_and_cows"))
        .args(["--player", "ai", "--rounds", "10"])
        .output()
        .expect("failed to run game binary");
    assert!(!output.status.success());
}

#[test]
fn game_binary_exits_cleanly_on_closed_stdin() {
    let dir = tempfile::TempDir::new().unwrap();
    let scores = dir.path().join("highscore.txt");
    std::fs::write(&scores, "25\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bulls_and_cows"))
        .arg("--scores")
        .arg(&scores)
        .env("BULLS_LOG", "off")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("failed to run game binary");
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&scores).unwrap(), "25\n");
}
