use highcard_cli::run;
use highcard_engine::logger::read_records;

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn seeded_session_is_reproducible() {
    let args = [
        "highcard", "play", "--rounds", "5", "--bet", "10", "--balance", "100", "--seed", "1",
    ];
    let (code, first, _) = run_capture(&args);
    assert_eq!(code, 0);
    let (_, second, _) = run_capture(&args);
    assert_eq!(first, second);
    assert!(first.contains("Rounds played: 5 of 5"));
}

#[test]
fn bet_above_balance_ends_session_immediately() {
    let (code, out, err) = run_capture(&[
        "highcard", "play", "--rounds", "1", "--bet", "10", "--balance", "5", "--seed", "1",
    ]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: balance 5 cannot cover bet 10"));
    assert!(out.contains("Final balance: 5"));
}

#[test]
fn max_round_count_still_stops_on_balance() {
    let (code, out, err) = run_capture(&[
        "highcard",
        "play",
        "--rounds",
        "4294967295",
        "--bet",
        "10",
        "--balance",
        "5",
        "--seed",
        "1",
    ]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: balance 5 cannot cover bet 10; session ended"));
    assert!(out.contains("Rounds played: 0 of 4294967295"));
}

#[test]
fn fractional_bet_is_rejected() {
    let (code, _, err) = run_capture(&["highcard", "play", "--bet", "2.5", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("--bet"));
}

#[test]
fn zero_bet_is_a_configuration_error() {
    let (code, _, err) = run_capture(&["highcard", "play", "--bet", "0", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("bet must be >0"));
}

#[test]
fn rank_only_sessions_report_pushes_line() {
    let (code, out, _) = run_capture(&[
        "highcard",
        "play",
        "--rounds",
        "3",
        "--balance",
        "1000",
        "--seed",
        "4",
        "--tie-rule",
        "rank-only",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("tie_rule=rank-only"));
    assert!(out.contains("Pushes:"));
}

#[test]
fn output_log_accumulates_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let p = path.to_string_lossy().to_string();
    for seed in ["1", "2"] {
        let (code, _, err) = run_capture(&[
            "highcard", "play", "--rounds", "3", "--balance", "1000", "--seed", seed, "--output",
            p.as_str(),
        ]);
        assert_eq!(code, 0, "stderr: {}", err);
    }
    let (records, corrupted) = read_records(&std::fs::read_to_string(&path).unwrap());
    assert!(corrupted.is_empty());
    assert_eq!(records.len(), 6);
    assert!(records[5].round_id.ends_with("-000006"));
    assert_eq!(records[0].seed, Some(1));
    assert_eq!(records[3].seed, Some(2));
}
