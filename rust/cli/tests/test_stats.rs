use std::fs;

use highcard_cli::run;
use highcard_engine::cards::{Card, Rank, Suit};
use highcard_engine::logger::RoundRecord;
use highcard_engine::rules::{RoundResult, TieRule};

fn rec(id: &str, ts: &str, result: RoundResult, before: u64, after: u64) -> RoundRecord {
    RoundRecord {
        round_id: id.into(),
        seed: Some(1),
        bet: 10,
        player_card: Card::new(Rank::King, Suit::Hearts),
        house_card: Card::new(Rank::Two, Suit::Clubs),
        result,
        balance_before: before,
        balance_after: after,
        tie_rule: TieRule::SuitBreaks,
        ts: Some(ts.into()),
        meta: None,
    }
}

fn run_stats(args: &[&str]) -> (i32, String, String) {
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
fn stats_outputs_summary_ordered_by_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    // written out of order; the latest round carries the final balance
    let lines = [
        rec("20250102-000002", "2025-01-02T10:00:02Z", RoundResult::HouseWin, 110, 100),
        rec("20250102-000001", "2025-01-02T10:00:01Z", RoundResult::PlayerWin, 100, 110),
        rec("20250102-000003", "2025-01-02T10:00:03Z", RoundResult::PlayerWin, 100, 110),
    ];
    let mut s = String::new();
    for r in &lines {
        s.push_str(&serde_json::to_string(r).unwrap());
        s.push('\n');
    }
    s.push_str("{broken\n");
    fs::write(&path, s).unwrap();

    let p = path.to_string_lossy().to_string();
    let (code, out, err) = run_stats(&["highcard", "stats", "--input", p.as_str(), "--list"]);
    assert_eq!(code, 0);
    assert!(err.contains(":4: skipped corrupted record"));

    let first = out.find("20250102-000001").unwrap();
    let second = out.find("20250102-000002").unwrap();
    assert!(first < second, "rounds must be listed oldest first");

    let json_start = out.find('{').unwrap();
    let v: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(v["files"], 1);
    assert_eq!(v["corrupted"], 1);
    assert_eq!(v["summary"]["rounds"], 3);
    assert_eq!(v["summary"]["player_wins"], 2);
    assert_eq!(v["summary"]["house_wins"], 1);
    assert_eq!(v["summary"]["net"], 10);
    assert_eq!(v["summary"]["final_balance"], 110);
}

#[test]
fn stats_reads_directories() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("day1");
    fs::create_dir(&sub).unwrap();
    let a = rec("a", "2025-01-01T00:00:00Z", RoundResult::HouseWin, 100, 90);
    let b = rec("b", "2025-01-02T00:00:00Z", RoundResult::HouseWin, 90, 80);
    fs::write(dir.path().join("a.jsonl"), serde_json::to_string(&a).unwrap() + "\n").unwrap();
    fs::write(sub.join("b.jsonl"), serde_json::to_string(&b).unwrap() + "\n").unwrap();

    let p = dir.path().to_string_lossy().to_string();
    let (code, out, _) = run_stats(&["highcard", "stats", "--input", p.as_str()]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["files"], 2);
    assert_eq!(v["summary"]["rounds"], 2);
    assert_eq!(v["summary"]["net"], -20);
    assert_eq!(v["summary"]["final_balance"], 80);
}

#[test]
fn stats_missing_input_exits_with_error() {
    let (code, _, err) = run_stats(&["highcard", "stats", "--input", "does/not/exist.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.contains("input not found"));
}
