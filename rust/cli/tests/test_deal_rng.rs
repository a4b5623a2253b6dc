use highcard_cli::run;

fn run_ok(args: &[&str]) -> String {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn deal_prints_cards_and_remaining() {
    let s = run_ok(&["highcard", "deal", "--seed", "1"]);
    assert!(s.contains("Seed: 1"));
    assert!(s.contains("Cards: [4S AD]"));
    assert!(s.contains("Remaining: 50"));
}

#[test]
fn deal_is_reproducible() {
    let a = run_ok(&["highcard", "deal", "--seed", "8", "--count", "10"]);
    let b = run_ok(&["highcard", "deal", "--seed", "8", "--count", "10"]);
    assert_eq!(a, b);
}

#[test]
fn deal_more_than_a_deck_fails() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["highcard", "deal", "--count", "60"], &mut out, &mut err);
    assert_eq!(code, 2);
    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Insufficient cards: requested 60, remaining 52"));
}

#[test]
fn rng_prints_sample() {
    let s = run_ok(&["highcard", "rng", "--seed", "2"]);
    assert!(s.contains("RNG sample:"));
}
