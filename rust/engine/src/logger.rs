use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::engine::RoundOutcome;
use crate::rules::{RoundResult, TieRule};

/// Complete record of a finished round, the unit handed to persistence.
/// Serialized to JSONL format, one record per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the deck the cards came from (enables deterministic replay)
    pub seed: Option<u64>,
    /// Amount wagered
    pub bet: u64,
    /// Card drawn for the player
    pub player_card: Card,
    /// Card drawn for the house
    pub house_card: Card,
    /// Round outcome
    pub result: RoundResult,
    /// Balance before the bet was deducted
    pub balance_before: u64,
    /// Balance after settlement
    pub balance_after: u64,
    /// Tie rule in force for the round
    #[serde(default)]
    pub tie_rule: TieRule,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    pub fn from_outcome(
        round_id: String,
        seed: Option<u64>,
        tie_rule: TieRule,
        outcome: &RoundOutcome,
    ) -> Self {
        Self {
            round_id,
            seed,
            bet: outcome.bet,
            player_card: outcome.player_card,
            house_card: outcome.house_card,
            result: outcome.result,
            balance_before: outcome.balance_before,
            balance_after: outcome.balance,
            tie_rule,
            ts: None,
            meta: None,
        }
    }

    pub fn net(&self) -> i128 {
        i128::from(self.balance_after) - i128::from(self.balance_before)
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u64) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u64,
}

impl RoundLogger {
    /// Creates (truncating) the log file, making parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open_with(path, OpenOptions::new().write(true).create(true).truncate(true))
    }

    /// Opens the log file for appending, keeping earlier rounds. Round ids
    /// continue after the records already in the file.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let existing = match std::fs::read_to_string(path.as_ref()) {
            Ok(s) => s.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e),
        };
        let mut logger = Self::open_with(path, OpenOptions::new().append(true).create(true))?;
        logger.seq = existing as u64;
        Ok(logger)
    }

    fn open_with<P: AsRef<Path>>(path: P, opts: &OpenOptions) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = opts.open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// A JSONL line that could not be parsed as a [`RoundRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptLine {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// Parses JSONL round log content. Blank lines are ignored; unparsable lines
/// are reported rather than aborting the read.
pub fn read_records(content: &str) -> (Vec<RoundRecord>, Vec<CorruptLine>) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = Vec::new();
    let mut corrupted = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RoundRecord>(line) {
            Ok(rec) => records.push(rec),
            Err(e) => corrupted.push(CorruptLine {
                line: i + 1,
                message: e.to_string(),
            }),
        }
    }
    (records, corrupted)
}

/// Orders records by timestamp, oldest first. Records without a timestamp sort
/// first; equal timestamps keep file order.
pub fn sort_by_timestamp(records: &mut [RoundRecord]) {
    records.sort_by_cached_key(|r| {
        r.ts.as_deref()
            .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts).ok())
            .map(|dt| dt.with_timezone(&Utc))
    });
}

/// Aggregate over a set of finished rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub rounds: u64,
    pub player_wins: u64,
    pub house_wins: u64,
    pub pushes: u64,
    pub total_wagered: u128,
    pub net: i128,
    /// Balance after the last round in the given order
    pub final_balance: Option<u64>,
}

impl SessionSummary {
    /// Folds one finished round into the totals.
    pub fn record(&mut self, r: &RoundRecord) {
        self.rounds += 1;
        match r.result {
            RoundResult::PlayerWin => self.player_wins += 1,
            RoundResult::HouseWin => self.house_wins += 1,
            RoundResult::Push => self.pushes += 1,
        }
        self.total_wagered += u128::from(r.bet);
        self.net += r.net();
        self.final_balance = Some(r.balance_after);
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RoundRecord>,
    {
        let mut s = SessionSummary::default();
        for r in records {
            s.record(r);
        }
        s
    }
}
