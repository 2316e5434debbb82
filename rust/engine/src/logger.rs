use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Engine;
use crate::game::Round;

/// A seat as it stood when the hand record was taken.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    /// Player display name
    pub name: String,
    /// Chips behind at record time
    pub chips: u32,
    /// Hole cards dealt to this seat (empty for busted seats)
    pub hole: Vec<Card>,
}

/// Record of one dealt hand: who sat, what they held and how far the board got.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for deck shuffling (enables deterministic replay)
    pub seed: Option<u64>,
    /// Last round dealt
    pub round: Option<Round>,
    /// Seats in seating order
    pub seats: Vec<SeatRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    /// Pot at record time
    pub pot: u32,
    /// Timestamp when the hand was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn from_engine(hand_id: String, engine: &Engine) -> Self {
        Self {
            hand_id,
            seed: engine.seed(),
            round: engine.current_round(),
            seats: engine
                .players()
                .iter()
                .map(|p| SeatRecord {
                    name: p.name().to_string(),
                    chips: p.chips(),
                    hole: p.hand().to_vec(),
                })
                .collect(),
            board: engine.community_cards().to_vec(),
            pot: engine.pot(),
            ts: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Highest sequence number already logged under `date`, or 0 for a new file.
/// Lines that are not hand records are skipped.
fn last_seq(path: &Path, date: &str) -> std::io::Result<u32> {
    let f = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    let prefix = format!("{}-", date);
    let mut max = 0;
    for line in BufReader::new(f).lines() {
        let line = line?;
        let Ok(rec) = serde_json::from_str::<HandRecord>(&line) else {
            continue;
        };
        if let Some(seq) = rec
            .hand_id
            .strip_prefix(&prefix)
            .and_then(|n| n.parse::<u32>().ok())
        {
            max = max.max(seq);
        }
    }
    Ok(max)
}

/// Append-only JSONL writer for [`HandRecord`]s.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = last_seq(path.as_ref(), &date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    /// Logger that only hands out ids; writes are discarded.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Snapshots the engine's current hand under a fresh id and writes it.
    pub fn record(&mut self, engine: &Engine) -> std::io::Result<HandRecord> {
        let rec = HandRecord::from_engine(self.next_id(), engine);
        self.write(&rec)?;
        Ok(rec)
    }
}
