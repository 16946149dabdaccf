//! Keyed highscore stores.
//!
//! A store holds at most one [`LeaderboardRecord`] per user id and supports
//! get-by-id, insert, update and a bulk listing. [`MemoryStore`] keeps
//! records in memory; [`JsonFileStore`] persists them as a JSON array.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    pub id: String,
    pub highscore: u32,
}

impl LeaderboardRecord {
    pub fn new(id: impl Into<String>, highscore: u32) -> Self {
        Self {
            id: id.into(),
            highscore,
        }
    }
}

/// Keyed record store behind a [`crate::Leaderboard`].
pub trait LeaderboardStore {
    /// Look up the record for `id`.
    fn get(&self, id: &str) -> Result<Option<LeaderboardRecord>, LeaderboardError>;

    /// Add a record whose id is not stored yet.
    fn insert(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError>;

    /// Replace the record with the same id.
    fn update(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError>;

    /// Every stored record, in storage order.
    fn list(&self) -> Result<Vec<LeaderboardRecord>, LeaderboardError>;
}

fn insert_into(
    records: &mut Vec<LeaderboardRecord>,
    record: LeaderboardRecord,
) -> Result<(), LeaderboardError> {
    if records.iter().any(|r| r.id == record.id) {
        return Err(LeaderboardError::DuplicateId(record.id));
    }
    records.push(record);
    Ok(())
}

fn update_in(
    records: &mut [LeaderboardRecord],
    record: LeaderboardRecord,
) -> Result<(), LeaderboardError> {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(slot) => {
            *slot = record;
            Ok(())
        }
        None => Err(LeaderboardError::UnknownId(record.id)),
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    records: Vec<LeaderboardRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LeaderboardRecord>) -> Self {
        Self { records }
    }
}

impl LeaderboardStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<LeaderboardRecord>, LeaderboardError> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn insert(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError> {
        insert_into(&mut self.records, record)
    }

    fn update(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError> {
        update_in(&mut self.records, record)
    }

    fn list(&self) -> Result<Vec<LeaderboardRecord>, LeaderboardError> {
        Ok(self.records.clone())
    }
}

/// Store backed by a JSON file holding an array of records.
///
/// The file is read on every call and rewritten on every write, so several
/// processes can share it between games. A missing file is an empty board.
/// Writes go to a sibling `.tmp` file that is renamed over the board, so an
/// interrupted write never leaves a truncated file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<LeaderboardRecord>, LeaderboardError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("leaderboard"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn save(&self, records: &[LeaderboardRecord]) -> Result<(), LeaderboardError> {
        let text = serde_json::to_string_pretty(records)?;
        let tmp = self.temp_path();

        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(text.as_bytes())?;
            file.sync_all()
        });
        if let Err(err) = written.and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl LeaderboardStore for JsonFileStore {
    fn get(&self, id: &str) -> Result<Option<LeaderboardRecord>, LeaderboardError> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    fn insert(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError> {
        let mut records = self.load()?;
        insert_into(&mut records, record)?;
        self.save(&records)
    }

    fn update(&mut self, record: LeaderboardRecord) -> Result<(), LeaderboardError> {
        let mut records = self.load()?;
        update_in(&mut records, record)?;
        self.save(&records)
    }

    fn list(&self) -> Result<Vec<LeaderboardRecord>, LeaderboardError> {
        self.load()
    }
}
