//! JSON-file high-score store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mapquiz_core::ScoreStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Record {
    high_score: Option<u64>,
}

pub struct FileStore {
    path: PathBuf,
    record: Record,
}

impl FileStore {
    /// Load the store, treating a missing file as "no record yet".
    pub fn load(path: PathBuf) -> Result<Self> {
        let record = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Record::default(),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        Ok(FileStore { path, record })
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.record)?)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl ScoreStore for FileStore {
    fn get(&self) -> Option<u64> {
        self.record.high_score
    }

    fn set(&mut self, seconds: u64) {
        self.record.high_score = Some(seconds);
    }
}
