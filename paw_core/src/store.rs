//! Profile and check-in sources backing the engine.
//!
//! The engine never touches storage itself. These traits describe what the
//! surrounding application must supply, and [`FileStore`] implements them
//! over a plain data directory:
//!
//! ```text
//! <data_dir>/pets/<pet_id>.json        pet profile
//! <data_dir>/checkins/<pet_id>.jsonl   one check-in per line
//! ```
//!
//! Check-in files are appended under an exclusive lock and read under a
//! shared lock, so a concurrent `paw log` never yields a torn line.

use crate::{CheckinRecord, Error, PetProfile, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Profile lookup by pet identifier
pub trait ProfileSource {
    /// Returns `Ok(None)` when no such pet exists
    fn load_profile(&self, pet_id: &str) -> Result<Option<PetProfile>>;
}

/// History query by pet identifier and lower-bound date
pub trait CheckinSource {
    /// Check-ins with `date >= since`, newest first
    fn checkins_since(&self, pet_id: &str, since: NaiveDate) -> Result<Vec<CheckinRecord>>;
}

/// Check-in persistence
pub trait CheckinSink {
    fn append(&mut self, pet_id: &str, checkin: &CheckinRecord) -> Result<()>;
}

/// Directory-backed store for profiles and check-ins
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self, pet_id: &str) -> Result<PathBuf> {
        validate_pet_id(pet_id)?;
        Ok(self.root.join("pets").join(format!("{}.json", pet_id)))
    }

    pub fn checkins_path(&self, pet_id: &str) -> Result<PathBuf> {
        validate_pet_id(pet_id)?;
        Ok(self.root.join("checkins").join(format!("{}.jsonl", pet_id)))
    }

    /// Write a pet profile, replacing any existing one
    pub fn save_profile(&self, pet_id: &str, profile: &PetProfile) -> Result<()> {
        let path = self.profile_path(pet_id)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(profile)?;
        std::fs::write(&path, contents)?;
        tracing::debug!("Saved profile for {} to {:?}", pet_id, path);
        Ok(())
    }
}

/// Pet ids become file names, so keep them to a safe character set
fn validate_pet_id(pet_id: &str) -> Result<()> {
    let valid = !pet_id.is_empty()
        && pet_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(Error::Other(format!("Invalid pet id: {:?}", pet_id)))
    }
}

impl ProfileSource for FileStore {
    fn load_profile(&self, pet_id: &str) -> Result<Option<PetProfile>> {
        let path = self.profile_path(pet_id)?;
        if !path.exists() {
            tracing::debug!("No profile at {:?}", path);
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let profile = serde_json::from_str(&contents)?;
        Ok(Some(profile))
    }
}

impl CheckinSource for FileStore {
    fn checkins_since(&self, pet_id: &str, since: NaiveDate) -> Result<Vec<CheckinRecord>> {
        let path = self.checkins_path(pet_id)?;
        let mut checkins: Vec<_> = read_checkins(&path)?
            .into_iter()
            .filter(|c| c.date >= since)
            .collect();

        checkins.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            "Loaded {} check-ins for {} since {}",
            checkins.len(),
            pet_id,
            since
        );
        Ok(checkins)
    }
}

impl CheckinSink for FileStore {
    fn append(&mut self, pet_id: &str, checkin: &CheckinRecord) -> Result<()> {
        let path = self.checkins_path(pet_id)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(checkin)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Appended check-in for {} on {}", pet_id, checkin.date);
        Ok(())
    }
}

/// Read every parseable check-in from a JSONL file
///
/// Missing files read as empty. Lines that are not JSON at all are logged
/// and skipped; JSON lines that fail check-in validation are an error.
pub fn read_checkins(path: &Path) -> Result<Vec<CheckinRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut checkins = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        // Torn or garbled lines are skipped; well-formed JSON that is not a
        // valid check-in is an input error and must not vanish silently
        let value = match serde_json::from_str::<serde_json::Value>(&line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Skipping unreadable line {} in {:?}: {}",
                    line_num + 1,
                    path,
                    e
                );
                continue;
            }
        };

        match serde_json::from_value::<CheckinRecord>(value) {
            Ok(checkin) => checkins.push(checkin),
            Err(e) => {
                tracing::error!(
                    "Invalid check-in at line {} in {:?}: {}",
                    line_num + 1,
                    path,
                    e
                );
                file.unlock()?;
                return Err(Error::InvalidCheckin {
                    line: line_num + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    file.unlock()?;
    Ok(checkins)
}
