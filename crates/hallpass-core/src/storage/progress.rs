//! Local progress file for guest use.
//!
//! Holds one [`GamificationState`] as pretty JSON at
//! `<data_dir>/progress.json`. Writes go to a temp file first and are
//! renamed into place so a crash never leaves a half-written record.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::Result;
use crate::progression::GamificationState;

const FILE_NAME: &str = "progress.json";

#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn open(dir: &Path) -> Self {
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    /// Open the store in the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(&data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored state as seen on `today`: daily minutes from an
    /// earlier day read as zero. A missing file yields the default state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self, today: NaiveDate) -> Result<GamificationState> {
        let state = match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str::<GamificationState>(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no progress file, starting fresh");
                GamificationState::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(state.normalized_for(today))
    }

    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized or written.
    pub fn save(&self, state: &GamificationState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Remove the stored state. Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::complete_focus_session;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn missing_file_is_default_state() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::open(dir.path());
        assert_eq!(store.load(day(10)).unwrap(), GamificationState::default());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::open(dir.path());
        let now = day(10).and_hms_opt(9, 0, 0).unwrap();
        let out = complete_focus_session(&store.load(day(10)).unwrap(), 1800.0, now);
        store.save(&out.state).unwrap();

        let reopened = ProgressStore::open(dir.path());
        let state = reopened.load(day(10)).unwrap();
        assert_eq!(state, out.state);
        assert_eq!(state.current_streak, 1);
        assert!(!dir.path().join("progress.json.tmp").exists());
    }

    #[test]
    fn next_day_reads_zero_daily_minutes() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::open(dir.path());
        let now = day(10).and_hms_opt(9, 0, 0).unwrap();
        let out = complete_focus_session(&GamificationState::default(), 600.0, now);
        store.save(&out.state).unwrap();

        let state = store.load(day(11)).unwrap();
        assert_eq!(state.daily_focus_minutes, 0.0);
        assert_eq!(state.total_focus_minutes, 10.0);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("progress.json"), "{not json").unwrap();
        assert!(ProgressStore::open(dir.path()).load(day(10)).is_err());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::open(dir.path());
        store.save(&GamificationState::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
    }
}
