use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEntry, first_duplicate_email, first_position_gap},
    use_cases::waitlist::WaitlistStore,
};

/// Stores the waitlist as a single JSON array on disk.
///
/// The file is read whole on every load and replaced whole on every save.
/// Saves go through a sibling temp file and a rename, so a reader never sees
/// a half-written list.
#[derive(Debug, Clone)]
pub struct JsonFileWaitlistStore {
    path: PathBuf,
}

impl JsonFileWaitlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "waitlist.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl WaitlistStore for JsonFileWaitlistStore {
    async fn load(&self) -> AppResult<Vec<WaitlistEntry>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(AppError::StoreRead(format!(
                    "{}: {err}",
                    self.path.display()
                )));
            }
        };

        let entries: Vec<WaitlistEntry> = serde_json::from_slice(&raw).map_err(|err| {
            AppError::StoreRead(format!("{}: malformed JSON: {err}", self.path.display()))
        })?;

        if let Some(index) = first_position_gap(&entries) {
            return Err(AppError::StoreRead(format!(
                "{}: entry {index} has position {}, expected {}",
                self.path.display(),
                entries[index].position,
                index + 1
            )));
        }
        if let Some(index) = first_duplicate_email(&entries) {
            return Err(AppError::StoreRead(format!(
                "{}: entry {index} repeats email {}",
                self.path.display(),
                entries[index].email
            )));
        }

        Ok(entries)
    }

    async fn save(&self, entries: &[WaitlistEntry]) -> AppResult<()> {
        let write_err = |err: std::io::Error| {
            AppError::StoreWrite(format!("{}: {err}", self.path.display()))
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let body = serde_json::to_vec_pretty(entries)
            .map_err(|err| AppError::StoreWrite(err.to_string()))?;

        let tmp = self.temp_path();
        fs::write(&tmp, body).await.map_err(write_err)?;
        fs::rename(&tmp, &self.path).await.map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "Waitlist saved");
        Ok(())
    }
}
