use crate::analysis::match_record::MatchRecord;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A fetched match as stored on disk. Scores are recomputed on every run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedMatch {
    pub cached_at: DateTime<Utc>,
    pub record: MatchRecord,
}

#[derive(Debug, Clone)]
pub struct MatchCache {
    dir: PathBuf,
}

impl MatchCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        MatchCache { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn get_cache_path(&self, match_id: &str) -> PathBuf {
        let file_name: String = match_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }

    /// `Ok(None)` when the match has not been cached yet.
    pub fn load(&self, match_id: &str) -> Result<Option<CachedMatch>, AppError> {
        let path = self.get_cache_path(match_id);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let cached = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse cache: {}", e))
                })?;
                debug!(match_id, path = %path.display(), "cache hit");
                Ok(Some(cached))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::IoError(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn save(&self, record: &MatchRecord) -> Result<(), AppError> {
        let match_id = record.match_id.as_deref().ok_or_else(|| {
            AppError::IoError("cannot cache a match without an id".to_string())
        })?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::IoError(format!("Failed to create cache dir: {}", e))
        })?;

        let cached = CachedMatch {
            cached_at: Utc::now(),
            record: record.clone(),
        };
        let json = serde_json::to_string_pretty(&cached).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize cache: {}", e))
        })?;

        let path = self.get_cache_path(match_id);
        fs::write(&path, json).map_err(|e| {
            AppError::IoError(format!("Failed to write cache: {}", e))
        })?;
        debug!(match_id, path = %path.display(), "cached match");

        Ok(())
    }
}
