use super::performance::MatchParticipant;
use super::scorer::{ParticipantScoreResult, PerformanceScorer, ScoredParticipant};
use crate::error::{AppError, ScoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One completed match: everything the scorer needs and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    /// Seconds.
    pub game_duration: i64,
    pub participants: Vec<MatchParticipant>,
}

impl MatchRecord {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn label(&self) -> &str {
        self.match_id.as_deref().unwrap_or("local match")
    }

    pub fn find(&self, identity: &str) -> Option<&MatchParticipant> {
        self.participants
            .iter()
            .find(|p| p.identity().eq_ignore_ascii_case(identity))
    }

    pub fn score(&self) -> Result<Vec<ScoredParticipant>, ScoreError> {
        PerformanceScorer::rank_participants(&self.participants, self.game_duration)
    }

    /// Results keyed by identity, in name order.
    pub fn score_map(&self) -> Result<BTreeMap<String, ParticipantScoreResult>, ScoreError> {
        Ok(PerformanceScorer::score_all(&self.participants, self.game_duration)?
            .into_iter()
            .collect())
    }
}

/// Runs `report` on every match and keys the output by match id, so several
/// matches serialize as one document.
pub fn by_match_id<T, E>(
    records: &[MatchRecord],
    mut report: impl FnMut(&MatchRecord) -> Result<T, E>,
) -> Result<BTreeMap<String, T>, E> {
    let mut out = BTreeMap::new();
    for record in records {
        out.insert(record.label().to_string(), report(record)?);
    }
    Ok(out)
}
