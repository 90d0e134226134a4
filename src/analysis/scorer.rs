use super::performance::{MatchBaseline, MatchParticipant, ScoreBreakdown};
use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "MVP")]
    Mvp,
    #[serde(rename = "ACE")]
    Ace,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Mvp => "MVP",
            Badge::Ace => "ACE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticipantScoreResult {
    pub score: f64,
    pub rank: usize,
    pub badge: Option<Badge>,
}

/// A participant together with how it scored, in ranked order.
#[derive(Debug, Clone)]
pub struct ScoredParticipant {
    pub participant: MatchParticipant,
    pub breakdown: ScoreBreakdown,
    pub result: ParticipantScoreResult,
}

pub struct PerformanceScorer;

impl PerformanceScorer {
    /// Checks the match before any arithmetic runs:
    /// - positive duration, non-empty set, unique identities
    /// - exactly two teams, each with a single `won` value
    /// - exactly one winning team
    pub fn validate(
        participants: &[MatchParticipant],
        game_duration_secs: i64,
    ) -> Result<(), ScoreError> {
        if game_duration_secs <= 0 {
            return Err(ScoreError::InvalidInput(format!(
                "game duration must be positive, got {}s",
                game_duration_secs
            )));
        }

        if participants.is_empty() {
            return Err(ScoreError::InvalidInput(
                "participant set is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for p in participants {
            if !seen.insert(p.identity()) {
                return Err(ScoreError::InvalidInput(format!(
                    "duplicate participant identity '{}'",
                    p.identity()
                )));
            }
        }

        let mut team_results: BTreeMap<u32, bool> = BTreeMap::new();
        for p in participants {
            match team_results.get(&p.team_id) {
                Some(&won) if won != p.won => {
                    return Err(ScoreError::InconsistentData(format!(
                        "team {} has mixed win flags",
                        p.team_id
                    )));
                }
                Some(_) => {}
                None => {
                    team_results.insert(p.team_id, p.won);
                }
            }
        }

        if team_results.len() != 2 {
            return Err(ScoreError::InconsistentData(format!(
                "expected exactly 2 teams, found {}",
                team_results.len()
            )));
        }

        let winners = team_results.values().filter(|won| **won).count();
        if winners != 1 {
            return Err(ScoreError::InconsistentData(format!(
                "expected exactly 1 winning team, found {}",
                winners
            )));
        }

        Ok(())
    }

    /// Scores every participant against the same baseline and returns them
    /// best first. Exact ties keep their input order.
    pub fn rank_participants(
        participants: &[MatchParticipant],
        game_duration_secs: i64,
    ) -> Result<Vec<ScoredParticipant>, ScoreError> {
        Self::validate(participants, game_duration_secs)?;

        let baseline = MatchBaseline::new(participants, game_duration_secs)?;
        debug!(
            participants = participants.len(),
            avg_damage = baseline.avg_damage,
            avg_gold = baseline.avg_gold,
            avg_cs = baseline.avg_cs,
            minutes = baseline.minutes,
            "computed match baseline"
        );

        let mut scored: Vec<(usize, ScoreBreakdown)> = participants
            .iter()
            .enumerate()
            .map(|(idx, p)| (idx, ScoreBreakdown::compute(p, &baseline)))
            .collect();

        // sort_by is stable, so equal scores stay in input order
        scored.sort_by(|(_, a), (_, b)| b.final_score().total_cmp(&a.final_score()));

        let mvp_idx = scored.first().map(|(idx, _)| *idx);
        let ace_idx = scored
            .iter()
            .map(|(idx, _)| *idx)
            .find(|idx| !participants[*idx].won)
            .filter(|idx| Some(*idx) != mvp_idx);

        let ranked = scored
            .into_iter()
            .enumerate()
            .map(|(position, (idx, breakdown))| {
                let badge = if Some(idx) == mvp_idx {
                    Some(Badge::Mvp)
                } else if Some(idx) == ace_idx {
                    Some(Badge::Ace)
                } else {
                    None
                };

                let participant = participants[idx].clone();
                debug!(
                    player = participant.identity(),
                    rank = position + 1,
                    raw = breakdown.raw_score(),
                    score = breakdown.final_score(),
                    "scored participant"
                );

                ScoredParticipant {
                    participant,
                    breakdown,
                    result: ParticipantScoreResult {
                        score: breakdown.display_score(),
                        rank: position + 1,
                        badge,
                    },
                }
            })
            .collect();

        Ok(ranked)
    }

    pub fn score_all(
        participants: &[MatchParticipant],
        game_duration_secs: i64,
    ) -> Result<HashMap<String, ParticipantScoreResult>, ScoreError> {
        let ranked = Self::rank_participants(participants, game_duration_secs)?;

        Ok(ranked
            .into_iter()
            .map(|s| (s.participant.summoner_name, s.result))
            .collect())
    }

    pub fn score(
        participant: &MatchParticipant,
        participants: &[MatchParticipant],
        game_duration_secs: i64,
    ) -> Result<ParticipantScoreResult, ScoreError> {
        let mut all = Self::score_all(participants, game_duration_secs)?;
        let not_a_member = || {
            ScoreError::InvalidInput(format!(
                "participant '{}' is not part of this match",
                participant.identity()
            ))
        };

        // same name with different stats is a different record
        if !participants.iter().any(|p| p == participant) {
            return Err(not_a_member());
        }
        all.remove(participant.identity()).ok_or_else(not_a_member)
    }
}
