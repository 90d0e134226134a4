use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Final statistics of one player in a completed match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipant {
    /// Unique within a match (summoner name or Riot ID).
    #[serde(alias = "identity")]
    pub summoner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion_name: Option<String>,
    pub team_id: u32,
    pub won: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub cs: u32,
    pub damage_dealt: u64,
    pub gold_earned: u64,
    pub vision_score: u32,
}

impl MatchParticipant {
    pub fn identity(&self) -> &str {
        &self.summoner_name
    }

    pub fn kda_line(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}

/// Match-wide reference values every participant is scored against.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBaseline {
    pub avg_damage: f64,
    pub avg_gold: f64,
    // Reported only; it does not feed the score.
    pub avg_cs: f64,
    pub minutes: f64,
    team_kills: HashMap<u32, u32>,
}

impl MatchBaseline {
    /// Callers must have rejected an empty set and a non-positive duration.
    /// Totals that do not fit their integer type are rejected rather than wrapped.
    pub fn new(
        participants: &[MatchParticipant],
        game_duration_secs: i64,
    ) -> Result<Self, ScoreError> {
        let n = participants.len() as f64;
        let total_damage = checked_total(participants, "damageDealt", |p| p.damage_dealt)?;
        let total_gold = checked_total(participants, "goldEarned", |p| p.gold_earned)?;
        let total_cs = checked_total(participants, "cs", |p| u64::from(p.cs))?;

        let mut team_kills: HashMap<u32, u32> = HashMap::new();
        for p in participants {
            let total = team_kills.entry(p.team_id).or_insert(0);
            *total = total.checked_add(p.kills).ok_or_else(|| {
                ScoreError::InvalidInput(format!("kill total for team {} overflows", p.team_id))
            })?;
        }

        Ok(MatchBaseline {
            avg_damage: total_damage as f64 / n,
            avg_gold: total_gold as f64 / n,
            avg_cs: total_cs as f64 / n,
            minutes: game_duration_secs as f64 / 60.0,
            team_kills,
        })
    }

    pub fn team_kills(&self, team_id: u32) -> u32 {
        self.team_kills.get(&team_id).copied().unwrap_or(0)
    }
}

/// Every weighted term that makes up a participant's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub kill_participation: f64,
    pub kp_score: f64,
    pub low_kp_penalty: f64,
    pub kda_score: f64,
    pub kills_bonus: f64,
    pub death_penalty: f64,
    pub damage_score: f64,
    pub gold_score: f64,
    pub cs_score: f64,
    pub vision_score: f64,
    pub win_loss_mod: f64,
}

const BASE_SCORE: f64 = 2.8;
const MAX_SCORE: f64 = 10.0;

impl ScoreBreakdown {
    pub fn compute(p: &MatchParticipant, baseline: &MatchBaseline) -> Self {
        let kills = f64::from(p.kills);
        let deaths = f64::from(p.deaths);
        let takedowns = kills + f64::from(p.assists);

        let team_kills = baseline.team_kills(p.team_id);
        let kill_participation = if team_kills > 0 {
            takedowns / f64::from(team_kills)
        } else {
            0.0
        };

        let kp_score = (kill_participation * 5.0).min(5.0);
        let low_kp_penalty = if kill_participation < 0.3 {
            ((0.3 - kill_participation) * 3.0).min(1.5)
        } else {
            0.0
        };

        let kda_score = if p.deaths == 0 {
            ((takedowns + 1.0).ln() * 0.45).min(1.0)
        } else {
            ((takedowns / deaths + 1.0).ln() * 0.4).min(1.0)
        };

        let kills_bonus = (kills * 0.08).min(1.3);
        let death_penalty = (deaths * 0.4).min(4.0);

        let damage_ratio = if baseline.avg_damage > 0.0 {
            p.damage_dealt as f64 / baseline.avg_damage
        } else {
            1.0
        };
        let damage_score = ((damage_ratio - 0.6) * 0.7).max(0.0).min(1.0);

        let gold_ratio = if baseline.avg_gold > 0.0 {
            p.gold_earned as f64 / baseline.avg_gold
        } else {
            1.0
        };
        let gold_score = ((gold_ratio - 0.75) * 0.7).max(0.0).min(0.7);

        let cs_score = (f64::from(p.cs) / baseline.minutes / 12.0).min(0.4);
        let vision_score = (f64::from(p.vision_score) / baseline.minutes * 0.07).min(0.3);

        let win_loss_mod = if p.won { 0.4 } else { -0.4 };

        ScoreBreakdown {
            kill_participation,
            kp_score,
            low_kp_penalty,
            kda_score,
            kills_bonus,
            death_penalty,
            damage_score,
            gold_score,
            cs_score,
            vision_score,
            win_loss_mod,
        }
    }

    pub fn raw_score(&self) -> f64 {
        self.kp_score
            + self.kda_score
            + self.kills_bonus
            + self.damage_score
            + self.gold_score
            + self.cs_score
            + self.vision_score
            - self.death_penalty
            - self.low_kp_penalty
            + self.win_loss_mod
    }

    /// Clamped to [0, 10] but not rounded; ranking compares this value.
    pub fn final_score(&self) -> f64 {
        (BASE_SCORE + self.raw_score()).clamp(0.0, MAX_SCORE)
    }

    /// One decimal, half-up.
    pub fn display_score(&self) -> f64 {
        round_one_decimal(self.final_score())
    }
}

fn checked_total(
    participants: &[MatchParticipant],
    field: &str,
    value: impl Fn(&MatchParticipant) -> u64,
) -> Result<u64, ScoreError> {
    participants
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(value(p)))
        .ok_or_else(|| ScoreError::InvalidInput(format!("match total for {} overflows", field)))
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
