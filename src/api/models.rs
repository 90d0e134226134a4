use crate::analysis::match_record::MatchRecord;
use crate::analysis::performance::MatchParticipant;
use crate::error::AppError;
use serde::Deserialize;

// Match V5 response
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_duration: i64,
    /// Absent on matches from before patch 11.20, whose duration is in milliseconds.
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub participants: Vec<ParticipantDto>,
}

impl MatchInfo {
    pub fn duration_secs(&self) -> i64 {
        match self.game_end_timestamp {
            Some(_) => self.game_duration,
            None => self.game_duration / 1000,
        }
    }
}

// Riot returns some of these as signed ints, so they are validated on conversion.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tagline: String,
    #[serde(default)]
    pub champion_name: String,
    pub team_id: i64,
    pub win: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub total_minions_killed: i64,
    #[serde(default)]
    pub neutral_minions_killed: i64,
    pub total_damage_dealt_to_champions: i64,
    pub gold_earned: i64,
    #[serde(default)]
    pub vision_score: i64,
}

fn non_negative<T: TryFrom<i64>>(value: i64, field: &str, who: &str) -> Result<T, AppError> {
    T::try_from(value).map_err(|_| {
        AppError::JsonError(format!("{} for {} is out of range: {}", field, who, value))
    })
}

impl ParticipantDto {
    /// Riot ID when present, then the legacy summoner name, then the PUUID.
    pub fn identity(&self) -> String {
        if !self.riot_id_game_name.is_empty() {
            if self.riot_id_tagline.is_empty() {
                self.riot_id_game_name.clone()
            } else {
                format!("{}#{}", self.riot_id_game_name, self.riot_id_tagline)
            }
        } else if !self.summoner_name.is_empty() {
            self.summoner_name.clone()
        } else {
            self.puuid.clone()
        }
    }

    pub fn to_participant(&self) -> Result<MatchParticipant, AppError> {
        let who = self.identity();
        let cs = self
            .total_minions_killed
            .checked_add(self.neutral_minions_killed)
            .ok_or_else(|| AppError::JsonError(format!("cs overflow for {}", who)))?;

        Ok(MatchParticipant {
            champion_name: (!self.champion_name.is_empty()).then(|| self.champion_name.clone()),
            team_id: non_negative(self.team_id, "teamId", &who)?,
            won: self.win,
            kills: non_negative(self.kills, "kills", &who)?,
            deaths: non_negative(self.deaths, "deaths", &who)?,
            assists: non_negative(self.assists, "assists", &who)?,
            cs: non_negative(cs, "cs", &who)?,
            damage_dealt: non_negative(
                self.total_damage_dealt_to_champions,
                "totalDamageDealtToChampions",
                &who,
            )?,
            gold_earned: non_negative(self.gold_earned, "goldEarned", &who)?,
            vision_score: non_negative(self.vision_score, "visionScore", &who)?,
            summoner_name: who,
        })
    }
}

impl MatchDto {
    pub fn into_record(self) -> Result<MatchRecord, AppError> {
        let participants = self
            .info
            .participants
            .iter()
            .map(ParticipantDto::to_participant)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MatchRecord {
            match_id: Some(self.metadata.match_id),
            game_duration: self.info.duration_secs(),
            participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riot_participant(game_name: &str, team_id: i64, win: bool) -> serde_json::Value {
        serde_json::json!({
            "puuid": format!("puuid-{}", game_name),
            "summonerName": "",
            "riotIdGameName": game_name,
            "riotIdTagline": "NA1",
            "championName": "Jinx",
            "teamId": team_id,
            "win": win,
            "kills": 7,
            "deaths": 2,
            "assists": 9,
            "totalMinionsKilled": 210,
            "neutralMinionsKilled": 14,
            "totalDamageDealtToChampions": 28000,
            "goldEarned": 14500,
            "visionScore": 22,
            "champLevel": 17
        })
    }

    #[test]
    fn converts_match_v5_payload_into_a_record() {
        let payload = serde_json::json!({
            "metadata": { "matchId": "NA1_4242", "participants": ["a", "b"] },
            "info": {
                "gameDuration": 1840,
                "gameEndTimestamp": 1_700_000_000_000i64,
                "participants": [
                    riot_participant("Alpha", 100, true),
                    riot_participant("Bravo", 200, false)
                ]
            }
        });

        let dto: MatchDto = serde_json::from_value(payload).unwrap();
        let record = dto.into_record().unwrap();

        assert_eq!(record.match_id.as_deref(), Some("NA1_4242"));
        assert_eq!(record.game_duration, 1840);
        let alpha = &record.participants[0];
        assert_eq!(alpha.summoner_name, "Alpha#NA1");
        assert_eq!(alpha.cs, 224);
        assert_eq!(alpha.damage_dealt, 28_000);
        assert_eq!(alpha.champion_name.as_deref(), Some("Jinx"));
        assert!(!record.participants[1].won);
    }

    #[test]
    fn legacy_durations_are_converted_from_milliseconds() {
        let payload = serde_json::json!({
            "metadata": { "matchId": "NA1_3900000000" },
            "info": {
                "gameDuration": 1_840_512,
                "participants": [
                    riot_participant("Alpha", 100, true),
                    riot_participant("Bravo", 200, false)
                ]
            }
        });

        let dto: MatchDto = serde_json::from_value(payload).unwrap();
        assert_eq!(dto.info.game_end_timestamp, None);
        assert_eq!(dto.into_record().unwrap().game_duration, 1840);
    }

    #[test]
    fn identity_falls_back_to_summoner_name_then_puuid() {
        let mut dto: ParticipantDto =
            serde_json::from_value(riot_participant("", 100, true)).unwrap();
        dto.summoner_name = "Legacy".to_string();
        assert_eq!(dto.identity(), "Legacy");

        dto.summoner_name.clear();
        assert_eq!(dto.identity(), "puuid-");
    }

    #[test]
    fn negative_stats_are_rejected() {
        let mut dto: ParticipantDto =
            serde_json::from_value(riot_participant("Alpha", 100, true)).unwrap();
        dto.deaths = -1;
        assert!(matches!(dto.to_participant(), Err(AppError::JsonError(_))));
    }
}
