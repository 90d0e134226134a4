#![allow(dead_code)]

use penta_score::MatchParticipant;
use proptest::prelude::*;

pub const THIRTY_MINUTES: i64 = 1800;

pub fn participant(name: &str, team_id: u32, won: bool) -> MatchParticipant {
    MatchParticipant {
        summoner_name: name.to_string(),
        champion_name: None,
        team_id,
        won,
        kills: 0,
        deaths: 0,
        assists: 0,
        cs: 0,
        damage_dealt: 0,
        gold_earned: 0,
        vision_score: 0,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn with_stats(
    mut p: MatchParticipant,
    kills: u32,
    deaths: u32,
    assists: u32,
    cs: u32,
    damage_dealt: u64,
    gold_earned: u64,
    vision_score: u32,
) -> MatchParticipant {
    p.kills = kills;
    p.deaths = deaths;
    p.assists = assists;
    p.cs = cs;
    p.damage_dealt = damage_dealt;
    p.gold_earned = gold_earned;
    p.vision_score = vision_score;
    p
}

/// Two-a-side match: team 100 won, team 200 lost.
pub fn toy_match() -> Vec<MatchParticipant> {
    vec![
        with_stats(participant("A1", 100, true), 10, 0, 5, 200, 20_000, 15_000, 40),
        with_stats(participant("A2", 100, true), 2, 5, 3, 120, 8_000, 9_000, 15),
        with_stats(participant("B1", 200, false), 3, 4, 2, 150, 12_000, 10_000, 20),
        with_stats(participant("B2", 200, false), 1, 6, 3, 100, 7_000, 8_000, 25),
    ]
}

pub type StatLine = (u32, u32, u32, u32, u64, u64, u32);

/// kills, deaths, assists, cs, damage, gold, vision
pub fn stat_line_strategy() -> impl Strategy<Value = StatLine> {
    (
        0u32..20,
        0u32..15,
        0u32..25,
        0u32..350,
        0u64..60_000,
        0u64..25_000,
        0u32..90,
    )
}

/// A plausible 5v5 match with arbitrary final stats and duration.
pub fn match_strategy() -> impl Strategy<Value = (Vec<MatchParticipant>, i64)> {
    (
        prop::collection::vec(stat_line_strategy(), 10),
        any::<bool>(),
        600i64..3000,
    )
        .prop_map(|(lines, blue_won, duration)| {
            let players = lines
                .into_iter()
                .enumerate()
                .map(|(i, (k, d, a, cs, dmg, gold, vision))| {
                    let team_id = if i < 5 { 100 } else { 200 };
                    let won = (team_id == 100) == blue_won;
                    with_stats(
                        participant(&format!("player{}", i), team_id, won),
                        k,
                        d,
                        a,
                        cs,
                        dmg,
                        gold,
                        vision,
                    )
                })
                .collect();
            (players, duration)
        })
}
