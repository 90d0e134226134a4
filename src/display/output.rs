use crate::analysis::scorer::{Badge, ParticipantScoreResult, ScoredParticipant};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "#")]
    rank: String,
    player: String,
    champion: String,
    team: String,
    #[tabled(rename = "K/D/A")]
    kda: String,
    cs: String,
    damage: String,
    gold: String,
    vision: String,
    score: String,
    badge: String,
}

fn badge_cell(badge: Option<Badge>) -> String {
    match badge {
        Some(Badge::Mvp) => "MVP".yellow().bold().to_string(),
        Some(Badge::Ace) => "ACE".magenta().bold().to_string(),
        None => String::new(),
    }
}

fn score_cell(score: f64) -> String {
    let text = format!("{:.1}", score);
    if score >= 8.0 {
        text.green().bold().to_string()
    } else if score >= 5.0 {
        text.normal().to_string()
    } else {
        text.red().to_string()
    }
}

pub fn display_scoreboard(label: &str, game_duration_secs: i64, ranked: &[ScoredParticipant]) {
    println!(
        "\n{}",
        format!(
            "🏆 PENTA SCORE: {} ({}m {:02}s)",
            label,
            game_duration_secs / 60,
            game_duration_secs % 60
        )
        .bold()
        .cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    let rows: Vec<ScoreRow> = ranked
        .iter()
        .map(|s| {
            let p = &s.participant;
            let team = if p.won {
                format!("{} WIN", p.team_id).green().to_string()
            } else {
                format!("{} LOSS", p.team_id).red().to_string()
            };

            ScoreRow {
                rank: format!("{}", s.result.rank),
                player: p.summoner_name.clone(),
                champion: p.champion_name.clone().unwrap_or_else(|| "-".to_string()),
                team,
                kda: p.kda_line(),
                cs: p.cs.to_string(),
                damage: p.damage_dealt.to_string(),
                gold: p.gold_earned.to_string(),
                vision: p.vision_score.to_string(),
                score: score_cell(s.result.score),
                badge: badge_cell(s.result.badge),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(mvp) = ranked.iter().find(|s| s.result.badge == Some(Badge::Mvp)) {
        println!(
            "\n{} {} ({:.1}) with {:.0}% kill participation",
            "MVP:".yellow().bold(),
            mvp.participant.summoner_name,
            mvp.result.score,
            mvp.breakdown.kill_participation * 100.0
        );
    }

    match ranked.iter().find(|s| s.result.badge == Some(Badge::Ace)) {
        Some(ace) => println!(
            "{} {} ({:.1}), best of the losing team",
            "ACE:".magenta().bold(),
            ace.participant.summoner_name,
            ace.result.score
        ),
        None => println!(
            "{}",
            "No ACE awarded: the MVP came from the losing team".dimmed()
        ),
    }

    println!();
}

pub fn display_player_result(player: &str, result: &ParticipantScoreResult, total: usize) {
    let badge = result
        .badge
        .map(|b| format!(" [{}]", b.label()))
        .unwrap_or_default();

    println!(
        "{} {} scored {} and ranked #{} of {}{}",
        "🎯".cyan(),
        player.bold(),
        score_cell(result.score),
        result.rank,
        total,
        badge.yellow().bold()
    );
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
