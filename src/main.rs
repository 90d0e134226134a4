use clap::{Args as ClapArgs, Parser, Subcommand};
use indicatif::ProgressBar;
use penta_score::api::client::RiotApiClient;
use penta_score::analysis::match_record::by_match_id;
use penta_score::cache::MatchCache;
use penta_score::config::Config;
use penta_score::display::output::{
    display_error, display_info, display_player_result, display_scoreboard, display_success,
};
use penta_score::telemetry::init_telemetry;
use penta_score::{AppError, MatchParticipant, MatchRecord, PerformanceScorer};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "penta")]
#[command(about = "Score every player of a finished match and award MVP / ACE", long_about = None)]
struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a match stored as JSON on disk
    File {
        /// Path to a match file ({"gameDuration": .., "participants": [..]})
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch matches from the Riot API (or the local cache) and score them
    Fetch {
        /// One or more Match-V5 ids, e.g. NA1_4912345678
        #[arg(required = true)]
        match_ids: Vec<String>,

        /// Region (default: RIOT_REGION or na1)
        #[arg(short, long)]
        region: Option<String>,

        /// Force refresh from Riot API (ignore cache)
        #[arg(long)]
        refresh: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Only report this player's result
    #[arg(short, long)]
    player: Option<String>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    init_telemetry(args.verbose);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Command::File { path, output } => {
            let record = MatchRecord::from_file(&path)?;
            info!(path = %path.display(), participants = record.participants.len(), "loaded match file");
            report(&record, &output)
        }
        Command::Fetch {
            match_ids,
            region,
            refresh,
            output,
        } => {
            let mut config = Config::from_env()?;
            if let Some(region) = region {
                config.region = region;
            }

            let records = fetch_matches(config, &match_ids, refresh, output.json)?;
            if output.json {
                let keyed = by_match_id(&records, |record| json_report(record, &output))?;
                return print_json(&keyed);
            }
            for record in &records {
                report(record, &output)?;
            }
            Ok(())
        }
    }
}

fn fetch_matches(
    config: Config,
    match_ids: &[String],
    refresh: bool,
    quiet: bool,
) -> Result<Vec<MatchRecord>, AppError> {
    let cache = MatchCache::new(config.cache_dir.clone());
    debug!(dir = %cache.dir().display(), "using match cache");

    if !quiet {
        display_info(&format!(
            "Loading {} match(es) in region {}",
            match_ids.len(),
            config.region
        ));
    }

    let client = RiotApiClient::new(config);
    let pb = if quiet || match_ids.len() < 2 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(match_ids.len() as u64)
    };
    pb.set_message("Fetching match details");

    let mut records = Vec::with_capacity(match_ids.len());
    let mut fetched = 0;

    for match_id in match_ids {
        let cached = if refresh { None } else { cache.load(match_id)? };

        let record = match cached {
            Some(entry) => entry.record,
            None => {
                let record = client.get_match(match_id)?;
                fetched += 1;
                // best effort
                if let Err(e) = cache.save(&record) {
                    warn!(match_id = %match_id, error = %e, "could not cache match");
                }
                record
            }
        };

        records.push(record);
        pb.inc(1);
    }

    pb.finish_and_clear();

    if !quiet {
        display_success(&format!(
            "⚡ {} from Riot API, {} from cache",
            fetched,
            match_ids.len() - fetched
        ));
    }

    Ok(records)
}

fn find_player<'a>(
    record: &'a MatchRecord,
    name: &str,
) -> Result<&'a MatchParticipant, AppError> {
    record
        .find(name)
        .ok_or_else(|| AppError::PlayerNotFound(name.to_string()))
}

fn json_report(record: &MatchRecord, output: &OutputArgs) -> Result<serde_json::Value, AppError> {
    let value = match &output.player {
        Some(name) => {
            let participant = find_player(record, name)?;
            let result =
                PerformanceScorer::score(participant, &record.participants, record.game_duration)?;
            serde_json::to_value(result)
        }
        None => serde_json::to_value(record.score_map()?),
    };
    value.map_err(|e| AppError::JsonError(e.to_string()))
}

fn report(record: &MatchRecord, output: &OutputArgs) -> Result<(), AppError> {
    if output.json {
        return print_json(&json_report(record, output)?);
    }

    if let Some(name) = &output.player {
        let participant = find_player(record, name)?;
        let result = PerformanceScorer::score(participant, &record.participants, record.game_duration)?;
        display_player_result(participant.identity(), &result, record.participants.len());
    } else {
        let ranked = record.score()?;
        display_scoreboard(record.label(), record.game_duration, &ranked);
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::JsonError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
