use std::path::PathBuf;

use penta_score::{AppError, Badge, MatchRecord, PerformanceScorer};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn ranked_match_fixture_scores_all_ten() {
    let record = MatchRecord::from_file(&fixture("ranked_match.json"))
        .expect("fixture should parse");
    assert_eq!(record.label(), "KR_7012345678");
    assert_eq!(record.participants.len(), 10);

    let ranked = record.score().expect("fixture should score");
    let ranks: Vec<usize> = ranked.iter().map(|s| s.result.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());

    let mvp = &ranked[0];
    assert_eq!(mvp.result.badge, Some(Badge::Mvp));
    assert!(mvp.participant.won);

    let ace = ranked
        .iter()
        .find(|s| s.result.badge == Some(Badge::Ace))
        .expect("winning-team MVP leaves the ACE to the losers");
    assert!(!ace.participant.won);
    assert!(ranked
        .iter()
        .filter(|s| !s.participant.won)
        .all(|s| s.result.rank >= ace.result.rank));
}

#[test]
fn lookup_by_name_is_case_insensitive() {
    let record = MatchRecord::from_file(&fixture("ranked_match.json")).unwrap();
    let faker = record.find("faker#kr1").expect("player should be found");
    let result = PerformanceScorer::score(faker, &record.participants, record.game_duration)
        .unwrap();
    assert!(result.rank >= 1 && result.rank <= 10);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = MatchRecord::from_file(&fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, AppError::IoError(_)));
}
