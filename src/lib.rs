pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod telemetry;

pub use analysis::match_record::MatchRecord;
pub use analysis::performance::{MatchBaseline, MatchParticipant, ScoreBreakdown};
pub use analysis::scorer::{Badge, ParticipantScoreResult, PerformanceScorer, ScoredParticipant};
pub use error::{AppError, ScoreError};
