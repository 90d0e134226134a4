pub mod match_record;
pub mod performance;
pub mod scorer;
