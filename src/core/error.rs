use crate::milestones::MilestoneType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoalError {
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),

    #[error("Unknown milestone: {0}")]
    UnknownMilestone(String),

    #[error("Unknown enrichment activity: {0}")]
    UnknownActivity(String),

    #[error("Invalid evaluation record: {0}")]
    InvalidEvaluation(String),

    #[error("Evaluation is for {expected}, not {found}")]
    MilestoneMismatch {
        expected: MilestoneType,
        found: MilestoneType,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FoalError>;
