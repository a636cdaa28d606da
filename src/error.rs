use thiserror::Error;

/// Rejected inputs to the target calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DlsError {
    #[error("first innings must have bowled at least one ball, got {overs} overs")]
    NoOversBowled { overs: f64 },

    #[error("total overs must be positive, got {overs}")]
    InvalidTotalOvers { overs: u32 },

    #[error("team 2 allotted overs must be positive, got {overs}")]
    InvalidAllottedOvers { overs: f64 },

    #[error("unknown match format: {0}")]
    UnknownFormat(String),

    #[error("resource table is not monotonic at {overs} overs, {wickets} wickets")]
    InvalidResourceTable { overs: usize, wickets: usize },
}
