use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    /// A responsibility calculation was requested for a job whose results
    /// carry no primary payer record. Caller contract violation.
    #[error("eligibility job '{0}' has no primary benefit record")]
    MissingPrimaryBenefit(String),

    /// A round-robin line was asked for an assignee with an empty agent pool.
    /// Configuration error.
    #[error("fax line '{0}' is round-robin but has no assigned agents")]
    EmptyAgentPool(String),

    /// A fixed-owner line has no owner configured.
    #[error("fax line '{0}' is fixed-owner but has no owner configured")]
    MissingFixedOwner(String),

    #[error("fax line '{0}' does not exist")]
    LineNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
