use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid station code format: {code:?}")]
    InvalidFormat { code: String },

    #[error("Station {code} does not exist")]
    UnknownStation { code: String },

    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    #[error("Invalid fare table: {0}")]
    InvalidFareTable(String),
}

impl DomainError {
    pub fn invalid_format(code: impl Into<String>) -> Self {
        Self::InvalidFormat { code: code.into() }
    }

    pub fn unknown_station(code: impl ToString) -> Self {
        Self::UnknownStation {
            code: code.to_string(),
        }
    }

    /// Whether the error came from user-supplied station input rather
    /// than from static configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFormat { .. } | DomainError::UnknownStation { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Station list error: {0}")]
    StationList(#[from] csv::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Infra(InfraError::Io(err))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
