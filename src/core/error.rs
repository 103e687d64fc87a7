use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaissError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DaissError>;

impl From<rand_distr::NormalError> for DaissError {
    fn from(err: rand_distr::NormalError) -> Self {
        DaissError::InvalidConfig(format!("normal distribution: {}", err))
    }
}
