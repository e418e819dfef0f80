use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model bundle error: {0}")]
    ModelBundle(String),

    #[error("Unknown {field} category: {value}")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Invalid experience value: {0}")]
    InvalidExperience(String),
}

pub type Result<T> = std::result::Result<T, Error>;
