//! Error handling for diagnet.
//! One thiserror enum per subsystem, unified under [`DiagnetError`].

pub mod config_error;
pub mod corpus_error;
pub mod error_code;
pub mod model_error;
pub mod query_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use error_code::DiagnetErrorCode;
pub use model_error::ModelError;
pub use query_error::QueryError;
pub use storage_error::StorageError;

/// Top-level error for every fallible diagnet operation.
#[derive(Debug, thiserror::Error)]
pub enum DiagnetError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DiagnetErrorCode for DiagnetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Corpus(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type DiagnetResult<T> = Result<T, DiagnetError>;
