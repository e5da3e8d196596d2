//! CLI errors.

use diagnet_core::errors::DiagnetErrorCode;
use diagnet_core::DiagnetError;

const CLI_USAGE: &str = "CLI_USAGE";
const CLI_IO: &str = "CLI_IO";
const CLI_SERIALIZATION: &str = "CLI_SERIALIZATION";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Diagnet(#[from] DiagnetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiagnetErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(_) => CLI_USAGE,
            Self::Diagnet(e) => e.error_code(),
            Self::Io(_) => CLI_IO,
            Self::Serialization(_) => CLI_SERIALIZATION,
        }
    }
}

macro_rules! impl_from_subsystem {
    ($($ty:ty),*) => {
        $(impl From<$ty> for CliError {
            fn from(e: $ty) -> Self {
                Self::Diagnet(e.into())
            }
        })*
    };
}

impl_from_subsystem!(
    diagnet_core::errors::ConfigError,
    diagnet_core::errors::CorpusError,
    diagnet_core::errors::StorageError
);
