use crate::config::ConfigError;
use crate::geo::error::GeometryError;
use crate::http::error::HttpError;
use crate::urls::error::{CredentialError, UrlError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Url(#[from] UrlError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Failed to parse stream line as JSON: {line}")]
    MalformedRecord {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create output file '{0}'")]
    OutputCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write output")]
    OutputWrite(#[source] std::io::Error),

    #[error("The processor has already run, create a new one for another run")]
    AlreadyStarted,
}
