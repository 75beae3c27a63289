use crate::config::ConfigError;
use crate::http::error::HttpError;
use crate::processor::error::ProcessorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoWeatherError {
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to install the Ctrl+C handler")]
    SignalHandler(#[from] ctrlc::Error),
}
