use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential not found, environment variable '{variable}' is missing or empty")]
    MissingCredential { variable: String },
}

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error(transparent)]
    Credential(#[from] CredentialError),
}
