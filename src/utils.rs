use crate::urls::error::{CredentialError, UrlError};
use log::warn;
use reqwest::Url;

/// Reads a secret from the environment. Unset and empty variables are treated alike.
pub fn read_env_secret(variable: &str) -> Result<String, CredentialError> {
    match std::env::var(variable) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            warn!("Credential not found in environment variable {}", variable);
            Err(CredentialError::MissingCredential {
                variable: variable.to_string(),
            })
        }
    }
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url, UrlError> {
    Url::parse(endpoint).map_err(|e| UrlError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
