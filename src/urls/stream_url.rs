//! Request construction for the sampled stream endpoint.

use crate::http::Headers;
use crate::types::stream_fields::{join_fields, Expansion, PlaceField, TweetField};
use crate::urls::error::{CredentialError, UrlError};
use crate::utils::{parse_endpoint, read_env_secret};
use bon::bon;
use log::debug;
use reqwest::Url;

pub const STREAM_API_ENDPOINT: &str = "https://api.twitter.com/2/tweets/sample/stream";
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Builds the URL and authorization headers for the sampled stream.
///
/// The endpoint and the name of the environment variable holding the bearer token
/// default to [`STREAM_API_ENDPOINT`] and [`BEARER_TOKEN_VAR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamUrlBuilder {
    endpoint: String,
    token_var: String,
}

impl Default for StreamUrlBuilder {
    fn default() -> Self {
        Self {
            endpoint: STREAM_API_ENDPOINT.to_string(),
            token_var: BEARER_TOKEN_VAR.to_string(),
        }
    }
}

#[bon]
impl StreamUrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_token_var(mut self, token_var: impl Into<String>) -> Self {
        self.token_var = token_var.into();
        self
    }

    /// Authorization headers for the stream request.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::MissingCredential`] if the bearer token variable is
    /// unset or empty.
    pub fn get_headers(&self) -> Result<Headers, CredentialError> {
        let bearer_token = read_env_secret(&self.token_var)?;
        Ok(Headers::from([(
            "Authorization".to_string(),
            format!("Bearer {}", bearer_token),
        )]))
    }

    /// Builds the stream URL with the requested fields and expansions.
    ///
    /// Each non-empty list becomes a comma separated query parameter
    /// (`tweet.fields`, `expansions`, `place.fields`). Without any parameters the
    /// endpoint is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use geostream_weather::{Expansion, StreamUrlBuilder, STREAM_API_ENDPOINT};
    ///
    /// let urls = StreamUrlBuilder::new();
    /// let url = urls.get_url().expansions(vec![Expansion::PlaceId]).call().unwrap();
    /// assert_eq!(url.as_str(), format!("{}?expansions=geo.place_id", STREAM_API_ENDPOINT));
    /// ```
    #[builder]
    pub fn get_url(
        &self,
        tweet_fields: Option<Vec<TweetField>>,
        expansions: Option<Vec<Expansion>>,
        place_fields: Option<Vec<PlaceField>>,
    ) -> Result<Url, UrlError> {
        let mut query_params = Vec::new();
        if let Some(fields) = tweet_fields.filter(|f| !f.is_empty()) {
            query_params.push(("tweet.fields", join_fields(&fields)));
        }
        if let Some(fields) = expansions.filter(|f| !f.is_empty()) {
            query_params.push(("expansions", join_fields(&fields)));
        }
        if let Some(fields) = place_fields.filter(|f| !f.is_empty()) {
            query_params.push(("place.fields", join_fields(&fields)));
        }

        let mut url = parse_endpoint(&self.endpoint)?;
        if !query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(query_params);
            debug!("Parsed params: {}", url.query().unwrap_or_default());
        }
        Ok(url)
    }
}
