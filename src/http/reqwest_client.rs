//! Blocking `reqwest` implementations of the HTTP traits.

use crate::http::error::HttpError;
use crate::http::{Headers, HttpClient, HttpResponse, HttpStreamClient, LineStream};
use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::io::{BufRead, BufReader, Lines};
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn to_header_map(headers: &Headers) -> Result<HeaderMap, HttpError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| HttpError::InvalidHeader(name.clone()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| HttpError::InvalidHeader(name.to_string()))?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

/// One-shot GET requests.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client with the [`DEFAULT_REQUEST_TIMEOUT`].
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(Some(DEFAULT_REQUEST_TIMEOUT))
    }

    /// Creates a client with the given per-request timeout, `None` waits forever.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HttpError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str, headers: &Headers) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .get(url)
            .headers(to_header_map(headers)?)
            .send()
            .map_err(|e| HttpError::NetworkRequest(url.to_string(), e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| HttpError::BodyRead(url.to_string(), e))?;
        Ok(HttpResponse { status, body })
    }
}

/// Streaming GET requests. The client never times out, since the stream stays
/// open for as long as the run lasts.
#[derive(Debug, Clone)]
pub struct ReqwestStreamClient {
    client: Client,
}

impl ReqwestStreamClient {
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(HttpError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl HttpStreamClient for ReqwestStreamClient {
    type Stream = ReqwestLineStream;

    fn get(&self, url: &str, headers: &Headers) -> Result<Self::Stream, HttpError> {
        let response = self
            .client
            .get(url)
            .headers(to_header_map(headers)?)
            .send()
            .map_err(|e| HttpError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    HttpError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    HttpError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        debug!("Opened stream {}", url);
        Ok(ReqwestLineStream {
            lines: Some(BufReader::new(response).lines()),
        })
    }
}

/// Lines of an open streaming response. Dropping the reader closes the connection.
#[derive(Debug)]
pub struct ReqwestLineStream {
    lines: Option<Lines<BufReader<Response>>>,
}

impl Iterator for ReqwestLineStream {
    type Item = Result<String, HttpError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .as_mut()?
            .next()
            .map(|line| line.map_err(HttpError::from))
    }
}

impl LineStream for ReqwestLineStream {
    fn close(&mut self) {
        if self.lines.take().is_some() {
            debug!("Closed stream");
        }
    }
}
