//! The HTTP capabilities the processor depends on.
//!
//! Two seams are modelled as traits so the processor can be driven by in-memory
//! fakes in tests: a one-shot GET ([`HttpClient`]) and a streaming GET that yields
//! lines until it is explicitly closed ([`HttpStreamClient`] / [`LineStream`]).

pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod reqwest_client;

use crate::http::error::HttpError;
use std::collections::HashMap;

/// Request headers as name/value pairs.
pub type Headers = HashMap<String, String>;

/// Status and body of a completed one-shot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpClient {
    /// Issues a GET and returns the response whatever its status.
    ///
    /// Only transport failures are errors; a 4xx/5xx status is a regular response.
    fn get(&self, url: &str, headers: &Headers) -> Result<HttpResponse, HttpError>;
}

/// An open streaming response, read line by line.
pub trait LineStream: Iterator<Item = Result<String, HttpError>> {
    /// Releases the underlying connection. Lines are no longer yielded afterwards.
    fn close(&mut self);
}

pub trait HttpStreamClient {
    type Stream: LineStream;

    /// Opens a streaming GET. A non-success status is an error.
    fn get(&self, url: &str, headers: &Headers) -> Result<Self::Stream, HttpError>;
}
