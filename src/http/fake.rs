//! In-memory HTTP clients for driving the processor in tests.

use crate::http::error::HttpError;
use crate::http::{Headers, HttpClient, HttpResponse, HttpStreamClient, LineStream};
use crate::processor::interrupt::Interrupt;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum FakeLine {
    Line(String),
    ReadError,
}

/// Serves a fixed list of lines. Clones share the request log and close counter.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeStreamClient {
    lines: Vec<FakeLine>,
    interrupt_after: Option<(usize, Interrupt)>,
    requests: Rc<RefCell<Vec<(String, Headers)>>>,
    closes: Rc<Cell<usize>>,
}

impl FakeStreamClient {
    pub(crate) fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| FakeLine::Line(l.into())).collect(),
            ..Self::default()
        }
    }

    /// Appends a line that fails to read.
    pub(crate) fn with_read_error(mut self) -> Self {
        self.lines.push(FakeLine::ReadError);
        self
    }

    /// Raises `interrupt` right after the `count`-th line has been handed out.
    pub(crate) fn interrupt_after(mut self, count: usize, interrupt: Interrupt) -> Self {
        self.interrupt_after = Some((count, interrupt));
        self
    }

    pub(crate) fn close_count(&self) -> usize {
        self.closes.get()
    }

    pub(crate) fn requests(&self) -> Vec<(String, Headers)> {
        self.requests.borrow().clone()
    }
}

impl HttpStreamClient for FakeStreamClient {
    type Stream = FakeLineStream;

    fn get(&self, url: &str, headers: &Headers) -> Result<Self::Stream, HttpError> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), headers.clone()));
        Ok(FakeLineStream {
            lines: self.lines.clone().into(),
            served: 0,
            interrupt_after: self.interrupt_after.clone(),
            closed: false,
            closes: Rc::clone(&self.closes),
        })
    }
}

#[derive(Debug)]
pub(crate) struct FakeLineStream {
    lines: VecDeque<FakeLine>,
    served: usize,
    interrupt_after: Option<(usize, Interrupt)>,
    closed: bool,
    closes: Rc<Cell<usize>>,
}

impl Iterator for FakeLineStream {
    type Item = Result<String, HttpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }
        let line = self.lines.pop_front()?;
        self.served += 1;
        if let Some((count, interrupt)) = &self.interrupt_after {
            if self.served == *count {
                interrupt.trigger();
            }
        }
        Some(match line {
            FakeLine::Line(line) => Ok(line),
            FakeLine::ReadError => Err(HttpError::StreamRead(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset",
            ))),
        })
    }
}

impl LineStream for FakeLineStream {
    fn close(&mut self) {
        self.closed = true;
        self.closes.set(self.closes.get() + 1);
    }
}

#[derive(Debug)]
enum FakeReply {
    Response(HttpResponse),
    TransportError,
}

/// Answers requests from a queue of canned replies, then with 503s.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeHttpClient {
    replies: Rc<RefCell<VecDeque<FakeReply>>>,
    requested: Rc<RefCell<Vec<String>>>,
}

impl FakeHttpClient {
    pub(crate) fn new(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
        let client = Self::default();
        for response in responses {
            client.push_response(response);
        }
        client
    }

    pub(crate) fn push_response(&self, response: HttpResponse) {
        self.replies
            .borrow_mut()
            .push_back(FakeReply::Response(response));
    }

    /// Queues a request that fails before any response arrives.
    pub(crate) fn push_transport_error(&self) {
        self.replies.borrow_mut().push_back(FakeReply::TransportError);
    }

    /// A successful weather report for the given temperature.
    pub(crate) fn temperature(temp_f: f64) -> HttpResponse {
        HttpResponse::new(
            200,
            format!(
                r#"{{"location": {{"name": "Long Beach"}}, "current": {{"temp_f": {:?}, "temp_c": 0.0}}}}"#,
                temp_f
            ),
        )
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl HttpClient for FakeHttpClient {
    fn get(&self, url: &str, _headers: &Headers) -> Result<HttpResponse, HttpError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.replies.borrow_mut().pop_front() {
            Some(FakeReply::Response(response)) => Ok(response),
            Some(FakeReply::TransportError) => Err(transport_error(url)),
            None => Ok(HttpResponse::new(503, "Service Unavailable")),
        }
    }
}

// An unparsable URL makes reqwest fail before connecting, which yields a real
// `reqwest::Error` without touching the network.
fn transport_error(url: &str) -> HttpError {
    let source = reqwest::blocking::Client::new()
        .get("http://[::1")
        .send()
        .expect_err("request to an invalid URL should fail");
    HttpError::NetworkRequest(url.to_string(), source)
}
