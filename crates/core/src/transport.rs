//! Transport trait and wire-level request/response types
//!
//! Requests and responses are described as plain data so the protocol
//! layer stays independent of any particular HTTP client. The `Transport`
//! trait is the seam between the two: yr-api provides the real HTTPS
//! implementation, tests substitute scripted doubles.

use async_trait::async_trait;

use crate::error::Result;

/// HTTP method for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to the service, described as plain data
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,

    /// Absolute path on the service host, query string included
    pub path: String,

    /// Header name/value pairs, in send order
    pub headers: Vec<(String, String)>,

    /// UTF-8 JSON body, POST/PATCH only
    pub body: Option<String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body and the matching content type
    #[must_use]
    pub fn json(mut self, body: String) -> Self {
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }
}

/// A fully buffered response from the service
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Status reason phrase, used in error messages
    pub reason: String,

    /// Raw body bytes, complete before the response is handed over
    pub body: Vec<u8>,
}

/// A single HTTPS round trip.
///
/// Implementations issue the request, buffer the entire response body and
/// resolve once it is complete. A connection failure before a status code
/// was obtained surfaces as [`Error::Transport`](crate::Error::Transport).
/// No retries, no pooling requirements; each call is independent, so
/// concurrent calls need no coordination.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}
