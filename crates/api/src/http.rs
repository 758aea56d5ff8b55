//! HTTPS transport implementation
//!
//! Wraps reqwest and implements the Transport trait from yr-core. This is
//! the only place in the workspace that touches the network.

use async_trait::async_trait;
use url::Url;

use yr_core::{Error, Method, Request, Response, Result, Transport};

/// Transport backed by a reqwest client
///
/// One request per `send` call, the whole response body buffered before
/// the call resolves. Timeouts are whatever reqwest defaults to; callers
/// wanting bounded latency wrap the future themselves. Cancellation works
/// by dropping the future, which aborts the underlying connection.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    /// Create a transport for the given service endpoint
    pub fn new(endpoint: &str) -> Result<Self> {
        let base = Url::parse(endpoint)?;

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// The endpoint this transport talks to
    pub fn endpoint(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let url = self.base.join(&request.path)?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        // Header values stay out of the logs; Authorization carries the
        // management code.
        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let mut builder = self.http.request(method, url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?
            .to_vec();

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(Response {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
