//! Operation facade for the shortening service
//!
//! Four wire operations: create, fetch by code, edit, delete. Each one is
//! a single stateless round trip: build the request, hand it to the
//! transport, classify the response, map the entity. No retries and no
//! shared mutable state; concurrently issued calls are independent.

use serde::Serialize;

use yr_core::{
    config, protocol, Config, Method, Request, Result, ShortUrl, Transport,
};

use crate::http::HttpTransport;

/// Client-identifying string sent when no override is configured
pub fn default_user_agent() -> String {
    format!(
        "Yiff-Rocks/{} (https://github.com/FurryBotCo/Yiff-Rocks)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Options for [`ShortUrlClient::create`]
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Attribution label; the client default is used when unset
    pub credit: Option<String>,

    /// Requested short code instead of a generated one. The service
    /// answers 409 if it is already taken.
    pub code: Option<String>,

    /// Whether the service should issue a management code. Defaults to
    /// true; only an explicit false is put on the wire.
    pub editable: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            credit: None,
            code: None,
            editable: true,
        }
    }
}

/// Partial update for [`ShortUrlClient::edit`]
///
/// The wire layer forwards whatever it is given; requiring at least one
/// field is the caller's job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShortUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

impl UpdateShortUrl {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.credit.is_none()
    }
}

#[derive(Serialize)]
struct CreateBody<'a> {
    url: &'a str,
    credit: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

/// A client for the URL shortening service.
///
/// Carries its configuration explicitly, so clients with different user
/// agents or endpoints can coexist in one process.
///
/// # Example
///
/// ```no_run
/// use yr_api::ShortUrlClient;
///
/// # async fn example() -> yr_core::Result<()> {
/// let client = ShortUrlClient::new("https://yiff.rocks")?;
/// let short = client.get_by_code("OwOWhatsThis").await?;
/// println!("{} -> {}", short.full_url, short.url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShortUrlClient<T = HttpTransport> {
    transport: T,
    user_agent: String,
    credit: String,
}

impl ShortUrlClient<HttpTransport> {
    /// Create a client for the given service endpoint
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(endpoint)?))
    }

    /// Create a client from a loaded configuration
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let mut client = Self::new(&cfg.endpoint)?;
        if let Some(agent) = &cfg.user_agent {
            client.user_agent = agent.clone();
        }
        if let Some(credit) = &cfg.credit {
            client.credit = credit.clone();
        }
        Ok(client)
    }
}

impl<T: Transport> ShortUrlClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            user_agent: default_user_agent(),
            credit: config::DEFAULT_CREDIT.to_string(),
        }
    }

    /// Set the client-identifying user agent string
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the default credit label for created short URLs
    #[must_use]
    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = credit.into();
        self
    }

    /// Shorten a URL.
    ///
    /// The service creates a new record or returns the existing one for a
    /// URL that was already shortened; both come back 200. An existing
    /// record carries no `managementCode`, which is the only reliable way
    /// to tell the two apart.
    pub async fn create(&self, url: &str, options: &CreateOptions) -> Result<ShortUrl> {
        let path = if options.editable {
            "/create"
        } else {
            "/create?editable=false"
        };

        let body = serde_json::to_string(&CreateBody {
            url,
            credit: options.credit.as_deref().unwrap_or(&self.credit),
            code: options.code.as_deref(),
        })?;

        let request = Request::new(Method::Post, path)
            .header("User-Agent", &self.user_agent)
            .json(body);

        let response = self.transport.send(request).await?;
        protocol::to_entity(protocol::classify(protocol::STATUS_OK, &response)?)
    }

    /// Fetch the record behind a short code.
    pub async fn get_by_code(&self, code: &str) -> Result<ShortUrl> {
        let request = Request::new(Method::Get, format!("/{code}.json"))
            .header("User-Agent", &self.user_agent);

        let response = self.transport.send(request).await?;
        protocol::to_entity(protocol::classify(protocol::STATUS_OK, &response)?)
    }

    /// Fetch the record for a URL.
    ///
    /// A shortcut over [`create`](Self::create) relying on the service's
    /// create-or-return behavior; not a separate wire operation.
    pub async fn get_by_url(&self, url: &str) -> Result<ShortUrl> {
        self.create(url, &CreateOptions::default()).await
    }

    /// Edit an existing short URL.
    ///
    /// `management_code` is the secret returned once at creation; it
    /// authorizes the change through the Authorization header.
    pub async fn edit(
        &self,
        code: &str,
        management_code: &str,
        update: &UpdateShortUrl,
    ) -> Result<ShortUrl> {
        let body = serde_json::to_string(update)?;

        let request = Request::new(Method::Patch, format!("/{code}.json"))
            .header("User-Agent", &self.user_agent)
            .header("Authorization", management_code)
            .json(body);

        let response = self.transport.send(request).await?;
        protocol::to_entity(protocol::classify(protocol::STATUS_OK, &response)?)
    }

    /// Delete an existing short URL.
    ///
    /// Success is 204 with an empty body; there is no entity to return.
    pub async fn delete(&self, code: &str, management_code: &str) -> Result<()> {
        let request = Request::new(Method::Delete, format!("/{code}.json"))
            .header("User-Agent", &self.user_agent)
            .header("Authorization", management_code);

        let response = self.transport.send(request).await?;
        protocol::classify_empty(protocol::STATUS_NO_CONTENT, &response)
    }
}
