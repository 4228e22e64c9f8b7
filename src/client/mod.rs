//! Client layer: authentication, configuration, and the reqwest-backed
//! transport behind every resource handle.

pub(crate) mod rest;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::client::rest::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, RestClient};
use crate::domain::{ValidationError, ValidationResult};
use crate::resources::{AccountCollectionResource, AccountResource};

pub use crate::client::rest::Method;

const DEFAULT_BASE_URL: &str = "https://mailtrap.io";
const USER_AGENT: &str = concat!("mailtrap-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Mailtrap API token, sent as a bearer `Authorization` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiToken(String);

impl ApiToken {
    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyValue { field: "api_token" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MailtrapClient`] operations.
///
/// This error preserves:
/// - client-side validation failures (raised before any network call),
/// - HTTP-level failures (non-2xx status or transport failures),
/// - response parse failures.
pub enum MailtrapError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status {status} for {method} {url}")]
    HttpStatus {
        method: Method,
        url: Url,
        status: u16,
        /// Parsed error body, when the server sent a non-blank one.
        body: Option<String>,
    },

    /// The request failed client-side validation; nothing was sent.
    #[error("validation failed for {method} {url}: {result}")]
    Validation {
        method: Method,
        url: Url,
        result: ValidationResult,
    },

    /// Request or response body could not be (de)serialized.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL cannot serve as a REST root.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] ValidationError),
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    token: ApiToken,
}

impl ReqwestTransport {
    fn map_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    /// Assemble the outgoing reqwest request: bearer auth, `Accept`, and a
    /// JSON `Content-Type` when a body is present.
    fn build_request(&self, request: &HttpRequest) -> Result<reqwest::Request, reqwest::Error> {
        let mut builder = self
            .client
            .request(Self::map_method(request.method), request.url.clone())
            .bearer_auth(self.token.as_str())
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        builder.build()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let outgoing = self.build_request(request)?;
            let response = self.client.execute(outgoing).await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`MailtrapClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct MailtrapClientBuilder {
    token: ApiToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MailtrapClientBuilder {
    /// Create a builder with the default base URL and no timeout override.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (useful for mocks and regional endpoints).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MailtrapClient`].
    pub fn build(self) -> Result<MailtrapClient, MailtrapError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|err| MailtrapError::InvalidBaseUrl(format!("{}: {err}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(MailtrapError::InvalidBaseUrl(self.base_url));
        }

        let builder = reqwest::Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned()));
        let builder = match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        let client = builder
            .build()
            .map_err(|err| MailtrapError::Transport(Box::new(err)))?;

        Ok(MailtrapClient {
            rest: RestClient::new(Arc::new(ReqwestTransport {
                client,
                token: self.token,
            })),
            base_url,
        })
    }
}

#[derive(Clone)]
/// Entry point to the Mailtrap API.
///
/// The client is a factory for resource handles; constructing a handle
/// composes a URI and performs no I/O. Operations on handles are independent
/// single round trips and may run concurrently — the client holds no mutable
/// state and imposes no ordering.
pub struct MailtrapClient {
    rest: RestClient,
    base_url: Url,
}

impl MailtrapClient {
    /// Create a client for the default API endpoint.
    ///
    /// For more customization, use [`MailtrapClient::builder`].
    pub fn new(token: ApiToken) -> Result<Self, MailtrapError> {
        MailtrapClientBuilder::new(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ApiToken) -> MailtrapClientBuilder {
        MailtrapClientBuilder::new(token)
    }

    /// Handle for the accounts collection.
    pub fn accounts(&self) -> AccountCollectionResource {
        AccountCollectionResource::new(self.rest.clone(), self.accounts_url())
    }

    /// Handle for a single account.
    pub fn account(&self, account_id: i64) -> AccountResource {
        AccountResource::new(
            self.rest.clone(),
            rest::append_segment(&self.accounts_url(), &account_id.to_string()),
        )
    }

    fn accounts_url(&self) -> Url {
        rest::append_segment(&rest::append_segment(&self.base_url, "api"), "accounts")
    }
}
