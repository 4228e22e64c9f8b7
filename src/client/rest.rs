//! One-shot REST command execution: URL composition, validation-before-send,
//! dispatch, and response decoding.
//!
//! Every resource operation is exactly one HTTP round trip: Idle → Sending →
//! Success(parsed body) | Failure(status + body). No retries, no caching.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::client::MailtrapError;
use crate::domain::Validate;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP method of a REST command.
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Canonical upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

/// Append one path segment, percent-encoding it as needed.
pub(crate) fn append_segment(url: &Url, segment: &str) -> Url {
    let mut out = url.clone();
    {
        // The builder rejects cannot-be-a-base URLs, so this always succeeds.
        let mut segments = out
            .path_segments_mut()
            .expect("base URL is hierarchical");
        segments.pop_if_empty();
        segments.push(segment);
    }
    out
}

/// Append a query parameter, keeping any existing ones.
pub(crate) fn with_query_param(url: &Url, key: &str, value: &str) -> Url {
    let mut out = url.clone();
    out.query_pairs_mut().append_pair(key, value);
    out
}

#[derive(Clone)]
/// Executes REST commands against a shared transport.
///
/// Cloning is cheap; every resource handle holds one of these plus its URI.
pub(crate) struct RestClient {
    http: Arc<dyn HttpTransport>,
}

impl RestClient {
    pub(crate) fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self { http }
    }

    pub(crate) async fn get<T>(&self, url: Url) -> Result<T, MailtrapError>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::Get, url, None).await
    }

    pub(crate) async fn delete<T>(&self, url: Url) -> Result<T, MailtrapError>
    where
        T: DeserializeOwned,
    {
        self.execute(Method::Delete, url, None).await
    }

    /// DELETE where success carries no body (204 No Content).
    pub(crate) async fn delete_no_content(&self, url: Url) -> Result<(), MailtrapError> {
        self.dispatch(Method::Delete, url, None).await.map(|_| ())
    }

    pub(crate) async fn post<R, T>(&self, url: Url, request: &R) -> Result<T, MailtrapError>
    where
        R: Validate + Serialize,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Post, url, request).await
    }

    pub(crate) async fn put<R, T>(&self, url: Url, request: &R) -> Result<T, MailtrapError>
    where
        R: Validate + Serialize,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Put, url, request).await
    }

    pub(crate) async fn patch<R, T>(&self, url: Url, request: &R) -> Result<T, MailtrapError>
    where
        R: Validate + Serialize,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Patch, url, request).await
    }

    /// Validate, serialize, and dispatch a request with a JSON body.
    ///
    /// A failing validation short-circuits before serialization, so nothing
    /// reaches the transport.
    async fn send_with_body<R, T>(
        &self,
        method: Method,
        url: Url,
        request: &R,
    ) -> Result<T, MailtrapError>
    where
        R: Validate + Serialize,
        T: DeserializeOwned,
    {
        let result = request.validate();
        if !result.is_valid() {
            debug!(%method, %url, errors = result.errors().len(), "request failed validation");
            return Err(MailtrapError::Validation {
                method,
                url,
                result,
            });
        }

        let body =
            serde_json::to_string(request).map_err(|err| MailtrapError::Parse(Box::new(err)))?;
        self.execute(method, url, Some(body)).await
    }

    async fn execute<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<T, MailtrapError>
    where
        T: DeserializeOwned,
    {
        let body = self.dispatch(method, url, body).await?;
        serde_json::from_str(&body).map_err(|err| MailtrapError::Parse(Box::new(err)))
    }

    /// Send the request and return the raw success body, mapping transport
    /// failures and non-2xx statuses to errors.
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<String, MailtrapError> {
        debug!(%method, %url, "sending request");

        let request = HttpRequest { method, url, body };
        let response = self
            .http
            .send(&request)
            .await
            .map_err(MailtrapError::Transport)?;

        debug!(%method, url = %request.url, status = response.status, "received response");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(MailtrapError::HttpStatus {
                method,
                url: request.url,
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
