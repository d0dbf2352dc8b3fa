//! HTTP transport capability and its reqwest-backed implementation.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use reqwest::Method;
use reqwest::header::HeaderMap;

/// Boxed error produced by a transport.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Boxed future returned by [`HttpTransport::execute`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Fully formed outgoing request.
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Response returned by a transport.
///
/// The body is read at most once through [`HttpResponse::into_body`]. Dropping the response
/// without reading it releases the underlying connection.
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    body: BoxFuture<'static, Result<Vec<u8>, BoxError>>,
}

impl HttpResponse {
    /// Response with an already buffered body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::pin(async move { Ok::<_, BoxError>(body) }),
        }
    }

    /// Response whose body is produced by `body` when it is read.
    pub fn streaming<F>(status: u16, headers: HeaderMap, body: F) -> Self
    where
        F: Future<Output = Result<Vec<u8>, BoxError>> + Send + 'static,
    {
        Self {
            status,
            headers,
            body: Box::pin(body),
        }
    }

    /// `true` for `2xx` statuses.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Read the whole body into memory.
    pub async fn into_body(self) -> Result<Vec<u8>, BoxError> {
        self.body.await
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Something that can execute one HTTP request.
///
/// Implementations must be safe to share across concurrent calls. No retry or timeout is
/// added on top of what the implementation does itself.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone, Default)]
/// [`HttpTransport`] backed by a [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Client> for ReqwestTransport {
    fn from(client: reqwest::Client) -> Self {
        Self::new(client)
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url.as_str())
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();

            Ok(HttpResponse::streaming(status, headers, async move {
                let bytes = response.bytes().await?;
                Ok::<_, BoxError>(bytes.to_vec())
            }))
        })
    }
}
