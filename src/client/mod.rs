//! Client layer: builds authenticated requests, dispatches them and decodes responses.

mod error;
mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{Sms, SmsResponse};
use crate::transport::{decode_json_into, encode_json_payload};

pub use error::ClickSendError;
pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const DEFAULT_BASE_URL: &str = "https://rest.clicksend.com/v3";
const DEFAULT_SEND_SMS_PATH: &str = "email/batch";
const APPLICATION_JSON: &str = "application/json";

#[derive(Clone, PartialEq, Eq)]
/// ClickSend account credentials.
///
/// Both values are passed through as given; nothing is validated.
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value of the `Authorization` header: `base64(username:api_key)`, prefixed with
    /// `Basic ` only for [`AuthorizationStyle::Basic`].
    pub fn authorization(&self, style: AuthorizationStyle) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.api_key));
        match style {
            AuthorizationStyle::Bare => encoded,
            AuthorizationStyle::Basic => format!("Basic {encoded}"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Format of the `Authorization` header.
pub enum AuthorizationStyle {
    /// Bare `base64(username:api_key)` with no scheme.
    ///
    /// This is not a complete HTTP Basic credential. It stays the default until the
    /// provider confirms which form it expects.
    #[default]
    Bare,
    /// `Basic base64(username:api_key)` as defined by RFC 7617.
    Basic,
}

#[derive(Debug)]
/// Per-call request description for [`ClickSendClient::dispatch`].
///
/// `path` is appended to the base URL after a single `/` without escaping or normalization.
pub struct RequestParameters<'a, P: ?Sized = ()> {
    pub method: &'a str,
    pub path: &'a str,
    pub payload: Option<&'a P>,
}

impl<'a> RequestParameters<'a, ()> {
    /// Parameters without a request body.
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            method,
            path,
            payload: None,
        }
    }
}

impl<'a, P: ?Sized> RequestParameters<'a, P> {
    /// Attach a JSON payload.
    pub fn with_payload<Q: ?Sized>(self, payload: &'a Q) -> RequestParameters<'a, Q> {
        RequestParameters {
            method: self.method,
            path: self.path,
            payload: Some(payload),
        }
    }
}

#[derive(Clone)]
/// Builder for [`ClickSendClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or transport.
pub struct ClickSendClientBuilder {
    credentials: Credentials,
    base_url: String,
    send_sms_path: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    authorization_style: AuthorizationStyle,
    strict_http_status: bool,
}

impl ClickSendClientBuilder {
    /// Create a builder with the default endpoint and a reqwest transport.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, api_key),
            base_url: DEFAULT_BASE_URL.to_owned(),
            send_sms_path: DEFAULT_SEND_SMS_PATH.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
            authorization_style: AuthorizationStyle::default(),
            strict_http_status: false,
        }
    }

    /// Override the API root (default `https://rest.clicksend.com/v3`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the path used by [`ClickSendClient::send_sms`] (default `email/batch`).
    pub fn send_sms_path(mut self, path: impl Into<String>) -> Self {
        self.send_sms_path = path.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of the default reqwest client.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn authorization_style(mut self, style: AuthorizationStyle) -> Self {
        self.authorization_style = style;
        self
    }

    /// Fail with [`ClickSendError::HttpStatus`] on non-2xx responses instead of decoding them.
    pub fn strict_http_status(mut self, strict: bool) -> Self {
        self.strict_http_status = strict;
        self
    }

    /// Build a [`ClickSendClient`].
    pub fn build(self) -> Result<ClickSendClient, ClickSendError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }

                let client = builder
                    .build()
                    .map_err(|err| ClickSendError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client)) as Arc<dyn HttpTransport>
            }
        };

        Ok(ClickSendClient {
            credentials: self.credentials,
            base_url: self.base_url,
            send_sms_path: self.send_sms_path,
            authorization_style: self.authorization_style,
            strict_http_status: self.strict_http_status,
            http,
        })
    }
}

#[derive(Clone)]
/// ClickSend REST client.
///
/// Every call performs exactly one HTTP round trip: no retries, no caching. The client
/// holds only immutable configuration and can be shared across tasks as long as the
/// transport can.
pub struct ClickSendClient {
    credentials: Credentials,
    base_url: String,
    send_sms_path: String,
    authorization_style: AuthorizationStyle,
    strict_http_status: bool,
    http: Arc<dyn HttpTransport>,
}

impl ClickSendClient {
    /// Create a client on the default base URL using `transport` for every request.
    pub fn new(
        transport: impl HttpTransport + 'static,
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, api_key),
            base_url: DEFAULT_BASE_URL.to_owned(),
            send_sms_path: DEFAULT_SEND_SMS_PATH.to_owned(),
            authorization_style: AuthorizationStyle::default(),
            strict_http_status: false,
            http: Arc::new(transport),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ClickSendClientBuilder {
        ClickSendClientBuilder::new(username, api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at another API root, e.g. a mock server.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send an SMS message as `POST {base_url}/email/batch` with a `{"to", "body"}` payload.
    ///
    /// The default path is kept as-is until the provider contract is confirmed. ClickSend's
    /// documented SMS endpoint is `sms/send` with a `{"messages": [...]}` body, so callers
    /// targeting it need both [`ClickSendClientBuilder::send_sms_path`] and a matching payload
    /// sent through [`ClickSendClient::dispatch`].
    ///
    /// A provider-side rejection is not an error: check [`SmsResponse::is_success`] or
    /// [`SmsResponse::response_code`].
    ///
    /// Errors:
    /// - [`ClickSendError::MessageNotSet`] when `sms` is `None` (no request is made),
    /// - any error from [`ClickSendClient::dispatch`].
    pub async fn send_sms(&self, sms: Option<&Sms>) -> Result<SmsResponse, ClickSendError> {
        let mut response = SmsResponse::default();
        self.send_sms_into(sms, &mut response).await?;
        Ok(response)
    }

    /// Like [`ClickSendClient::send_sms`], but decodes into a caller-owned response.
    ///
    /// Fields absent from the response body keep their current values.
    pub async fn send_sms_into(
        &self,
        sms: Option<&Sms>,
        dst: &mut SmsResponse,
    ) -> Result<(), ClickSendError> {
        let sms = sms.ok_or(ClickSendError::MessageNotSet)?;
        let params = RequestParameters::new("POST", &self.send_sms_path).with_payload(sms);
        self.dispatch(&params, dst).await
    }

    /// Perform one request against `{base_url}/{path}` and decode the JSON body into `dst`.
    ///
    /// `dst` is merged rather than replaced: fields missing from the body keep their
    /// values, and nothing is written when decoding fails. The merge starts from the
    /// `Serialize` output of `dst`, so a field that is skipped or renamed on serialization
    /// but not on deserialization is reset to its default unless the body sets it.
    ///
    /// The HTTP status is only checked when the client was built with
    /// `strict_http_status(true)`.
    pub async fn dispatch<P, T>(
        &self,
        params: &RequestParameters<'_, P>,
        dst: &mut T,
    ) -> Result<(), ClickSendError>
    where
        P: Serialize + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        let request = self.build_request(params)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending ClickSend request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ClickSendError::Transport)?;
        let status = response.status;
        let success = response.is_success();
        tracing::debug!(status, "received ClickSend response");

        let body = response.into_body().await.map_err(ClickSendError::Body)?;

        if !success {
            if self.strict_http_status {
                let body = String::from_utf8_lossy(&body);
                let body = if body.trim().is_empty() {
                    None
                } else {
                    Some(body.into_owned())
                };
                return Err(ClickSendError::HttpStatus { status, body });
            }
            tracing::warn!(status, "ClickSend returned a non-success HTTP status");
        }

        decode_json_into(&body, dst).map_err(ClickSendError::Decode)
    }

    fn build_request<P>(
        &self,
        params: &RequestParameters<'_, P>,
    ) -> Result<HttpRequest, ClickSendError>
    where
        P: Serialize + ?Sized,
    {
        let method = Method::from_bytes(params.method.as_bytes())
            .map_err(|err| ClickSendError::InvalidRequest(Box::new(err)))?;

        let url = format!("{}/{}", self.base_url, params.path);
        url::Url::parse(&url).map_err(|err| ClickSendError::InvalidRequest(Box::new(err)))?;

        let body = params
            .payload
            .map(encode_json_payload)
            .transpose()
            .map_err(ClickSendError::Encode)?;

        let mut authorization =
            HeaderValue::from_str(&self.credentials.authorization(self.authorization_style))
                .map_err(|err| ClickSendError::InvalidRequest(Box::new(err)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(AUTHORIZATION, authorization);

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}
