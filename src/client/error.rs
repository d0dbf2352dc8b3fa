use crate::client::http::BoxError;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ClickSendClient`](crate::ClickSendClient).
///
/// Each variant carries the underlying cause unchanged. Provider-reported failures
/// (`response_code` other than `SUCCESS`) are not errors: they come back as a decoded
/// [`SmsResponse`](crate::SmsResponse).
pub enum ClickSendError {
    /// `send_sms` was called without a message.
    #[error("the sms object is not set")]
    MessageNotSet,

    /// Method or URL could not be turned into an HTTP request.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] BoxError),

    /// Payload could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc), as returned by the transport.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body could not be read.
    #[error("response body error: {0}")]
    Body(#[source] BoxError),

    /// Non-successful HTTP status code, only reported when the client was built with
    /// `strict_http_status(true)`.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not JSON or does not fit the destination type.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}
