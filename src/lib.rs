//! Typed Rust client for the ClickSend SMS REST API.
//!
//! The crate has three layers: a domain layer of message/response types, a transport layer
//! for wire-format quirks, and a small client layer that builds authenticated requests and
//! runs them through a pluggable [`HttpTransport`].
//!
//! ```rust,no_run
//! use clicksend::{ClickSendClient, Sms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), clicksend::ClickSendError> {
//!     let client = ClickSendClient::builder("username", "api-key").build()?;
//!     let sms = Sms::new("+61411111111", "hello");
//!     let resp = client.send_sms(Some(&sms)).await?;
//!     if !resp.is_success() {
//!         eprintln!("rejected: {:?} {}", resp.response_code, resp.response_msg);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AuthorizationStyle, BoxError, BoxFuture, ClickSendClient, ClickSendClientBuilder,
    ClickSendError, Credentials, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    RequestParameters,
};
pub use domain::{
    Currency, PhoneNumber, ResponseCode, Sms, SmsMessage, SmsResponse, SmsResponseData,
    ValidationError,
};
