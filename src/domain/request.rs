use serde::Serialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::PhoneNumber;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Outgoing SMS message.
///
/// `to` and `body` are required by ClickSend. The remaining fields are optional and left out
/// of the JSON payload when unset.
pub struct Sms {
    /// Recipient phone number in E.164 format.
    pub to: String,
    /// Message text.
    pub body: String,
    /// Sender id (alpha tag or dedicated number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Free-form tag identifying the sending application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Unix timestamp (seconds) for a scheduled send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<i64>,
    /// Caller reference echoed back in the response and delivery reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_string: Option<String>,
}

impl Sms {
    pub const TO_FIELD: &'static str = "to";
    pub const BODY_FIELD: &'static str = "body";

    /// Create a message with only the required fields set. Values are sent as given.
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Create a message addressed to an already normalized phone number.
    pub fn to_phone(to: &PhoneNumber, body: impl Into<String>) -> Self {
        Self::new(to.e164(), body)
    }

    pub fn sender(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn schedule(mut self, unix_seconds: i64) -> Self {
        self.schedule = Some(unix_seconds);
        self
    }

    pub fn custom_string(mut self, custom_string: impl Into<String>) -> Self {
        self.custom_string = Some(custom_string.into());
        self
    }

    /// Check that `to` and `body` are non-empty after trimming.
    ///
    /// The client never calls this on its own; ClickSend reports missing fields through
    /// the response code.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.to.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::TO_FIELD,
            });
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::BODY_FIELD,
            });
        }
        Ok(())
    }
}
