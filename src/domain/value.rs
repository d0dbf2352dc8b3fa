use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use phonenumber::country;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::request::Sms;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// ClickSend `response_code` value.
///
/// Codes unknown to this crate are preserved as [`ResponseCode::Other`] instead of
/// failing deserialization.
pub enum ResponseCode {
    Success,
    MissingCredentials,
    AccountNotActivated,
    InvalidRecipient,
    Throttled,
    InvalidSenderId,
    InsufficientCredit,
    InvalidCredentials,
    AlreadyExists,
    EmptyMessage,
    TooManyRecipients,
    MissingRequiredFields,
    InvalidSchedule,
    NotEnoughPermissionToListId,
    InternalError,
    InvalidLang,
    InvalidVoice,
    SubjectRequired,
    InvalidMediaFile,
    SomethingIsWrong,
    /// Any code not listed above, kept verbatim.
    Other(String),
}

impl ResponseCode {
    /// Wire representation as sent by ClickSend.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "SUCCESS",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::AccountNotActivated => "ACCOUNT_NOT_ACTIVATED",
            Self::InvalidRecipient => "INVALID_RECIPIENT",
            Self::Throttled => "THROTTLED",
            Self::InvalidSenderId => "INVALID_SENDER_ID",
            Self::InsufficientCredit => "INSUFFICIENT_CREDIT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::TooManyRecipients => "TOO_MANY_RECIPIENTS",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::InvalidSchedule => "INVALID_SCHEDULE",
            Self::NotEnoughPermissionToListId => "NOT_ENOUGH_PERMISSION_TO_LIST_ID",
            Self::InternalError => "INTERNAL_ERROR",
            Self::InvalidLang => "INVALID_LANG",
            Self::InvalidVoice => "INVALID_VOICE",
            Self::SubjectRequired => "SUBJECT_REQUIRED",
            Self::InvalidMediaFile => "INVALID_MEDIA_FILE",
            Self::SomethingIsWrong => "SOMETHING_IS_WRONG",
            Self::Other(code) => code,
        }
    }

    /// Whether this code is one of the documented values.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether ClickSend accepted the request.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether this code indicates missing or rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials | Self::InvalidCredentials | Self::AccountNotActivated
        )
    }

    /// Whether this code is likely transient and the request can be repeated later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttled | Self::InternalError)
    }
}

impl From<&str> for ResponseCode {
    fn from(value: &str) -> Self {
        match value {
            "SUCCESS" => Self::Success,
            "MISSING_CREDENTIALS" => Self::MissingCredentials,
            "ACCOUNT_NOT_ACTIVATED" => Self::AccountNotActivated,
            "INVALID_RECIPIENT" => Self::InvalidRecipient,
            "THROTTLED" => Self::Throttled,
            "INVALID_SENDER_ID" => Self::InvalidSenderId,
            "INSUFFICIENT_CREDIT" => Self::InsufficientCredit,
            "INVALID_CREDENTIALS" => Self::InvalidCredentials,
            "ALREADY_EXISTS" => Self::AlreadyExists,
            "EMPTY_MESSAGE" => Self::EmptyMessage,
            "TOO_MANY_RECIPIENTS" => Self::TooManyRecipients,
            "MISSING_REQUIRED_FIELDS" => Self::MissingRequiredFields,
            "INVALID_SCHEDULE" => Self::InvalidSchedule,
            "NOT_ENOUGH_PERMISSION_TO_LIST_ID" => Self::NotEnoughPermissionToListId,
            "INTERNAL_ERROR" => Self::InternalError,
            "INVALID_LANG" => Self::InvalidLang,
            "INVALID_VOICE" => Self::InvalidVoice,
            "SUBJECT_REQUIRED" => Self::SubjectRequired,
            "INVALID_MEDIA_FILE" => Self::InvalidMediaFile,
            "SOMETHING_IS_WRONG" => Self::SomethingIsWrong,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl FromStr for ResponseCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResponseCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Phone number normalized to E.164, the format ClickSend expects in `to`.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse `input` and format it as E.164.
    ///
    /// `default_region` applies to numbers written without a country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: &str,
    ) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: Sms::TO_FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, input).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: input.to_owned(),
            }
        })?;
        Ok(Self(
            phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        ))
    }

    pub fn e164(&self) -> &str {
        &self.0
    }
}
