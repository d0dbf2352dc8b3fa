use serde::{Deserialize, Serialize};

use crate::domain::value::ResponseCode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Response body of the SMS send call.
///
/// The HTTP status is not checked by default, so callers should look at
/// [`SmsResponse::response_code`] (or [`SmsResponse::is_success`]) to detect rejected
/// requests.
pub struct SmsResponse {
    pub http_code: i64,
    pub response_code: Option<ResponseCode>,
    pub response_msg: String,
    pub data: SmsResponseData,
}

impl SmsResponse {
    /// `true` when ClickSend reported `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.response_code
            .as_ref()
            .is_some_and(ResponseCode::is_success)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsResponseData {
    pub total_price: f64,
    pub total_count: i64,
    pub queued_count: i64,
    pub messages: Vec<SmsMessage>,
    #[serde(rename = "_currency")]
    pub currency: Currency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Delivery record for a single queued message.
pub struct SmsMessage {
    pub direction: String,
    pub date: i64,
    pub to: String,
    pub body: String,
    pub from: String,
    pub message_id: String,
    pub message_parts: i64,
    /// Price as reported by ClickSend; numbers are converted to their decimal text.
    #[serde(deserialize_with = "crate::transport::deserialize_money")]
    pub message_price: String,
    pub from_email: serde_json::Value,
    pub list_id: serde_json::Value,
    pub custom_string: String,
    pub contact_id: serde_json::Value,
    pub user_id: i64,
    pub subaccount_id: i64,
    pub country: String,
    pub carrier: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub currency_name_short: String,
    pub currency_prefix_d: String,
    pub currency_prefix_c: String,
    pub currency_name_long: String,
}
