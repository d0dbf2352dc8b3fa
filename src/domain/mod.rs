//! Domain layer: ClickSend message and response types (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::Sms;
pub use response::{Currency, SmsMessage, SmsResponse, SmsResponseData};
pub use validation::ValidationError;
pub use value::{PhoneNumber, ResponseCode};
