use serde::{Deserialize, Deserializer};

/// Money-like value returned by ClickSend as either JSON string or JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportMoney {
    String(String),
    Number(serde_json::Number),
}

impl TransportMoney {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn deserialize_money<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    TransportMoney::deserialize(deserializer).map(TransportMoney::into_string)
}
