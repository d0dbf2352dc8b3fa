//! Transport layer: wire-format details (serialization/deserialization).

mod json;
mod money;

pub use json::{decode_json_into, encode_json_payload};
pub use money::deserialize_money;
