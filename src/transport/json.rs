use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Serialize a request payload into the bytes sent as the HTTP body.
pub fn encode_json_payload<P>(payload: &P) -> Result<Vec<u8>, serde_json::Error>
where
    P: Serialize + ?Sized,
{
    serde_json::to_vec(payload)
}

/// Decode `body` into an existing destination, keeping the fields the body does not mention.
///
/// Objects are merged key by key, `null` leaves the current value in place, and any other
/// JSON value (arrays included) replaces what was there. `dst` is only written once the
/// merged value has been decoded successfully.
///
/// The current state is taken from `dst`'s `Serialize` output, so fields hidden from
/// serialization are not preserved.
pub fn decode_json_into<T>(body: &[u8], dst: &mut T) -> Result<(), serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let incoming: Value = serde_json::from_slice(body)?;
    let mut merged = serde_json::to_value(&*dst)?;
    merge_value(&mut merged, incoming);
    *dst = serde_json::from_value(merged)?;
    Ok(())
}

fn merge_value(current: &mut Value, incoming: Value) {
    match (current, incoming) {
        (_, Value::Null) => {}
        (Value::Object(current), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match current.get_mut(&key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        current.insert(key, value);
                    }
                }
            }
        }
        (current, incoming) => *current = incoming,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Outer {
        name: String,
        count: i64,
        tags: Vec<String>,
        inner: Inner,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Inner {
        left: String,
        right: String,
    }

    fn sample() -> Outer {
        Outer {
            name: "preset".to_owned(),
            count: 7,
            tags: vec!["a".to_owned(), "b".to_owned()],
            inner: Inner {
                left: "l".to_owned(),
                right: "r".to_owned(),
            },
        }
    }

    #[test]
    fn encode_produces_json_that_decodes_to_equal_value() {
        let value = sample();
        let bytes = encode_json_payload(&value).unwrap();
        let decoded: Outer = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn encode_surfaces_serialization_errors() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], "non-string key");
        assert!(encode_json_payload(&map).is_err());
    }

    #[test]
    fn decode_overwrites_only_present_fields() {
        let mut dst = sample();
        decode_json_into(br#"{"count": 1, "inner": {"right": "R"}}"#, &mut dst).unwrap();

        assert_eq!(dst.name, "preset");
        assert_eq!(dst.count, 1);
        assert_eq!(dst.tags, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(dst.inner.left, "l");
        assert_eq!(dst.inner.right, "R");
    }

    #[test]
    fn decode_replaces_arrays_and_ignores_nulls() {
        let mut dst = sample();
        decode_json_into(br#"{"tags": ["z"], "name": null}"#, &mut dst).unwrap();

        assert_eq!(dst.tags, vec!["z".to_owned()]);
        assert_eq!(dst.name, "preset");
    }

    #[test]
    fn decode_failure_leaves_destination_untouched() {
        let mut dst = sample();

        assert!(decode_json_into(b"{ not json }", &mut dst).is_err());
        assert_eq!(dst, sample());

        assert!(decode_json_into(br#"{"count": "seven", "name": "x"}"#, &mut dst).is_err());
        assert_eq!(dst, sample());

        assert!(decode_json_into(br#"[1, 2, 3]"#, &mut dst).is_err());
        assert_eq!(dst, sample());
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct WithHidden {
        kept: String,
        #[serde(skip_serializing, default)]
        hidden: String,
    }

    #[test]
    fn decode_resets_fields_skipped_on_serialization() {
        let mut dst = WithHidden {
            kept: "k".to_owned(),
            hidden: "caller".to_owned(),
        };

        decode_json_into(br#"{"kept": "new"}"#, &mut dst).unwrap();
        assert_eq!(dst.kept, "new");
        assert_eq!(dst.hidden, "");

        decode_json_into(br#"{"hidden": "from body"}"#, &mut dst).unwrap();
        assert_eq!(dst.kept, "new");
        assert_eq!(dst.hidden, "from body");
    }

    #[test]
    fn decode_into_json_value_merges_maps() {
        let mut dst = json!({ "kept": true, "nested": { "a": 1 } });
        decode_json_into(br#"{"nested": {"b": 2}, "extra": "x"}"#, &mut dst).unwrap();
        assert_eq!(
            dst,
            json!({ "kept": true, "nested": { "a": 1, "b": 2 }, "extra": "x" })
        );
    }
}
