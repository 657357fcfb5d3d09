/*
[INPUT]:  Signature bytes as hex strings or JSON byte arrays, signable values
[OUTPUT]: Vec<u8> on the way in, lowercase hex on the way out, canonical JSON bytes
[POS]:    Wallet layer - wire encoding of signature bytes
[UPDATE]: When a new signature encoding is accepted
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub fn serialize_hex<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

pub fn deserialize_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(raw) => {
            let raw = raw.trim();
            let raw = raw
                .strip_prefix("0x")
                .or_else(|| raw.strip_prefix("0X"))
                .unwrap_or(raw);
            hex::decode(raw).map_err(serde::de::Error::custom)
        }
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|byte| u8::try_from(byte).ok())
                    .ok_or_else(|| serde::de::Error::custom("byte array entries must be 0-255"))
            })
            .collect(),
        _ => Err(serde::de::Error::custom(
            "signature must be a hex string or an array of bytes",
        )),
    }
}

/// Compact JSON with object keys sorted at every depth
pub fn canonical_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let value = sort_keys(serde_json::to_value(value)?);
    serde_json::to_vec(&value)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::deserialize_bytes")]
        bytes: Vec<u8>,
    }

    fn decode(json: &str) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|holder| holder.bytes)
    }

    #[test]
    fn test_hex_with_and_without_prefix() {
        assert_eq!(decode(r#"{"bytes": "0xdeadbeef"}"#).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode(r#"{"bytes": "00ff"}"#).unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_byte_array() {
        assert_eq!(decode(r#"{"bytes": [1, 2, 255]}"#).unwrap(), vec![1, 2, 255]);
        assert!(decode(r#"{"bytes": [256]}"#).is_err());
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(decode(r#"{"bytes": 5}"#).is_err());
        assert!(decode(r#"{"bytes": "xyz"}"#).is_err());
    }

    #[test]
    fn test_canonical_json_sorts_every_level() {
        let value = json!({"z": [{"b": 1, "a": 2}], "m": {"y": true, "x": null}});
        let bytes = super::canonical_json(&value).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"m":{"x":null,"y":true},"z":[{"a":2,"b":1}]}"#
        );
    }
}
