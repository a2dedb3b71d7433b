//! DTOs for the link creation endpoint.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body: `{"Url": "<long url>"}`.
///
/// The key is matched case-insensitively (`url`, `URL`, ...), with an exact
/// `Url` taking precedence. A `null` body, a missing key or a `null` value
/// all read as the empty URL. Any other non-object body, or a non-string
/// value, is rejected.
#[derive(Debug)]
pub struct CreateRequest {
    pub url: String,
}

impl<'de> Deserialize<'de> for CreateRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(fields) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
            return Ok(Self { url: String::new() });
        };

        let value = fields.get("Url").or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("url"))
                .map(|(_, value)| value)
        });

        match value {
            None | Some(Value::Null) => Ok(Self { url: String::new() }),
            Some(Value::String(url)) => Ok(Self { url: url.clone() }),
            Some(other) => Err(de::Error::custom(format!(
                "Url must be a string, got {}",
                other
            ))),
        }
    }
}

/// Response body: `{"Url": "<short code>"}`.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    #[serde(rename = "Url")]
    pub url: String,
}
