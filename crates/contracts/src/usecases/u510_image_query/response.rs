use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Message shown when a failed response carries no usable `message`
pub const DEFAULT_SERVER_ERROR: &str = "Error processing your request";

/// Opaque identifier of a photo in the collection.
///
/// The server may send IDs as JSON strings or numbers; both are kept as
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ImageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ImageId(s),
            Raw::Number(n) => ImageId(n.to_string()),
        })
    }
}

/// Successful answer of the upload endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Object categories found in the image, most distinctive first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detected_classes: Vec<String>,

    /// Similar photos, most similar first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_ids: Vec<ImageId>,
}

impl AnalysisResult {
    pub fn class_count(&self) -> usize {
        self.detected_classes.len()
    }

    pub fn similar_count(&self) -> usize {
        self.image_ids.len()
    }

    pub fn has_classes(&self) -> bool {
        !self.detected_classes.is_empty()
    }

    pub fn has_similar_images(&self) -> bool {
        !self.image_ids.is_empty()
    }
}

/// Body of a non-2xx answer.
///
/// `message` is kept as raw JSON: servers send strings, but numbers and
/// other values still have to reach the user as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Reads `message` from any JSON document; non-objects carry none.
    pub fn from_json(value: &Value) -> Self {
        Self {
            message: value.get("message").cloned(),
        }
    }

    /// Falsy messages (missing, `null`, `""`, `0`, `false`) fall back to
    /// [`DEFAULT_SERVER_ERROR`]; anything else is shown as is.
    pub fn message_or_default(&self) -> String {
        match &self.message {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(v @ (Value::Array(_) | Value::Object(_))) => v.to_string(),
            _ => DEFAULT_SERVER_ERROR.to_string(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
