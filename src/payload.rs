use bytes::Bytes;

/// Body of an exchange as seen by the context builder.
///
/// Text and binary bodies are counted as raw bytes. JSON values are counted
/// by their compact serialization, except JSON strings which count their
/// raw UTF-8 bytes so that `"boom"` and `Payload::Text("boom")` agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Text(String),
    Binary(Bytes),
    Json(serde_json::Value),
}

impl Payload {
    /// Serialized byte length of the payload. Never fails; anything that
    /// cannot be serialized counts as zero bytes.
    pub fn byte_len(&self) -> u64 {
        let len = match self {
            Payload::Empty => 0,
            Payload::Text(text) => text.len(),
            Payload::Binary(bytes) => bytes.len(),
            Payload::Json(serde_json::Value::Null) => 0,
            Payload::Json(serde_json::Value::String(text)) => text.len(),
            Payload::Json(value) => serde_json::to_vec(value).map(|v| v.len()).unwrap_or(0),
        };
        len as u64
    }

    pub fn is_empty(&self) -> bool {
        self.byte_len() == 0
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Binary(Bytes::from(bytes))
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Binary(bytes)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
