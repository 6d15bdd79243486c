use serde::Deserialize;
use serde_json::Value;

///
/// Push message sent by the backend.
/// Every field is optional, missing ones are filled with defaults.
///
#[derive(Debug, Default, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl PushPayload {
    ///
    /// Parse raw push data.
    ///
    /// Valid JSON that is not an object, or an object with mistyped fields,
    /// gives an empty payload.
    ///
    /// ### Returns
    /// `None` when data is absent or is not JSON
    ///
    pub fn parse(data: Option<&[u8]>) -> Option<Self> {
        let value = serde_json::from_slice::<Value>(data?).ok()?;
        if !value.is_object() {
            return Some(Self::default());
        }

        Some(serde_json::from_value(value).unwrap_or_default())
    }
}
