use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// Per-user notification preferences.
///
/// Fields missing in backend response are `false`.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub browser_notifications: bool,
    pub ticket_assigned: bool,
    pub ticket_updated: bool,
    pub ticket_commented: bool,
    pub ticket_attachment: bool,
}

impl NotificationSettings {
    ///
    /// Build settings from loosely typed value (e.g. form state).
    /// Every field is coerced with JavaScript truthiness,
    /// missing fields and non-object values give `false`.
    ///
    pub fn from_loose(value: &Value) -> Self {
        let field = |name: &str| value.get(name).map(is_truthy).unwrap_or(false);

        Self {
            email_notifications: field("email_notifications"),
            browser_notifications: field("browser_notifications"),
            ticket_assigned: field("ticket_assigned"),
            ticket_updated: field("ticket_updated"),
            ticket_commented: field("ticket_commented"),
            ticket_attachment: field("ticket_attachment"),
        }
    }

    pub fn with_browser_notifications(self, browser_notifications: bool) -> Self {
        Self {
            browser_notifications,
            ..self
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0 && !n.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
