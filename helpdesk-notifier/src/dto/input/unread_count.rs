use serde::Deserialize;

///
/// Unread counter, either a bare number or `{"count": n}`
///
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UnreadCount {
    Plain(usize),
    Object { count: usize },
}

impl UnreadCount {
    pub fn count(&self) -> usize {
        match self {
            Self::Plain(count) | Self::Object { count } => *count,
        }
    }
}
