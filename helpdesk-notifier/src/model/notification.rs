use strum::{AsRefStr, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NotificationType {
    TicketCreated,
    TicketUpdated,
    TicketAssigned,
    TicketCommented,
    WikiCreated,
    WikiUpdated,
    WikiShared,
    Unknown,
}

impl NotificationType {
    ///
    /// Parse type reported by the backend.
    /// Unrecognized values become [NotificationType::Unknown]
    ///
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }

    pub fn target_prefix(&self) -> Option<&'static str> {
        match self {
            Self::TicketCreated
            | Self::TicketUpdated
            | Self::TicketAssigned
            | Self::TicketCommented => Some("/tickets"),
            Self::WikiCreated | Self::WikiUpdated | Self::WikiShared => Some("/wikis"),
            Self::Unknown => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_id: Option<i64>,
    pub created_at: OffsetDateTime,
    pub read_at: Option<OffsetDateTime>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Application path the notification links to
    pub fn target_path(&self) -> Option<String> {
        let prefix = self.notification_type.target_prefix()?;
        let related_id = self.related_id?;

        Some(format!("{prefix}/{related_id}"))
    }

    ///
    /// Mark notification as read at `now`.
    /// Already read notification keeps its first timestamp.
    ///
    pub fn mark_read(&mut self, now: OffsetDateTime) -> bool {
        if self.read_at.is_some() {
            return false;
        }
        self.read_at = Some(now);

        true
    }
}
