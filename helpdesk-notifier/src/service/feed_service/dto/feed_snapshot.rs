use crate::model::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedSnapshot {
    /// Newest first
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl FeedSnapshot {
    pub fn new(notifications: Vec<Notification>) -> Self {
        let mut snapshot = Self {
            notifications,
            unread_count: 0,
        };
        snapshot.recount();

        snapshot
    }

    pub fn recount(&mut self) {
        self.unread_count = self
            .notifications
            .iter()
            .filter(|notification| !notification.is_read())
            .count();
    }
}
