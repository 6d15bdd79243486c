use crate::platform::DisplayNotification;

#[derive(Clone, Debug)]
pub enum AgentEvent {
    Install,
    Activate,
    /// Raw push data, `None` when the message carried no payload
    Push(Option<Vec<u8>>),
    NotificationClick(DisplayNotification),
}
