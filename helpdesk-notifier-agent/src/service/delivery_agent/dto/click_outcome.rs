use crate::platform::WindowClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Existing window was navigated to the target and focused
    Focused { client: WindowClient, url: String },
    Opened { url: String },
}
