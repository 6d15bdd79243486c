#[derive(Clone, Debug)]
pub struct DeliveryAgentConfig {
    pub default_title: String,
    pub default_icon: String,
    pub default_badge: String,
}

impl Default for DeliveryAgentConfig {
    fn default() -> Self {
        Self {
            default_title: "Destek Sistemi".to_string(),
            default_icon: "/logo192.png".to_string(),
            default_badge: "/favicon.ico".to_string(),
        }
    }
}
