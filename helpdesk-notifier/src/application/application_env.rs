use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    /// e.g. `https://helpdesk.example.com/api/`
    pub api_base_url: String,
    pub api_token: String,
    pub request_timeout: Duration,

    pub poll_interval: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("HELPDESK_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("HELPDESK_NOTIFIER_LOG_FILENAME")?;
        let api_base_url = Self::env_var("HELPDESK_NOTIFIER_API_BASE_URL")?;
        let api_token = Self::env_var("HELPDESK_NOTIFIER_API_TOKEN")?;
        let request_timeout = Duration::from_secs(
            Self::env_var("HELPDESK_NOTIFIER_REQUEST_TIMEOUT")?.parse()?,
        );
        let poll_interval =
            Duration::from_secs(Self::env_var("HELPDESK_NOTIFIER_POLL_INTERVAL")?.parse()?);
        if poll_interval.is_zero() {
            return Err(anyhow!("HELPDESK_NOTIFIER_POLL_INTERVAL must be positive"));
        }

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            api_token,
            request_timeout,
            poll_interval,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
