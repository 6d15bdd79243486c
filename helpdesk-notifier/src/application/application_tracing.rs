use super::ApplicationEnv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Filter directives, same syntax as `RUST_LOG`
const LOG_ENV: &str = "HELPDESK_NOTIFIER_LOG";

/// HTTP stack logs every connection at debug level
const QUIET_TARGETS: [&str; 3] = ["hyper_util=warn", "reqwest=warn", "h2=warn"];

pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let directives = std::env::var(LOG_ENV).ok();

    let console_filter = create_filter(LevelFilter::DEBUG, directives.as_deref())?;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_filter = create_filter(LevelFilter::INFO, directives.as_deref())?;
    let file_appender = tracing_appender::rolling::hourly(&env.log_directory, &env.log_filename);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::debug!(directives = ?directives, "tracing initialized");

    Ok(())
}

///
/// Build filter from `default_level` and optional user directives.
/// HTTP stack is quieted unless directives name it explicitly.
///
fn create_filter(
    default_level: LevelFilter,
    directives: Option<&str>,
) -> anyhow::Result<EnvFilter> {
    let directives = directives.unwrap_or_default();

    let mut filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse(directives)?;
    for quiet in QUIET_TARGETS {
        let target = quiet.split('=').next().unwrap_or_default();
        if !directives.contains(target) {
            filter = filter.add_directive(quiet.parse()?);
        }
    }

    Ok(filter)
}
