use tradedesk::broker::BrokerClient;
use tradedesk::config::AppConfig;
use tradedesk::records::RecordsClient;
use tradedesk::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        poll_interval_secs = config.trades_poll_interval_secs,
        "Configuration loaded"
    );

    let http = reqwest::Client::new();
    let records = RecordsClient::new(http.clone(), &config);
    let broker = BrokerClient::new(http, config.broker_base_url.clone());

    ui::run(config, records, broker).await
}

/// Logs go to stderr; the alternate-screen UI owns stdout.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
