use std::sync::Arc;

use advisor_api::AdvisorClient;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use travel_advisor::config::Config;
use travel_advisor::controller::Controller;
use travel_advisor::facts::StaticFacts;
use travel_advisor::terminal;
use travel_advisor::ticker::FactTicker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting travel-advisor");

    let config = Config::from_env()?;
    info!(
        base_url = %config.api.base_url,
        timeout_ms = config.api.timeout.as_millis(),
        facts_enabled = config.facts_enabled,
        fact_interval_secs = config.fact_interval.as_secs(),
        "configuration loaded"
    );

    let backend = Arc::new(AdvisorClient::new(config.api.clone())?);

    let (facts_tx, facts_rx) = mpsc::unbounded_channel();
    let ticker = FactTicker::new(
        Arc::new(StaticFacts::builtin()),
        config.fact_interval,
        config.facts_enabled,
        facts_tx,
    );
    let (controller, completions) = Controller::new(backend, ticker);

    terminal::run(controller, completions, facts_rx).await?;
    info!("travel-advisor shut down");
    Ok(())
}
