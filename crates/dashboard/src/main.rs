//! `meterops-report`: print the demand table, with forecast rows, from a running API.

use anyhow::bail;

use meterops_dashboard::{DemandTable, HttpGateway};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    meterops_observability::init_with_default("warn");

    let api_url = std::env::var("METEROPS_API_URL").unwrap_or_else(|_| {
        tracing::info!("METEROPS_API_URL not set, using default: {DEFAULT_API_URL}");
        DEFAULT_API_URL.to_string()
    });

    let mut table = DemandTable::new(HttpGateway::new(api_url.as_str()));
    if !table.refresh().await {
        let message = table
            .state()
            .notification()
            .map(|n| n.message.clone())
            .unwrap_or_default();
        bail!("could not load demands from {api_url}: {message}");
    }

    print!("{}", table.render());
    Ok(())
}
