//! CLI `run` command: replay the full add/connect/remove sequence.

use anyhow::{Context, Result};

use graph_driver::config::DriverConfig;
use graph_driver::sequence::{complete_graph_sequence, sequence_len};
use graph_driver::{Driver, FailurePolicy, GraphClient};

/// Drive the sequence for `nodes` nodes against the configured endpoint.
pub async fn run(config: &DriverConfig, nodes: u64, policy: FailurePolicy) -> Result<()> {
    let client = GraphClient::from_config(&config.endpoint)
        .context("failed to build graph API client")?;

    tracing::info!(
        endpoint = %client.base_url(),
        nodes,
        requests = ?sequence_len(nodes),
        policy = %policy,
        "starting run"
    );

    let driver = Driver::new(client, policy);
    let mut stdout = std::io::stdout();
    let summary = driver
        .run(complete_graph_sequence(nodes), &mut stdout)
        .await?;

    let summary_json = serde_json::to_string(&summary).context("failed to encode run summary")?;
    tracing::info!(summary = %summary_json, "run summary");

    Ok(())
}
