//! CLI single-operation commands such as `add-node`, `get-neighbors` and `checkpoint`.

use anyhow::{Context, Result};

use graph_driver::config::DriverConfig;
use graph_driver::response::{Distance, InGraph, Neighbors, Outcome};
use graph_driver::{GraphClient, Operation, Response};

/// Send one operation and print its status, body, and a decoded summary.
pub async fn call(config: &DriverConfig, operation: Operation) -> Result<()> {
    let client = GraphClient::from_config(&config.endpoint)
        .context("failed to build graph API client")?;

    let response = client
        .post(&operation)
        .await
        .with_context(|| format!("request {operation} failed"))?;

    println!("{}", response.status);
    if let Some(body) = &response.body {
        println!("{body}");
    }

    match response.outcome() {
        Outcome::Ok => {
            if let Some(line) = describe(&response)? {
                println!("{line}");
            }
        }
        outcome => tracing::warn!(
            operation = %operation,
            status = response.status,
            outcome = %outcome,
            "request not applied"
        ),
    }

    Ok(())
}

/// Human-readable summary of a successful read.
fn describe(response: &Response) -> Result<Option<String>> {
    let line = match response.operation {
        Operation::GetNode(id) => response
            .decode::<InGraph>()?
            .map(|r| format!("node {id} in graph: {}", r.in_graph)),
        Operation::GetEdge(a, b) => response
            .decode::<InGraph>()?
            .map(|r| format!("edge ({a}, {b}) in graph: {}", r.in_graph)),
        Operation::GetNeighbors(id) => response.decode::<Neighbors>()?.map(|r| {
            let ids: Vec<String> = r.neighbors.iter().map(u64::to_string).collect();
            format!("node {id} has {} neighbor(s): [{}]", ids.len(), ids.join(", "))
        }),
        Operation::ShortestPath(a, b) => response
            .decode::<Distance>()?
            .map(|r| format!("distance from {a} to {b}: {}", r.distance)),
        _ => None,
    };
    Ok(line)
}
