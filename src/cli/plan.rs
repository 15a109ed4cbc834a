use anyhow::Result;

use graph_driver::config::DriverConfig;
use graph_driver::sequence::complete_graph_sequence;

/// Print the request sequence for `nodes` nodes without sending anything.
pub fn plan(config: &DriverConfig, nodes: u64) -> Result<()> {
    let base = config.endpoint.base_url();
    for operation in complete_graph_sequence(nodes) {
        let body = serde_json::to_string(&operation.payload())?;
        println!("POST {base}{} {body}", operation.name());
    }
    Ok(())
}
