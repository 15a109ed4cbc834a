mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use graph_driver::config::DriverConfig;
use graph_driver::{FailurePolicy, NodeId, Operation};

#[derive(Parser)]
#[command(name = "graph-driver", version, about = "Sequential request driver for the graph API")]
struct Cli {
    /// Config file (defaults to ~/.graph-driver/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add N nodes, connect every pair, remove half the nodes, then a chain of edges
    Run {
        /// Number of nodes (defaults to driver.nodes)
        #[arg(long)]
        nodes: Option<u64>,
        /// continue or abort on non-200 responses (defaults to driver.failure_policy)
        #[arg(long)]
        policy: Option<FailurePolicy>,
    },
    /// Print the request sequence without sending it
    Plan {
        /// Number of nodes (defaults to driver.nodes)
        #[arg(long)]
        nodes: Option<u64>,
    },
    #[command(flatten)]
    Call(CallCommand),
}

/// Commands that issue exactly one operation.
#[derive(Subcommand)]
enum CallCommand {
    /// Add a node
    AddNode { id: NodeId },
    /// Remove a node and its edges
    RemoveNode { id: NodeId },
    /// Add an edge between two nodes
    AddEdge { a: NodeId, b: NodeId },
    /// Remove an edge
    RemoveEdge { a: NodeId, b: NodeId },
    /// Check whether a node exists
    GetNode { id: NodeId },
    /// Check whether an edge exists
    GetEdge { a: NodeId, b: NodeId },
    /// List a node's neighbors
    GetNeighbors { id: NodeId },
    /// Hop distance between two nodes
    ShortestPath { a: NodeId, b: NodeId },
    /// Ask the server to checkpoint its log
    Checkpoint,
}

impl CallCommand {
    fn operation(&self) -> Operation {
        match *self {
            Self::AddNode { id } => Operation::AddNode(id),
            Self::RemoveNode { id } => Operation::RemoveNode(id),
            Self::AddEdge { a, b } => Operation::AddEdge(a, b),
            Self::RemoveEdge { a, b } => Operation::RemoveEdge(a, b),
            Self::GetNode { id } => Operation::GetNode(id),
            Self::GetEdge { a, b } => Operation::GetEdge(a, b),
            Self::GetNeighbors { id } => Operation::GetNeighbors(id),
            Self::ShortestPath { a, b } => Operation::ShortestPath(a, b),
            Self::Checkpoint => Operation::Checkpoint,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DriverConfig::load_from(path)?,
        None => DriverConfig::load()?,
    };

    // Log to stderr so stdout carries only the status/body report.
    let filter = EnvFilter::try_new(&config.driver.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run { nodes, policy } => {
            let nodes = nodes.unwrap_or(config.driver.nodes);
            let policy = policy.unwrap_or(config.driver.failure_policy);
            cli::run(&config, nodes, policy).await?;
        }
        Command::Plan { nodes } => {
            cli::plan(&config, nodes.unwrap_or(config.driver.nodes))?;
        }
        Command::Call(call) => {
            cli::call(&config, call.operation()).await?;
        }
    }

    Ok(())
}
