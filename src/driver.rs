//! Sequential request driver.
//!
//! [`Driver::run`] sends operations one at a time, waiting for each response before
//! issuing the next. For every response it writes the status code, then the body
//! when the status is 200. Transport errors end the run; how non-200 statuses are
//! handled is decided by the [`FailurePolicy`].

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::client::GraphApi;
use crate::error::DriverError;
use crate::operation::Operation;
use crate::response::Response;

/// What to do when the server answers with anything other than 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the status and move on to the next operation.
    #[default]
    Continue,
    /// Stop the run with [`DriverError::Rejected`].
    Abort,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Abort => "abort",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(Self::Continue),
            "abort" => Ok(Self::Abort),
            _ => Err(format!("unknown failure policy: {s} (expected continue or abort)")),
        }
    }
}

/// Tally of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Requests that got a response.
    pub requests: usize,
    /// Requests answered with 200.
    pub succeeded: usize,
    /// Graph-changing requests answered with 200.
    pub mutations: usize,
    /// Non-200 responses, keyed by status code.
    pub rejected: BTreeMap<u16, usize>,
}

impl RunSummary {
    fn record(&mut self, response: &Response) {
        self.requests += 1;
        if response.is_success() {
            self.succeeded += 1;
            if response.operation.is_mutation() {
                self.mutations += 1;
            }
        } else {
            *self.rejected.entry(response.status).or_default() += 1;
        }
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

pub struct Driver<A> {
    api: A,
    policy: FailurePolicy,
}

impl<A: GraphApi> Driver<A> {
    pub fn new(api: A, policy: FailurePolicy) -> Self {
        Self { api, policy }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Send `operations` in order, writing each status (and 200 body) to `out`.
    pub async fn run<I, W>(&self, operations: I, out: &mut W) -> Result<RunSummary, DriverError>
    where
        I: IntoIterator<Item = Operation>,
        W: Write,
    {
        let mut summary = RunSummary::default();

        for operation in operations {
            let response = self
                .api
                .send(&operation)
                .await
                .map_err(|source| DriverError::Transport {
                    operation: operation.to_string(),
                    source,
                })?;

            writeln!(out, "{}", response.status)?;
            if let Some(body) = &response.body {
                writeln!(out, "{body}")?;
            }
            summary.record(&response);

            if !response.is_success() {
                tracing::warn!(
                    operation = %operation,
                    status = response.status,
                    outcome = %response.outcome(),
                    policy = %self.policy,
                    "request not applied"
                );
                if self.policy == FailurePolicy::Abort {
                    return Err(DriverError::Rejected {
                        operation: operation.to_string(),
                        status: response.status,
                    });
                }
            }
        }

        tracing::info!(
            requests = summary.requests,
            succeeded = summary.succeeded,
            mutations = summary.mutations,
            rejected = summary.rejected_total(),
            "run complete"
        );
        Ok(summary)
    }
}
