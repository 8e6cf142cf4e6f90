//! EC2 adapter for the `CloudInstances` port.
//!
//! `AwsCliInstances<R>` routes every call through the `aws` CLI via a
//! `CommandRunner`, scoped to a single instance id and region.

use std::process::Output;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{CloudInstances, CommandRunner};
use crate::domain::{AdapterError, BotConfig, InstanceState};
use crate::infra::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};

const AWS: &str = "aws";

/// Infrastructure adapter that drives one EC2 instance through the `aws` CLI.
///
/// Generic over `R: CommandRunner` so that tests can inject a stub runner
/// without spawning real processes.
pub struct AwsCliInstances<R: CommandRunner> {
    runner: R,
    instance_id: String,
    region: String,
}

impl<R: CommandRunner> AwsCliInstances<R> {
    pub fn new(runner: R, instance_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            runner,
            instance_id: instance_id.into(),
            region: region.into(),
        }
    }

    async fn ec2(&self, operation: &'static str) -> Result<Output, AdapterError> {
        let output = self
            .runner
            .run(
                AWS,
                &[
                    "ec2",
                    operation,
                    "--instance-ids",
                    self.instance_id.as_str(),
                    "--region",
                    self.region.as_str(),
                    "--output",
                    "json",
                ],
            )
            .await
            .map_err(|e| AdapterError::failed(operation, format!("{e:#}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AdapterError::failed(operation, stderr.trim()));
        }
        Ok(output)
    }
}

impl AwsCliInstances<TokioCommandRunner> {
    /// Convenience constructor for production use.
    ///
    /// The access key pair is handed to the CLI through its standard
    /// environment variables.
    #[must_use]
    pub fn from_config(config: &BotConfig) -> Self {
        let runner = TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT)
            .with_env("AWS_ACCESS_KEY_ID", &config.aws_access_key_id)
            .with_env("AWS_SECRET_ACCESS_KEY", &config.aws_access_key_secret)
            .with_env("AWS_PAGER", "");
        Self::new(runner, &config.aws_instance_id, &config.aws_region)
    }
}

#[async_trait]
impl<R: CommandRunner> CloudInstances for AwsCliInstances<R> {
    async fn state(&self) -> Result<InstanceState, AdapterError> {
        let output = self.ec2("describe-instances").await?;
        parse_instance_state(&output.stdout)
    }

    async fn start(&self) -> Result<(), AdapterError> {
        self.ec2("start-instances").await.map(drop)
    }

    async fn stop(&self) -> Result<(), AdapterError> {
        self.ec2("stop-instances").await.map(drop)
    }
}

// ── describe-instances response ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstances {
    reservations: Option<Vec<Reservation>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reservation {
    instances: Option<Vec<Instance>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Instance {
    state: Option<StateField>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StateField {
    name: Option<String>,
}

/// Extract `Reservations[0].Instances[0].State.Name`.
///
/// # Errors
///
/// Returns `AdapterError::InvalidData` if the JSON is malformed or any link
/// in the path is missing.
pub fn parse_instance_state(json: &[u8]) -> Result<InstanceState, AdapterError> {
    const WHAT: &str = "instance description";

    let described: DescribeInstances =
        serde_json::from_slice(json).map_err(|e| AdapterError::invalid(WHAT, e))?;

    described
        .reservations
        .and_then(|r| r.into_iter().next())
        .and_then(|r| r.instances)
        .and_then(|i| i.into_iter().next())
        .and_then(|i| i.state)
        .and_then(|s| s.name)
        .map(|name| InstanceState::from_api_name(&name))
        .ok_or_else(|| AdapterError::invalid(WHAT, "missing Reservations[0].Instances[0].State.Name"))
}
