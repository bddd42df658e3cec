//! AWS-backed implementation of the cloud capabilities.
//!
//! Credentials and region come from the SDK's standard chain (env vars,
//! shared config, attached role). Construction validates them with one
//! cheap STS call so a misconfigured process never starts serving.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use tracing::info;

use crate::{CloudError, IdentityCheck, ObjectStore, ParameterStore};

/// STS-backed identity check: one cheap `GetCallerIdentity` call.
pub struct StsIdentity {
    sts: aws_sdk_sts::Client,
}

impl StsIdentity {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            sts: aws_sdk_sts::Client::new(config),
        }
    }
}

#[async_trait]
impl IdentityCheck for StsIdentity {
    async fn check_identity(&self) -> Result<String, CloudError> {
        let out = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| CloudError::Credentials(e.to_string()))?;
        Ok(out.arn().unwrap_or("<unknown>").to_string())
    }
}

/// Bundle of ready-to-use AWS service clients.
///
/// Built once at startup and shared read-only across all in-flight request
/// handlers; the underlying SDK clients are concurrency-safe.
#[derive(Clone, Debug)]
pub struct AwsClients {
    s3: aws_sdk_s3::Client,
    ssm: aws_sdk_ssm::Client,
}

impl AwsClients {
    /// Resolve ambient configuration, validate credentials, build the clients.
    ///
    /// Any failure here is fatal to startup; there is no retry.
    pub async fn connect() -> Result<Self, CloudError> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::connect_with(&StsIdentity::new(&config), &config).await
    }

    /// Validate credentials through the given checker, then build the
    /// clients from the shared config. The checker seam lets tests inject
    /// failing credentials without contacting real infrastructure.
    pub async fn connect_with(
        checker: &dyn IdentityCheck,
        config: &SdkConfig,
    ) -> Result<Self, CloudError> {
        let arn = checker.check_identity().await?;
        info!(%arn, "aws credentials validated");
        Ok(Self::from_config(config))
    }

    /// Build the service clients from an already-validated shared config.
    pub fn from_config(config: &SdkConfig) -> Self {
        Self {
            s3: aws_sdk_s3::Client::new(config),
            ssm: aws_sdk_ssm::Client::new(config),
        }
    }
}

fn bucket_names(buckets: &[aws_sdk_s3::types::Bucket]) -> Vec<String> {
    buckets
        .iter()
        .filter_map(|b| b.name().map(str::to_string))
        .collect()
}

fn parameter_names(params: &[aws_sdk_ssm::types::ParameterMetadata]) -> Vec<String> {
    params
        .iter()
        .filter_map(|p| p.name().map(str::to_string))
        .collect()
}

#[async_trait]
impl ObjectStore for AwsClients {
    async fn list_buckets(&self) -> Result<Vec<String>, CloudError> {
        let out = self
            .s3
            .list_buckets()
            .send()
            .await
            .map_err(|e| CloudError::Storage(e.to_string()))?;
        Ok(bucket_names(out.buckets()))
    }
}

#[async_trait]
impl ParameterStore for AwsClients {
    async fn describe_parameters(&self) -> Result<Vec<String>, CloudError> {
        let out = self
            .ssm
            .describe_parameters()
            .send()
            .await
            .map_err(|e| CloudError::ParameterStore(e.to_string()))?;
        Ok(parameter_names(out.parameters()))
    }

    async fn get_parameter(&self, name: &str) -> Result<String, CloudError> {
        let out = self
            .ssm
            .get_parameter()
            .name(name)
            .send()
            .await
            .map_err(|e| CloudError::ParameterStore(e.to_string()))?;
        out.parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| CloudError::ParameterStore(format!("parameter '{name}' has no value")))
    }
}
