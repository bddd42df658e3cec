use async_trait::async_trait;
use thiserror::Error;

pub mod aws;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("credential validation failed: {0}")]
    Credentials(String),
    #[error("storage request failed: {0}")]
    Storage(String),
    #[error("parameter store request failed: {0}")]
    ParameterStore(String),
}

/// Startup-time credential validation capability.
#[async_trait]
pub trait IdentityCheck: Send + Sync {
    /// Verify that ambient credentials resolve to a usable identity,
    /// returning the caller's ARN.
    async fn check_identity(&self) -> Result<String, CloudError>;
}

/// Read-only capability over the object-storage service.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List all bucket names, preserving the order returned by the remote API.
    async fn list_buckets(&self) -> Result<Vec<String>, CloudError>;
}

/// Read-only capability over the parameter-store service.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// List all parameter names, preserving the order returned by the remote API.
    async fn describe_parameters(&self) -> Result<Vec<String>, CloudError>;

    /// Fetch the value of a single named parameter.
    async fn get_parameter(&self, name: &str) -> Result<String, CloudError>;
}
