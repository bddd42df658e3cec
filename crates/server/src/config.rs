use anyhow::{anyhow, Result};

/// Process configuration, immutable after load.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Version string surfaced verbatim in every response envelope.
    pub version: String,
}

impl ServiceConfig {
    /// Read the required `VERSION` variable from the process environment.
    ///
    /// Missing configuration is a startup failure; the caller must exit
    /// before any network activity.
    pub fn load() -> Result<Self> {
        Self::from_env_var("VERSION")
    }

    fn from_env_var(key: &str) -> Result<Self> {
        let version = std::env::var(key)
            .map_err(|_| anyhow!("required environment variable {key} is not set"))?;
        Ok(Self { version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they stay independent under
    // the parallel test runner.

    #[test]
    fn load_reads_version_from_env() {
        std::env::set_var("CLOUDVIEW_TEST_VERSION", "1.2.3");
        let cfg = ServiceConfig::from_env_var("CLOUDVIEW_TEST_VERSION").unwrap();
        assert_eq!(cfg.version, "1.2.3");
    }

    #[test]
    fn load_fails_when_variable_missing() {
        let err = ServiceConfig::from_env_var("CLOUDVIEW_TEST_UNSET").unwrap_err();
        assert!(err.to_string().contains("CLOUDVIEW_TEST_UNSET"));
    }
}
