use anyhow::{Context, Result};
use handler_chain::UnhandledPolicy;
use std::env;

/// Settings shared by the demos.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// LOG_FILE; when unset, logs go to stdout only
    log_file: Option<String>,
    /// UNHANDLED_POLICY (drop | error), default drop
    unhandled_policy: UnhandledPolicy,
}

impl DemoConfig {
    /// Load from environment variables. `policy` overrides UNHANDLED_POLICY if provided.
    pub fn load(policy: Option<UnhandledPolicy>) -> Result<Self> {
        let log_file = env::var("LOG_FILE").ok();
        let unhandled_policy = match policy {
            Some(policy) => policy,
            None => match env::var("UNHANDLED_POLICY") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("Parse UNHANDLED_POLICY={}", raw))?,
                Err(_) => UnhandledPolicy::default(),
            },
        };

        Ok(Self {
            log_file,
            unhandled_policy,
        })
    }

    /// Validate config (LOG_FILE, if set, must not be blank).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.log_file {
            if path.trim().is_empty() {
                anyhow::bail!("LOG_FILE is set but empty");
            }
        }
        Ok(())
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    pub fn unhandled_policy(&self) -> UnhandledPolicy {
        self.unhandled_policy
    }
}
