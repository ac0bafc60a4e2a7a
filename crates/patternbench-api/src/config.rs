// Service configuration from the environment
//
// The original hard-coded its peer URLs; here they are environment variables
// with the original values as defaults.

use anyhow::Result;

use patternbench_core::Endpoints;

/// Environment-driven configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address (`PATTERNBENCH_BIND_ADDR`)
    pub bind_addr: String,
    /// Path of the benchmark endpoint (`PATTERNBENCH_SERVICE_PATH`)
    pub service_path: String,
    /// Base URL of this instance (`PATTERNBENCH_LOCAL_BASE`)
    pub local_base: String,
    /// Base URL of a second instance on this host (`PATTERNBENCH_PEER_BASE`)
    pub peer_base: String,
    /// Base URL of the remote instance (`PATTERNBENCH_REMOTE_BASE`)
    pub remote_base: String,
}

impl ServiceConfig {
    /// Read configuration from environment variables, falling back to the
    /// defaults the original service shipped with.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            bind_addr: var_or("PATTERNBENCH_BIND_ADDR", "0.0.0.0:8080"),
            service_path: var_or("PATTERNBENCH_SERVICE_PATH", "/bench"),
            local_base: var_or("PATTERNBENCH_LOCAL_BASE", "http://localhost:8080"),
            peer_base: var_or("PATTERNBENCH_PEER_BASE", "http://localhost:8081"),
            remote_base: var_or("PATTERNBENCH_REMOTE_BASE", "http://192.168.0.133:8080"),
        };
        config.validate()?;
        Ok(config)
    }

    // the router panics on paths without a leading slash; catch that here so
    // a bad PATTERNBENCH_SERVICE_PATH fails startup with a readable error
    fn validate(&self) -> Result<()> {
        if !self.service_path.starts_with('/') {
            anyhow::bail!(
                "PATTERNBENCH_SERVICE_PATH must start with '/', got {:?}",
                self.service_path
            );
        }
        Ok(())
    }

    /// The three fully formed microcall URLs the self-call workloads target
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            local: self.microcall_url(&self.local_base),
            peer: self.microcall_url(&self.peer_base),
            remote: self.microcall_url(&self.remote_base),
        }
    }

    fn microcall_url(&self, base: &str) -> String {
        format!(
            "{}{}?microcall=on",
            base.trim_end_matches('/'),
            self.service_path
        )
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
