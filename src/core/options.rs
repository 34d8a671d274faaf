//! Per-invocation lifecycle options.

use std::collections::HashMap;

use crate::core::topology::Topology;

/// Options for a single install or update invocation.
///
/// Created fresh by the caller per call and never persisted by the engine.
/// The OS major version is threaded through here explicitly instead of being
/// probed from process-wide state, so concurrent callers can target
/// different hosts safely.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Requested deployment topology.
    pub topology: Topology,

    /// Zero-based step index into the planned step list.
    pub step: usize,

    /// Configuration properties supplied for this operation.
    pub properties: HashMap<String, String>,

    /// OS major version of the target host (e.g. "6", "7").
    pub os_version: String,
}

impl InstallOptions {
    /// Create options for the given topology with no properties, step 0,
    /// and the default supported OS major version.
    pub fn new(topology: Topology) -> Self {
        InstallOptions {
            topology,
            step: 0,
            properties: HashMap::new(),
            os_version: "7".to_string(),
        }
    }

    /// Set the step index.
    pub fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Set a configuration property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set the target OS major version.
    pub fn os_version(mut self, version: impl Into<String>) -> Self {
        self.os_version = version.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = InstallOptions::new(Topology::Multi)
            .step(3)
            .os_version("6")
            .property("site_host_name", "site.example.com");

        assert_eq!(opts.topology, Topology::Multi);
        assert_eq!(opts.step, 3);
        assert_eq!(opts.os_version, "6");
        assert_eq!(
            opts.properties.get("site_host_name").map(String::as_str),
            Some("site.example.com")
        );
    }
}
