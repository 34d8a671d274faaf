//! Installed-configuration view.

use std::collections::HashMap;

/// Property key for the host the artifact's API is served from.
pub const HOST_URL: &str = "host_url";

/// Property key for the cluster site node host name (Multi topology only).
pub const SITE_HOST_NAME: &str = "site_host_name";

/// A read-only snapshot of the installed artifact's configuration.
///
/// Loaded by a [`ConfigStore`](crate::ConfigStore) collaborator; the engine
/// never writes configuration back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    properties: HashMap<String, String>,
}

impl Config {
    /// Create a config from a property map.
    pub fn new(properties: HashMap<String, String>) -> Self {
        Config { properties }
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The host the diagnostic endpoint lives on, if configured.
    pub fn host_url(&self) -> Option<&str> {
        self.get(HOST_URL)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Config {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Config::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
