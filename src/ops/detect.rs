//! Installed-version detection.
//!
//! Detection is advisory: every failure along the way degrades to `None`
//! instead of surfacing, so an unreachable or half-installed artifact never
//! blocks other lifecycle operations.

use semver::Version;
use serde::Deserialize;

use crate::core::version::normalize_version;
use crate::util::store::ConfigStore;
use crate::util::transport::Transport;

/// Shape of the diagnostic endpoint's JSON response. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiInfo {
    implementation_version: Option<String>,
}

/// Detect the version of the currently installed artifact, if any.
pub fn detect_installed_version(
    store: &dyn ConfigStore,
    transport: &dyn Transport,
) -> Option<Version> {
    if let Err(err) = store.detect_installation_type() {
        tracing::debug!(error = %err, "no detectable installation");
        return None;
    }

    let config = match store.load_installed_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(error = %err, "installed configuration unreadable");
            return None;
        }
    };

    let host = config.host_url()?;
    let url = format!("http://{}/api/", host);

    let body = match transport.get(&url) {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %err, url, "diagnostic endpoint query failed");
            return None;
        }
    };

    if body.trim().is_empty() {
        return None;
    }

    let info: ApiInfo = match serde_json::from_str(&body) {
        Ok(info) => info,
        Err(err) => {
            tracing::debug!(error = %err, "diagnostic response was not valid JSON");
            return None;
        }
    };

    let raw = info.implementation_version?;
    normalize_version(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::config::{Config, HOST_URL};
    use crate::core::topology::Topology;
    use crate::util::store::StoreError;
    use crate::util::transport::TransportError;

    struct FakeStore {
        topology: Result<Topology, ()>,
        config: Result<Config, ()>,
    }

    impl ConfigStore for FakeStore {
        fn detect_installation_type(&self) -> Result<Topology, StoreError> {
            self.topology.map_err(|_| StoreError::UnknownInstallation)
        }

        fn load_installed_config(&self) -> Result<Config, StoreError> {
            self.config
                .clone()
                .map_err(|_| StoreError::Io(std::io::Error::other("read failed")))
        }
    }

    struct FakeTransport(Result<String, ()>);

    impl Transport for FakeTransport {
        fn get(&self, _url: &str) -> Result<String, TransportError> {
            self.0
                .clone()
                .map_err(|_| TransportError::from(anyhow::anyhow!("connection refused")))
        }
    }

    fn installed_store() -> FakeStore {
        FakeStore {
            topology: Ok(Topology::Single),
            config: Ok(Config::from([(HOST_URL, "hostname")])),
        }
    }

    #[test]
    fn test_none_when_installation_unknown() {
        let store = FakeStore {
            topology: Err(()),
            config: Err(()),
        };
        let transport = FakeTransport(Ok("{}".to_string()));
        assert_eq!(detect_installed_version(&store, &transport), None);
    }

    #[test]
    fn test_none_when_config_unreadable() {
        let store = FakeStore {
            topology: Ok(Topology::Single),
            config: Err(()),
        };
        let transport = FakeTransport(Ok("{}".to_string()));
        assert_eq!(detect_installed_version(&store, &transport), None);
    }

    #[test]
    fn test_none_when_query_fails() {
        let transport = FakeTransport(Err(()));
        assert_eq!(detect_installed_version(&installed_store(), &transport), None);
    }

    #[test]
    fn test_none_when_response_empty() {
        let transport = FakeTransport(Ok(String::new()));
        assert_eq!(detect_installed_version(&installed_store(), &transport), None);
    }

    #[test]
    fn test_reports_normalized_version_verbatim() {
        let transport = FakeTransport(Ok(r#"{"implementationVersion":"3.3.0"}"#.to_string()));
        assert_eq!(
            detect_installed_version(&installed_store(), &transport),
            Some(Version::new(3, 3, 0))
        );
    }

    #[test]
    fn test_translates_legacy_version() {
        let transport = FakeTransport(Ok(r#"{"implementationVersion":"0.26.0"}"#.to_string()));
        assert_eq!(
            detect_installed_version(&installed_store(), &transport),
            Some(Version::new(3, 1, 0))
        );
    }
}
