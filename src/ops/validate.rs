//! Topology and configuration validation.

use std::collections::HashMap;

use crate::core::config::SITE_HOST_NAME;
use crate::core::topology::Topology;
use crate::ops::errors::PlanError;

/// Check that the supplied properties satisfy the requested topology.
///
/// Multi topology requires a non-empty site node host name before any
/// command can be built; Single topology has no mandatory keys. Pure - no
/// I/O, no side effects.
pub fn validate_properties(
    topology: Topology,
    properties: &HashMap<String, String>,
) -> Result<(), PlanError> {
    match topology {
        Topology::Single => Ok(()),
        Topology::Multi => {
            let site_host = properties.get(SITE_HOST_NAME).map(String::as_str);
            match site_host {
                Some(host) if !host.trim().is_empty() => Ok(()),
                _ => Err(PlanError::MissingSiteNodeConfig),
            }
        }
    }
}
