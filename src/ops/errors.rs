//! Planning error types.

use thiserror::Error;

use crate::core::topology::Topology;
use crate::util::store::StoreError;

/// Error while planning a lifecycle operation or building a step command.
///
/// All of these fail the call immediately; the engine never retries and
/// never hands back a partial command.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A topology-mandatory configuration key is missing or empty.
    #[error("site node configuration not found")]
    MissingSiteNodeConfig,

    /// The step index lies outside the computed install step list.
    #[error("step number {step} is out of install range")]
    OutOfInstallRange { step: usize },

    /// The step index lies outside the computed update step list.
    #[error("step number {step} is out of update range")]
    OutOfUpdateRange { step: usize },

    /// The requested update topology differs from the installed one.
    #[error("update is only supported within the same installation topology")]
    TopologyMismatch {
        installed: Topology,
        requested: Topology,
    },

    /// The OS major version cannot host the requested topology.
    #[error("{topology} topology is not supported on OS major version {os_version}")]
    UnsupportedPlatform {
        topology: Topology,
        os_version: String,
    },

    /// The installed topology could not be detected while gating an update.
    #[error("failed to detect the installed topology")]
    Detection(#[source] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            PlanError::MissingSiteNodeConfig.to_string(),
            "site node configuration not found"
        );
        assert_eq!(
            PlanError::OutOfInstallRange { step: 42 }.to_string(),
            "step number 42 is out of install range"
        );
        assert_eq!(
            PlanError::OutOfUpdateRange { step: 7 }.to_string(),
            "step number 7 is out of update range"
        );
        assert_eq!(
            PlanError::TopologyMismatch {
                installed: Topology::Single,
                requested: Topology::Multi,
            }
            .to_string(),
            "update is only supported within the same installation topology"
        );
    }
}
