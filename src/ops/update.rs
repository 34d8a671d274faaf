//! Update planning, the topology gate, and update command synthesis.

use std::path::Path;

use semver::Version;

use crate::core::command::Command;
use crate::core::options::InstallOptions;
use crate::core::topology::Topology;
use crate::ops::errors::PlanError;
use crate::ops::install::{service_control, INSTALL_ROOT};
use crate::ops::validate::validate_properties;
use crate::util::store::ConfigStore;

/// Ordered step summaries for an update of the given topology.
pub fn update_steps(topology: Topology) -> Vec<String> {
    let mut steps = vec![
        "Unpack new artifact resources".to_string(),
        "Configure update manifests".to_string(),
    ];

    if topology == Topology::Multi {
        steps.push("Propagate update manifests to worker nodes".to_string());
    }

    steps.extend([
        "Apply pre-update patch".to_string(),
        "Trigger provisioning update run".to_string(),
        "Apply post-update patch".to_string(),
    ]);

    steps
}

/// The topology gate: reject updates whose requested topology differs from
/// the one currently installed.
///
/// Runs before step-range and configuration checks on every update entry
/// point. A store that cannot even say what is installed fails the gate -
/// updating an unknown installation is not a supported operation.
pub fn check_update_topology(
    requested: Topology,
    store: &dyn ConfigStore,
) -> Result<(), PlanError> {
    let installed = store
        .detect_installation_type()
        .map_err(PlanError::Detection)?;

    if installed != requested {
        tracing::warn!(%installed, %requested, "rejecting cross-topology update");
        return Err(PlanError::TopologyMismatch {
            installed,
            requested,
        });
    }

    Ok(())
}

/// Step summaries for an update, gated on topology consistency.
///
/// Exposed separately from [`update_steps`] so topology mismatches surface
/// even when the caller never asks for a concrete command.
pub fn update_info(
    topology: Topology,
    store: &dyn ConfigStore,
) -> Result<Vec<String>, PlanError> {
    check_update_topology(topology, store)?;
    Ok(update_steps(topology))
}

/// Build the command for one update step.
///
/// The gate runs first, independent of the step value; then step range,
/// configuration, and synthesis parameterized by `target_version`.
pub fn update_command(
    target_version: &Version,
    target: &Path,
    opts: &InstallOptions,
    store: &dyn ConfigStore,
) -> Result<Command, PlanError> {
    check_update_topology(opts.topology, store)?;

    let steps = update_steps(opts.topology);
    if opts.step >= steps.len() {
        return Err(PlanError::OutOfUpdateRange { step: opts.step });
    }

    validate_properties(opts.topology, &opts.properties)?;

    let command = synthesize(opts.topology, opts.step, &opts.os_version, target)
        .describe(steps[opts.step].clone())
        .env("STEVEDORE_TARGET_VERSION", target_version.to_string());

    tracing::debug!(
        topology = %opts.topology,
        step = opts.step,
        target_version = %target_version,
        "built update command"
    );

    Ok(command)
}

fn synthesize(topology: Topology, step: usize, os_version: &str, target: &Path) -> Command {
    // Multi updates insert the propagation step at index 2; later indices
    // shift by one relative to the Single list.
    let propagation_offset = match topology {
        Topology::Single => 0,
        Topology::Multi => 1,
    };

    match step {
        0 => Command::shell(format!(
            "sudo tar -xzf {target} -C {root}/updates",
            target = target.display(),
            root = INSTALL_ROOT
        )),
        1 => Command::shell(format!(
            "sudo cp -r {root}/updates/manifests /etc/puppet/manifests",
            root = INSTALL_ROOT
        )),
        2 if topology == Topology::Multi => Command::shell(format!(
            "{root}/bin/propagate-manifests --all-nodes",
            root = INSTALL_ROOT
        )),
        n if n == 2 + propagation_offset => Command::shell(format!(
            "sudo {root}/patches/before_update.sh",
            root = INSTALL_ROOT
        )),
        // Provisioning picks up the new manifests on restart.
        n if n == 3 + propagation_offset => service_control("restart", os_version),
        n if n == 4 + propagation_offset => Command::shell(format!(
            "sudo {root}/patches/after_update.sh",
            root = INSTALL_ROOT
        )),
        _ => unreachable!("step index validated against update_steps"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::config::{Config, SITE_HOST_NAME};
    use crate::util::store::StoreError;

    struct FixedStore(Topology);

    impl ConfigStore for FixedStore {
        fn detect_installation_type(&self) -> Result<Topology, StoreError> {
            Ok(self.0)
        }

        fn load_installed_config(&self) -> Result<Config, StoreError> {
            Ok(Config::default())
        }
    }

    struct EmptyStore;

    impl ConfigStore for EmptyStore {
        fn detect_installation_type(&self) -> Result<Topology, StoreError> {
            Err(StoreError::UnknownInstallation)
        }

        fn load_installed_config(&self) -> Result<Config, StoreError> {
            Err(StoreError::UnknownInstallation)
        }
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(update_steps(Topology::Single).len(), 5);
        assert_eq!(update_steps(Topology::Multi).len(), 6);
    }

    #[test]
    fn test_gate_passes_matching_topology() {
        assert!(check_update_topology(Topology::Single, &FixedStore(Topology::Single)).is_ok());
        assert!(check_update_topology(Topology::Multi, &FixedStore(Topology::Multi)).is_ok());
    }

    #[test]
    fn test_gate_rejects_mismatch() {
        let err =
            check_update_topology(Topology::Multi, &FixedStore(Topology::Single)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "update is only supported within the same installation topology"
        );
    }

    #[test]
    fn test_gate_fails_on_unknown_installation() {
        let err = check_update_topology(Topology::Single, &EmptyStore).unwrap_err();
        assert!(matches!(err, PlanError::Detection(_)));
    }

    #[test]
    fn test_update_info_runs_gate() {
        let err = update_info(Topology::Multi, &FixedStore(Topology::Single)).unwrap_err();
        assert!(matches!(err, PlanError::TopologyMismatch { .. }));

        let info = update_info(Topology::Single, &FixedStore(Topology::Single)).unwrap();
        assert!(info.len() > 1);
    }

    #[test]
    fn test_gate_runs_before_range_check() {
        let opts = InstallOptions::new(Topology::Multi).step(0);
        let err = update_command(
            &Version::new(1, 0, 0),
            &PathBuf::from("some path"),
            &opts,
            &FixedStore(Topology::Single),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::TopologyMismatch { .. }));
    }

    #[test]
    fn test_out_of_range_update_step() {
        let opts = InstallOptions::new(Topology::Single).step(usize::MAX);
        let err = update_command(
            &Version::new(1, 0, 0),
            &PathBuf::from("some path"),
            &opts,
            &FixedStore(Topology::Single),
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of update range"));
    }

    #[test]
    fn test_every_single_update_step_builds() {
        let store = FixedStore(Topology::Single);
        for step in 0..update_steps(Topology::Single).len() {
            let opts = InstallOptions::new(Topology::Single)
                .step(step)
                .property("some property", "some value");
            let command = update_command(
                &Version::new(4, 0, 0),
                &PathBuf::from("some path"),
                &opts,
                &store,
            )
            .unwrap();
            assert_eq!(
                command
                    .get_env()
                    .get("STEVEDORE_TARGET_VERSION")
                    .map(String::as_str),
                Some("4.0.0")
            );
        }
    }

    #[test]
    fn test_every_multi_update_step_builds() {
        let store = FixedStore(Topology::Multi);
        for step in 0..update_steps(Topology::Multi).len() {
            let opts = InstallOptions::new(Topology::Multi)
                .step(step)
                .property(SITE_HOST_NAME, "site.example.com");
            let command = update_command(
                &Version::new(4, 0, 0),
                &PathBuf::from("some path"),
                &opts,
                &store,
            )
            .unwrap();
            assert!(!command.display_command().is_empty());
        }
    }
}
