//! Backup and restore command synthesis.
//!
//! Backup and restore are not step-indexed: one descriptor yields one
//! command, uniformly for both topologies. Restore assumes the descriptor
//! points at an archive that actually exists; checking that is the caller's
//! job, since execution happens outside the engine anyway.

use crate::core::backup::BackupDescriptor;
use crate::core::command::Command;
use crate::core::topology::Topology;
use crate::ops::errors::PlanError;
use crate::ops::install::{INSTALL_ROOT, SERVICE_NAME};
use crate::util::store::ConfigStore;

/// Build the command that archives the artifact's data directories into the
/// descriptor's backup file.
pub fn backup_command(
    descriptor: &BackupDescriptor,
    store: &dyn ConfigStore,
) -> Result<Command, PlanError> {
    let topology = store
        .detect_installation_type()
        .map_err(PlanError::Detection)?;
    let backup_file = descriptor.resolve_backup_file();

    let script = format!(
        "sudo mkdir -p {parent} && sudo tar -C {root} -czf {file} data",
        parent = backup_file
            .parent()
            .unwrap_or_else(|| descriptor.get_backup_directory())
            .display(),
        root = INSTALL_ROOT,
        file = backup_file.display()
    );

    tracing::debug!(artifact = descriptor.artifact(), %topology, "built backup command");

    Ok(Command::shell(script)
        .describe(format!("Back up {} data", descriptor.artifact()))
        .env("STEVEDORE_TOPOLOGY", topology.as_str()))
}

/// Build the command that stops services, unpacks the backup archive over
/// the data directories, and starts services again.
pub fn restore_command(
    descriptor: &BackupDescriptor,
    store: &dyn ConfigStore,
) -> Result<Command, PlanError> {
    let topology = store
        .detect_installation_type()
        .map_err(PlanError::Detection)?;
    let backup_file = descriptor.resolve_backup_file();

    let stop_start = match topology {
        Topology::Single => (
            format!("sudo systemctl stop {}.service", SERVICE_NAME),
            format!("sudo systemctl start {}.service", SERVICE_NAME),
        ),
        Topology::Multi => (
            format!("{}/bin/cluster-services stop", INSTALL_ROOT),
            format!("{}/bin/cluster-services start", INSTALL_ROOT),
        ),
    };

    let script = format!(
        "{stop} && sudo tar -C {root} -xzf {file} && {start}",
        stop = stop_start.0,
        root = INSTALL_ROOT,
        file = backup_file.display(),
        start = stop_start.1
    );

    Ok(Command::shell(script)
        .describe(format!("Restore {} data", descriptor.artifact()))
        .env("STEVEDORE_TOPOLOGY", topology.as_str()))
}
