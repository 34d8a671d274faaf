//! The production server artifact.

use std::path::Path;

use semver::Version;

use crate::artifact::Artifact;
use crate::core::backup::BackupDescriptor;
use crate::core::command::Command;
use crate::core::options::InstallOptions;
use crate::core::topology::Topology;
use crate::ops;
use crate::ops::errors::PlanError;
use crate::util::store::ConfigStore;
use crate::util::transport::Transport;

/// The server artifact managed by this engine.
///
/// Collaborators are injected at construction so tests can substitute
/// deterministic fakes; the engine itself keeps no mutable state between
/// calls.
pub struct ServerArtifact<S, T> {
    store: S,
    transport: T,
}

impl<S, T> ServerArtifact<S, T> {
    /// Canonical artifact name.
    pub const NAME: &'static str = "shipyard";

    /// Create the artifact with its collaborators.
    pub fn new(store: S, transport: T) -> Self {
        ServerArtifact { store, transport }
    }
}

impl<S: ConfigStore, T: Transport> Artifact for ServerArtifact<S, T> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn install_info(&self, topology: Topology) -> Result<Vec<String>, PlanError> {
        Ok(ops::install_steps(topology))
    }

    fn install_command(
        &self,
        previous: Option<&Version>,
        target: &Path,
        opts: &InstallOptions,
    ) -> Result<Command, PlanError> {
        ops::install_command(previous, target, opts)
    }

    fn update_info(&self, topology: Topology) -> Result<Vec<String>, PlanError> {
        ops::update_info(topology, &self.store)
    }

    fn update_command(
        &self,
        target_version: &Version,
        target: &Path,
        opts: &InstallOptions,
    ) -> Result<Command, PlanError> {
        ops::update_command(target_version, target, opts, &self.store)
    }

    fn backup_command(&self, descriptor: &BackupDescriptor) -> Result<Command, PlanError> {
        ops::backup_command(descriptor, &self.store)
    }

    fn restore_command(&self, descriptor: &BackupDescriptor) -> Result<Command, PlanError> {
        ops::restore_command(descriptor, &self.store)
    }

    fn installed_version(&self) -> Option<Version> {
        ops::detect_installed_version(&self.store, &self.transport)
    }
}
