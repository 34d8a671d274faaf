//! Artifact capability interface and the server artifact implementation.

pub mod server;

use std::path::Path;

use semver::Version;

use crate::core::backup::BackupDescriptor;
use crate::core::command::Command;
use crate::core::options::InstallOptions;
use crate::core::topology::Topology;
use crate::ops::errors::PlanError;

pub use server::ServerArtifact;

/// Everything a managed artifact can plan.
///
/// One implementation per product; topology and OS-version dispatch happen
/// inside via `match`, not via a subclass hierarchy. Commands returned here
/// are executed externally by the caller, one step at a time, in increasing
/// step order.
pub trait Artifact {
    /// Stable artifact name, used in backup paths and logs.
    fn name(&self) -> &str;

    /// Ordered step summaries for an install of the given topology.
    fn install_info(&self, topology: Topology) -> Result<Vec<String>, PlanError>;

    /// Build the command for one install step.
    fn install_command(
        &self,
        previous: Option<&Version>,
        target: &Path,
        opts: &InstallOptions,
    ) -> Result<Command, PlanError>;

    /// Ordered step summaries for an update, gated on topology consistency.
    fn update_info(&self, topology: Topology) -> Result<Vec<String>, PlanError>;

    /// Build the command for one update step.
    fn update_command(
        &self,
        target_version: &Version,
        target: &Path,
        opts: &InstallOptions,
    ) -> Result<Command, PlanError>;

    /// Build the backup command for the given descriptor.
    fn backup_command(&self, descriptor: &BackupDescriptor) -> Result<Command, PlanError>;

    /// Build the restore command for the given descriptor.
    fn restore_command(&self, descriptor: &BackupDescriptor) -> Result<Command, PlanError>;

    /// Version of the currently installed artifact, `None` when there is no
    /// installation or it cannot be reached.
    fn installed_version(&self) -> Option<Version>;
}
