//! ConfigStore trait - access to the installed configuration.

use thiserror::Error;

use crate::core::config::Config;
use crate::core::topology::Topology;

/// Failure while reading the installed configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No installation is known to this store.
    #[error("unknown installation type")]
    UnknownInstallation,

    /// The installed configuration exists but could not be read.
    #[error("failed to read installed configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only access to whatever is currently installed on the target.
///
/// Persistence format and location are the collaborator's business; the
/// engine only asks two questions of it.
pub trait ConfigStore {
    /// Detect the topology of the current installation.
    fn detect_installation_type(&self) -> Result<Topology, StoreError>;

    /// Load the installed artifact's configuration.
    fn load_installed_config(&self) -> Result<Config, StoreError>;
}
