//! Core data structures for Stevedore.
//!
//! This module contains the value types shared across the engine:
//! - Deployment topology
//! - Opaque executable commands
//! - Per-invocation install/update options
//! - Installed-configuration snapshots
//! - Backup descriptors and version translation

pub mod backup;
pub mod command;
pub mod config;
pub mod options;
pub mod topology;
pub mod version;

pub use backup::BackupDescriptor;
pub use command::Command;
pub use config::Config;
pub use options::InstallOptions;
pub use topology::Topology;
