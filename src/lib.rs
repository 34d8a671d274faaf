//! Stevedore - a lifecycle orchestration engine for server artifacts.
//!
//! This crate plans and emits the ordered, executable steps needed to
//! install, update, back up, and restore a server artifact across two
//! deployment topologies: a single node and a multi-node cluster. It never
//! executes anything itself - callers own command execution and retry
//! policy.

pub mod artifact;
pub mod core;
pub mod ops;
pub mod util;

pub use artifact::{Artifact, ServerArtifact};
pub use core::{
    backup::BackupDescriptor, command::Command, config::Config, options::InstallOptions,
    topology::Topology,
};
pub use ops::errors::PlanError;
pub use util::store::{ConfigStore, StoreError};
pub use util::transport::{HttpTransport, Transport, TransportError};
