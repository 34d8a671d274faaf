//! Lifecycle operations: validation, planning, and command synthesis.

pub mod backup;
pub mod detect;
pub mod errors;
pub mod install;
pub mod update;
pub mod validate;

pub use backup::{backup_command, restore_command};
pub use detect::detect_installed_version;
pub use errors::PlanError;
pub use install::{install_command, install_steps};
pub use update::{check_update_topology, update_command, update_info, update_steps};
pub use validate::validate_properties;
