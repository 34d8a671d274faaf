//! Backup descriptors.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Describes one backup of an artifact: what to back up and where the
/// archive lives.
///
/// Unlike install and update, backup and restore are not step-indexed; one
/// descriptor yields one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupDescriptor {
    artifact: String,
    backup_file: Option<PathBuf>,
    backup_directory: PathBuf,
}

impl BackupDescriptor {
    /// Default directory backups land in when the caller has no preference.
    pub const DEFAULT_BACKUP_DIRECTORY: &'static str = "/var/backups";

    /// Create a descriptor for the named artifact using the default backup
    /// directory.
    pub fn new(artifact: impl Into<String>) -> Self {
        BackupDescriptor {
            artifact: artifact.into(),
            backup_file: None,
            backup_directory: PathBuf::from(Self::DEFAULT_BACKUP_DIRECTORY),
        }
    }

    /// Set an explicit backup archive path.
    pub fn backup_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.backup_file = Some(file.into());
        self
    }

    /// Set the directory backups are kept under.
    pub fn backup_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.backup_directory = dir.into();
        self
    }

    /// The artifact this descriptor refers to.
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// The backup archive path, generating one from the current time when
    /// the caller did not supply one.
    pub fn resolve_backup_file(&self) -> PathBuf {
        match &self.backup_file {
            Some(file) => file.clone(),
            None => self.generate_backup_file_at(Utc::now()),
        }
    }

    /// The directory backups are kept under.
    pub fn get_backup_directory(&self) -> &Path {
        &self.backup_directory
    }

    /// Generate the archive path for the given instant:
    /// `{backup_directory}/{artifact}/backup_{YYYYMMDD_HHMMSS}.tar.gz`.
    ///
    /// Deterministic for a fixed timestamp, so repeated backups within the
    /// same second overwrite rather than accumulate.
    pub fn generate_backup_file_at(&self, at: DateTime<Utc>) -> PathBuf {
        self.backup_directory.join(&self.artifact).join(format!(
            "backup_{}.tar.gz",
            at.format("%Y%m%d_%H%M%S")
        ))
    }
}
