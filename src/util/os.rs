//! Target OS detection helpers.
//!
//! The engine never probes the OS on its own behalf; callers read the major
//! version once and thread it through
//! [`InstallOptions`](crate::InstallOptions).

use std::path::Path;

/// OS major versions the engine knows how to build commands for.
pub const SUPPORTED_OS_VERSIONS: &[&str] = &["6", "7"];

/// Read the OS major version of the local host from `/etc/os-release`.
pub fn os_major_version() -> Option<String> {
    os_major_version_from(Path::new("/etc/os-release"))
}

fn os_major_version_from(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    parse_os_release(&contents)
}

/// Extract the major component of `VERSION_ID` from os-release contents.
fn parse_os_release(contents: &str) -> Option<String> {
    let line = contents
        .lines()
        .find(|line| line.starts_with("VERSION_ID="))?;

    let value = line["VERSION_ID=".len()..].trim().trim_matches('"');
    let major = value.split('.').next()?.trim();

    if major.is_empty() {
        None
    } else {
        Some(major.to_string())
    }
}
