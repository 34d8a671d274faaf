//! Version parsing and raw-version translation.
//!
//! The artifact's diagnostic endpoint historically reported internal
//! assembly versions rather than product versions. [`normalize_version`]
//! maps those legacy raw values through an explicit compatibility table;
//! anything else is accepted as-is when it parses as a version.

use semver::Version;

/// Legacy raw values reported by old installations, keyed to the product
/// version they actually correspond to. Grow this table only with mappings
/// confirmed against a real installation.
const COMPATIBILITY_TABLE: &[(&str, &str)] = &[("0.26.0", "3.1.0")];

/// Parse a version string, allowing for incomplete versions.
///
/// `3` and `3.1` are padded with zeros; anything semver rejects beyond that
/// is `None`.
pub fn parse_version_lenient(s: &str) -> Option<Version> {
    // Try exact parse first
    if let Ok(v) = s.parse() {
        return Some(v);
    }

    // Try adding missing components
    let parts: Vec<&str> = s.split('.').collect();
    match parts.len() {
        1 => {
            let major: u64 = parts[0].trim().parse().ok()?;
            Some(Version::new(major, 0, 0))
        }
        2 => {
            let major: u64 = parts[0].trim().parse().ok()?;
            let minor: u64 = parts[1].trim().parse().ok()?;
            Some(Version::new(major, minor, 0))
        }
        _ => None,
    }
}

/// Translate a raw reported version into the normalized product version.
pub fn normalize_version(raw: &str) -> Option<Version> {
    let mapped = COMPATIBILITY_TABLE
        .iter()
        .find(|(legacy, _)| *legacy == raw)
        .map(|(_, normalized)| *normalized)
        .unwrap_or(raw);

    parse_version_lenient(mapped)
}
