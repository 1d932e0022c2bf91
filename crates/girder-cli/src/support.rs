//! Shared helpers for CLI commands.

use girder_metadata::ArchitecturesCapability;
use std::path::Path;

/// Load an architecture catalog from a TOML file, exiting on failure.
pub fn load_catalog(path: &str) -> ArchitecturesCapability {
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read catalog {}: {e}", Path::new(path).display());
        std::process::exit(1);
    });
    ArchitecturesCapability::from_toml_str(&raw).unwrap_or_else(|e| {
        eprintln!("error: failed to parse catalog {path}: {e}");
        std::process::exit(1);
    })
}

/// Split one `key=value` property argument.
pub fn parse_property(raw: &str) -> (String, String) {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => (key.to_string(), value.to_string()),
        _ => {
            eprintln!("error: invalid property '{raw}', expected key=value");
            std::process::exit(1);
        }
    }
}
