//! Path utilities for the Zellij sandbox.
//!
//! Inside a Zellij plugin the host filesystem is mounted under `/host`
//! (pointing at the cwd of the last focused terminal, typically the user's
//! home directory). Configured paths use `~` for the host home and are
//! rewritten here before any file access.

use std::path::PathBuf;

/// Data directory for trace output.
///
/// Resolves to `/host/.local/share/zellij/glyphgrid` inside the sandbox,
/// which usually maps to `~/.local/share/zellij/glyphgrid` on the host.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("glyphgrid")
}

/// Rewrites a tilde-prefixed path to its `/host` sandbox equivalent.
///
/// Absolute and relative paths without a tilde pass through unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_paths_map_into_the_sandbox() {
        assert_eq!(expand_tilde("~/icons.json"), "/host/icons.json");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/icons.json"), "/etc/icons.json");
        assert_eq!(expand_tilde("relative.json"), "relative.json");
    }
}
