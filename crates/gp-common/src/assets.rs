//! Guard for files served from the results root.
//!
//! Serving itself is left to the HTTP layer; this only decides whether a
//! request path names a regular file that stays inside the root.

use std::path::{Component, Path, PathBuf};

/// Map a request path onto a regular file below `root`.
///
/// Returns `None` for absolute paths, `..` or prefix components, anything that
/// is not a regular file, and symlinks whose target leaves the root.
pub fn resolve_asset(root: &Path, rel: &str) -> Option<PathBuf> {
    let rel = rel.trim_start_matches('/');
    if rel.is_empty() {
        return None;
    }

    let rel_path = Path::new(rel);
    if !rel_path
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let candidate = root.join(rel_path);
    let metadata = std::fs::metadata(&candidate).ok()?;
    if !metadata.is_file() {
        return None;
    }

    let canonical_root = root.canonicalize().ok()?;
    let canonical = candidate.canonicalize().ok()?;
    if !canonical.starts_with(&canonical_root) {
        tracing::warn!(path = %rel, "Asset resolves outside the results root");
        return None;
    }

    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_parent_components_without_touching_disk() {
        let root = Path::new("/definitely/not/here");
        assert!(resolve_asset(root, "../secret.png").is_none());
        assert!(resolve_asset(root, "dec6/../../secret.png").is_none());
        assert!(resolve_asset(root, "").is_none());
        assert!(resolve_asset(root, "/").is_none());
    }
}
