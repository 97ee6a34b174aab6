//! Option discovery over the results directory tree.
//!
//! The tree is laid out as `<root>/<date>/<variable>/kernels/<kernel>/<files>`.
//! Each selector in the UI is backed by the immediate subdirectory names at
//! one level of that tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Synthetic kernel key for the non-stationary model.
///
/// Its images live in `kernels/ns/` but it is never part of the kernel catalog.
pub const NS_KERNEL: &str = "ns";

/// Name of the directory holding the kernel subdirectories.
pub(crate) const KERNELS_DIR: &str = "kernels";

/// Directory names skipped during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// An ignore set that skips nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Build from an iterator of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Return a copy with one more name skipped.
    pub fn with(&self, name: &str) -> Self {
        let mut names = self.names.clone();
        names.insert(name.to_string());
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    /// Skips the simulated-field folder kept next to the dates.
    fn default() -> Self {
        Self::from_names(["arti"])
    }
}

/// List the sorted immediate subdirectory names of `dir`.
///
/// Names in `ignore`, hidden directories and names that are not valid UTF-8
/// are skipped. A missing or unreadable directory yields an empty list.
pub fn discover(dir: &Path, ignore: &IgnoreSet) -> Vec<String> {
    let mut names: Vec<String> = list_entries(dir, EntryKind::Directory)
        .into_iter()
        .filter(|name| !ignore.contains(name))
        .collect();
    names.sort();
    names
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
}

/// Immediate children of `dir` of the given kind, in directory order.
pub(crate) fn list_entries(dir: &Path, kind: EntryKind) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| match kind {
            EntryKind::Directory => entry.file_type().is_dir(),
            EntryKind::File => entry.file_type().is_file(),
        })
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.'))
        .collect()
}

/// Knows where each level of the results tree lives on disk.
#[derive(Debug, Clone)]
pub struct ResultsLayout {
    root: PathBuf,
}

impl ResultsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn date_dir(&self, date: &str) -> PathBuf {
        self.root.join(date)
    }

    pub fn variable_dir(&self, date: &str, variable: &str) -> PathBuf {
        self.date_dir(date).join(variable)
    }

    pub fn kernels_dir(&self, date: &str, variable: &str) -> PathBuf {
        self.variable_dir(date, variable).join(KERNELS_DIR)
    }

    pub fn kernel_dir(&self, date: &str, variable: &str, kernel: &str) -> PathBuf {
        self.kernels_dir(date, variable).join(kernel)
    }
}

/// Source of the selectable options for each level of the tree.
pub trait CatalogSource {
    /// Available dates.
    fn dates(&self) -> Vec<String>;

    /// Variables recorded for `date`.
    fn variables(&self, date: &str) -> Vec<String>;

    /// Stationary kernels fitted for `date` / `variable`. Never contains `ns`.
    fn kernels(&self, date: &str, variable: &str) -> Vec<String>;
}

/// Catalog read straight from the filesystem on every call.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    layout: ResultsLayout,
    ignore: IgnoreSet,
}

impl FsCatalog {
    pub fn new(layout: ResultsLayout, ignore: IgnoreSet) -> Self {
        Self { layout, ignore }
    }

    pub fn layout(&self) -> &ResultsLayout {
        &self.layout
    }
}

impl CatalogSource for FsCatalog {
    fn dates(&self) -> Vec<String> {
        discover(self.layout.root(), &self.ignore)
    }

    fn variables(&self, date: &str) -> Vec<String> {
        // An empty name would make the join point back at the parent level.
        if date.is_empty() {
            return Vec::new();
        }
        discover(&self.layout.date_dir(date), &self.ignore)
    }

    fn kernels(&self, date: &str, variable: &str) -> Vec<String> {
        if date.is_empty() || variable.is_empty() {
            return Vec::new();
        }
        discover(
            &self.layout.kernels_dir(date, variable),
            &self.ignore.with(NS_KERNEL),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignore_set_skips_arti() {
        let ignore = IgnoreSet::default();
        assert!(ignore.contains("arti"));
        assert!(!ignore.contains("dec6"));
    }

    #[test]
    fn test_with_returns_extended_copy() {
        let base = IgnoreSet::default();
        let extended = base.with(NS_KERNEL);
        assert!(extended.contains("ns"));
        assert!(extended.contains("arti"));
        assert!(!base.contains("ns"));
    }

    #[test]
    fn test_layout_paths() {
        let layout = ResultsLayout::new("/data/images");
        assert_eq!(
            layout.kernel_dir("dec6", "pH", "Matern_3_2"),
            PathBuf::from("/data/images/dec6/pH/kernels/Matern_3_2")
        );
        assert_eq!(
            layout.kernels_dir("dec6", "pH"),
            PathBuf::from("/data/images/dec6/pH/kernels")
        );
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let names = discover(Path::new("/definitely/not/here"), &IgnoreSet::empty());
        assert!(names.is_empty());
    }

    #[test]
    fn test_fs_catalog_empty_selection_does_not_climb() {
        let catalog = FsCatalog::new(ResultsLayout::new("/definitely/not/here"), IgnoreSet::default());
        assert!(catalog.variables("").is_empty());
        assert!(catalog.kernels("dec6", "").is_empty());
    }
}
