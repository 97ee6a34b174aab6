//! Temporary results trees laid out like the real results directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Bytes written for fake PNG files. Only the signature, content is never decoded.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// A results tree in a temporary directory, removed on drop.
///
/// Panics on I/O failure; it only runs inside tests.
pub struct ResultsTree {
    dir: TempDir,
}

impl ResultsTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp results root"),
        }
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and parents) relative to the root.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Kernel directory `<date>/<var>/kernels/<kernel>` containing `files`.
    pub fn kernel_with_files(&self, date: &str, var: &str, kernel: &str, files: &[&str]) -> PathBuf {
        let dir = self.dir(&format!("{}/{}/kernels/{}", date, var, kernel));
        for name in files {
            fs::write(dir.join(name), PNG_BYTES).expect("write kernel image");
        }
        dir
    }

    /// Stationary kernel with the usual `mean_` / `std_` pair.
    pub fn stationary_kernel(&self, date: &str, var: &str, kernel: &str) -> PathBuf {
        let stem = format!("{}_{}_{}", date, var, kernel);
        self.kernel_with_files(
            date,
            var,
            kernel,
            &[&format!("mean_{}.png", stem), &format!("std_{}.png", stem)],
        )
    }

    /// Non-stationary kernel with the `_mean.png` / `_uncert.png` pair.
    pub fn ns_kernel(&self, date: &str, var: &str) -> PathBuf {
        let stem = format!("{}_{}", date, var);
        self.kernel_with_files(
            date,
            var,
            "ns",
            &[&format!("{}_mean.png", stem), &format!("{}_uncert.png", stem)],
        )
    }
}

impl Default for ResultsTree {
    fn default() -> Self {
        Self::new()
    }
}
