//! Mean / uncertainty image lookup for each kernel directory.

use std::collections::BTreeMap;

use crate::catalog::{list_entries, EntryKind, ResultsLayout, KERNELS_DIR, NS_KERNEL};
use crate::urls::url_path;

/// Which of the two plots a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Mean,
    Uncertainty,
}

impl ImageSlot {
    /// Classify a file name using the convention for `kernel`.
    ///
    /// Stationary kernels use `mean_*` / `std_*` prefixes; the non-stationary
    /// kernel uses `*_mean.png` / `*_uncert.png` suffixes.
    pub fn classify(kernel: &str, file_name: &str) -> Option<Self> {
        if kernel == NS_KERNEL {
            if file_name.ends_with("_mean.png") {
                Some(ImageSlot::Mean)
            } else if file_name.ends_with("_uncert.png") {
                Some(ImageSlot::Uncertainty)
            } else {
                None
            }
        } else if file_name.starts_with("mean_") {
            Some(ImageSlot::Mean)
        } else if file_name.starts_with("std_") {
            Some(ImageSlot::Uncertainty)
        } else {
            None
        }
    }
}

/// URLs of the two plots for one kernel. `None` means no matching file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePair {
    pub mean: Option<String>,
    pub uncertainty: Option<String>,
}

impl ImagePair {
    fn slot_mut(&mut self, slot: ImageSlot) -> &mut Option<String> {
        match slot {
            ImageSlot::Mean => &mut self.mean,
            ImageSlot::Uncertainty => &mut self.uncertainty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_none() && self.uncertainty.is_none()
    }
}

/// Image pairs keyed by kernel name (`ns` included when present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRefMap {
    pairs: BTreeMap<String, ImagePair>,
}

impl ImageRefMap {
    pub fn get(&self, kernel: &str) -> Option<&ImagePair> {
        self.pairs.get(kernel)
    }

    /// Pair for `kernel`, empty if the kernel has no directory.
    pub fn pair_for(&self, kernel: &str) -> ImagePair {
        self.pairs.get(kernel).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn insert(&mut self, kernel: impl Into<String>, pair: ImagePair) {
        self.pairs.insert(kernel.into(), pair);
    }
}

/// Scan every kernel directory under `<date>/<variable>/kernels`.
///
/// File names are sorted before classification, so when several files match
/// the same slot the lexicographically first one is used. URL segments are
/// percent-encoded.
pub fn resolve_images(
    layout: &ResultsLayout,
    url_prefix: &str,
    date: &str,
    variable: &str,
) -> ImageRefMap {
    let mut map = ImageRefMap::default();
    if date.is_empty() || variable.is_empty() {
        return map;
    }

    let mut kernels = list_entries(&layout.kernels_dir(date, variable), EntryKind::Directory);
    kernels.sort();

    for kernel in kernels {
        let mut files = list_entries(&layout.kernel_dir(date, variable, &kernel), EntryKind::File);
        files.sort();

        let mut pair = ImagePair::default();
        for file in files {
            let Some(slot) = ImageSlot::classify(&kernel, &file) else {
                continue;
            };
            let entry = pair.slot_mut(slot);
            if entry.is_none() {
                *entry = Some(url_path(
                    url_prefix,
                    [date, variable, KERNELS_DIR, kernel.as_str(), file.as_str()],
                ));
            }
        }

        if pair.is_empty() {
            tracing::debug!(date = %date, variable = %variable, kernel = %kernel, "No images for kernel");
        }
        map.insert(kernel, pair);
    }

    map
}
