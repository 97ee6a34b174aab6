//! Results viewer configuration.

use std::path::PathBuf;

use gp_common::IgnoreSet;

/// URL prefix of the image route.
pub const IMG_PREFIX: &str = "/img";

/// Runtime configuration, built once from the command line.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Directory holding `<date>/<variable>/kernels/<kernel>/` trees
    pub results_root: PathBuf,

    /// Directory names never offered as options
    pub ignore: IgnoreSet,

    /// Prefix for image URLs embedded in the page
    pub url_prefix: String,

    /// Page title
    pub title: String,
}

impl ViewerConfig {
    pub fn new(results_root: impl Into<PathBuf>, ignore: IgnoreSet) -> Self {
        Self {
            results_root: results_root.into(),
            ignore,
            url_prefix: IMG_PREFIX.to_string(),
            title: "GP Regression Results".to_string(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new("images", IgnoreSet::default())
    }
}
