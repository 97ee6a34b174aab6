//! Image URL construction from the fixed catalog.
//!
//! Paths are built by convention only; existence on disk is not checked.
//! Every segment is percent-encoded.

use gp_common::url_path;

use crate::config::CatalogConfig;

/// URL prefix of the static file route.
pub const RESULTS_PREFIX: &str = "/results";

/// Mean and standard-deviation plot URLs for one sensor selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorImages {
    pub mean: String,
    pub std: String,
}

/// Build the sensor image URLs for `date` / `sensor` / kernel `folder`.
///
/// `folder` is the on-disk kernel folder, already mapped from the display name.
pub fn sensor_image_paths(date: &str, sensor: &str, folder: &str) -> SensorImages {
    let stem = format!("{}_{}_{}", date, sensor, folder);
    let mean = format!("mean_{}.png", stem);
    let std = format!("std_{}.png", stem);
    SensorImages {
        mean: url_path(RESULTS_PREFIX, [date, sensor, "kernels", folder, mean.as_str()]),
        std: url_path(RESULTS_PREFIX, [date, sensor, "kernels", folder, std.as_str()]),
    }
}

/// Simulated-field image URLs as `(kernel, url)` pairs, in configured order.
pub fn simulated_field_images(config: &CatalogConfig) -> Vec<(String, String)> {
    config
        .simulated_fields
        .iter()
        .map(|field| {
            (
                field.kernel.clone(),
                url_path(
                    RESULTS_PREFIX,
                    [config.simulated_dir.as_str(), field.file.as_str()],
                ),
            )
        })
        .collect()
}
