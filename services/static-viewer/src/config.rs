//! Option catalog configuration.
//!
//! Loaded once at startup from YAML (or built-in defaults) and shared
//! read-only through the application state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

use gp_common::{GpError, GpResult};

/// Fixed lists of selectable options and how they map onto disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Page title
    pub title: String,

    /// Survey dates; the first one is the default
    pub dates: Vec<String>,

    /// Sensor variable folder names; the first one is the default
    pub sensors: Vec<String>,

    /// Kernel display names; the first one is the default
    pub kernels: Vec<String>,

    /// Display name -> folder name, for kernels whose folder differs
    pub kernel_folders: BTreeMap<String, String>,

    /// Folder under the results root holding simulated-field images
    pub simulated_dir: String,

    /// Simulated-field images, in display order
    pub simulated_fields: Vec<SimulatedField>,
}

/// One simulated-field image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedField {
    /// Kernel display name used as the heading
    pub kernel: String,

    /// File name inside the simulated-field folder
    pub file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let kernel_folders = [
            ("Exponential", "Exponential"),
            ("Squared Exponential", "Squared_Exponential"),
            ("Matern 3_2", "Matern_3_2"),
            ("Matern 5_2", "Matern_5_2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let simulated_fields = [
            ("Exponential", "exp.png"),
            ("Squared Exponential", "sqexp.png"),
            ("Matern 3_2", "3_2.png"),
            ("Matern 5_2", "5_2.png"),
        ]
        .into_iter()
        .map(|(kernel, file)| SimulatedField {
            kernel: kernel.to_string(),
            file: file.to_string(),
        })
        .collect();

        Self {
            title: "GP Regression Results".to_string(),
            dates: owned(&["dec6", "dec17", "feb15", "jan31", "oct3", "sep19"]),
            sensors: owned(&[
                "Chlorophyll_ug_L",
                "Conductivity_uS_cm",
                "Depth_Sonar",
                "Dissolved_Oxygen_Concentration_mg_L",
                "Dissolved_Oxygen_Saturation",
                "pH",
                "Temperature_Â°C",
            ]),
            kernels: owned(&["Exponential", "Squared Exponential", "Matern 3_2", "Matern 5_2"]),
            kernel_folders,
            simulated_dir: "arti".to_string(),
            simulated_fields,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl CatalogConfig {
    /// Load from `path`, or use the built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> GpResult<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => {
                tracing::info!("No catalog file given, using built-in catalog");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Read, parse and validate a YAML catalog file.
    pub fn from_yaml_file(path: &Path) -> GpResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GpError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            dates = config.dates.len(),
            sensors = config.sensors.len(),
            kernels = config.kernels.len(),
            "Loaded catalog"
        );
        Ok(config)
    }

    /// Parse and validate YAML text. Missing keys take their default values.
    pub fn from_yaml_str(content: &str) -> GpResult<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| GpError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject catalogs the request path cannot work with.
    pub fn validate(&self) -> GpResult<()> {
        if self.dates.is_empty() {
            return Err(GpError::EmptyOptionList("dates"));
        }
        if self.sensors.is_empty() {
            return Err(GpError::EmptyOptionList("sensors"));
        }
        if self.kernels.is_empty() {
            return Err(GpError::EmptyOptionList("kernels"));
        }

        if !is_single_component(&self.simulated_dir) {
            return Err(GpError::InvalidConfig {
                field: "simulated_dir",
                message: format!("'{}' must be a single folder name", self.simulated_dir),
            });
        }
        for field in &self.simulated_fields {
            if !is_single_component(&field.file) {
                return Err(GpError::InvalidConfig {
                    field: "simulated_fields",
                    message: format!("'{}' must be a plain file name", field.file),
                });
            }
        }

        Ok(())
    }

    /// Folder name on disk for a kernel display name.
    pub fn kernel_folder<'a>(&'a self, kernel: &'a str) -> &'a str {
        self.kernel_folders
            .get(kernel)
            .map(String::as_str)
            .unwrap_or(kernel)
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
