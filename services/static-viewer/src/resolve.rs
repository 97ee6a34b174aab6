//! Request-state resolution against the fixed catalog.

use gp_common::{pick_or_first, ClosedChoice, QueryArgs};

use crate::config::CatalogConfig;
use crate::paths::{sensor_image_paths, SensorImages};

/// Raw query parameters of `GET /`.
#[derive(Debug, Clone, Default)]
pub struct IndexParams {
    pub tab: Option<String>,
    pub date: Option<String>,
    pub sensor: Option<String>,
    pub kernel: Option<String>,
}

impl IndexParams {
    pub fn from_args(args: &QueryArgs) -> Self {
        let field = |key: &str| args.get(key).map(str::to_string);
        Self {
            tab: field("tab"),
            date: field("date"),
            sensor: field("sensor"),
            kernel: field("kernel"),
        }
    }
}

/// Page tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Sensor,
    Simulated,
}

impl ClosedChoice for Tab {
    const VARIANTS: &'static [Self] = &[Tab::Sensor, Tab::Simulated];

    fn as_str(&self) -> &'static str {
        match self {
            Tab::Sensor => "sensor",
            Tab::Simulated => "simulated",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Sensor => "Sensor Data",
            Tab::Simulated => "Simulated Field",
        }
    }
}

/// Fully resolved selection for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorState {
    pub tab: Tab,
    pub date: String,
    pub sensor: String,
    /// Kernel display name
    pub kernel: String,
    /// Kernel folder on disk
    pub kernel_folder: String,
    pub images: SensorImages,
}

/// Resolve raw parameters; unknown values fall back to the first catalog entry.
pub fn resolve_request(params: &IndexParams, config: &CatalogConfig) -> SensorState {
    let tab = Tab::parse_or_default(params.tab.as_deref());
    let date = pick_or_first(params.date.as_deref(), &config.dates);
    let sensor = pick_or_first(params.sensor.as_deref(), &config.sensors);
    let kernel = pick_or_first(params.kernel.as_deref(), &config.kernels);

    let kernel_folder = config.kernel_folder(&kernel).to_string();
    let images = sensor_image_paths(&date, &sensor, &kernel_folder);

    SensorState {
        tab,
        date,
        sensor,
        kernel,
        kernel_folder,
        images,
    }
}
