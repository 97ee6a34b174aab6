//! HTML rendering of the index page.

use gp_common::html::{escape, hidden_field, nav_tab, page_shell, select_field};
use gp_common::ClosedChoice;

use crate::config::CatalogConfig;
use crate::paths::simulated_field_images;
use crate::resolve::{SensorState, Tab};

/// Render the full page for a resolved request.
pub fn render_index(config: &CatalogConfig, state: &SensorState) -> String {
    let mut body = String::new();

    body.push_str("    <ul class=\"nav nav-tabs\" role=\"tablist\">\n");
    for tab in Tab::VARIANTS {
        body.push_str(&nav_tab(
            &format!("/?tab={}", tab.as_str()),
            tab.label(),
            *tab == state.tab,
        ));
        body.push('\n');
    }
    body.push_str("    </ul>\n");

    body.push_str("    <div class=\"tab-content mt-4\">\n      <div class=\"tab-pane fade show active\">\n");
    match state.tab {
        Tab::Sensor => body.push_str(&render_sensor_tab(config, state)),
        Tab::Simulated => body.push_str(&render_simulated_tab(config)),
    }
    body.push_str("      </div>\n    </div>\n");

    page_shell(&config.title, &body)
}

fn render_sensor_tab(config: &CatalogConfig, state: &SensorState) -> String {
    let fields = [
        hidden_field("tab", Tab::Sensor.as_str()),
        select_field("date", "Date", &config.dates, &state.date),
        select_field("sensor", "Sensor Variable", &config.sensors, &state.sensor),
        select_field("kernel", "Kernel", &config.kernels, &state.kernel),
        r#"<div class="col-12"><button type="submit" class="btn btn-primary">View Results</button></div>"#
            .to_string(),
    ];

    format!(
        r#"      <form method="get" class="row g-3 mb-4">
{fields}
      </form>
      <div class="d-flex">
        <div class="img-col">
          <h4>Mean Prediction</h4>
          <img src="{mean}" alt="Sensor Mean Prediction" class="img-fluid">
        </div>
        <div class="img-col">
          <h4>Uncertainty Map</h4>
          <img src="{std}" alt="Sensor Uncertainty" class="img-fluid">
        </div>
      </div>
"#,
        fields = fields.join("\n"),
        mean = escape(&state.images.mean),
        std = escape(&state.images.std),
    )
}

fn render_simulated_tab(config: &CatalogConfig) -> String {
    let cells: String = simulated_field_images(config)
        .iter()
        .map(|(kernel, src)| {
            format!(
                r#"        <div class="col-md-6 mb-4">
          <h4>{kernel}</h4>
          <img src="{src}" alt="Simulated Field {kernel}" class="img-fluid">
        </div>
"#,
                kernel = escape(kernel),
                src = escape(src),
            )
        })
        .collect();

    format!(
        "      <h2>Simulated Field Results</h2>\n      <div class=\"row\">\n{}      </div>\n",
        cells
    )
}
