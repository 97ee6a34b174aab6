//! HTML rendering of the index page.
//!
//! Consumes an already resolved view; no validation happens here.

use gp_common::html::{
    escape, hidden_field, image_or_missing, nav_tab, page_shell, radio_field, select_field,
};
use gp_common::{ClosedChoice, ImageRefMap, NS_KERNEL};

use crate::config::ViewerConfig;
use crate::resolve::{CompareType, Mode, RequestState, ResolvedView, ViewType};

/// Heading shown above a kernel's panel.
///
/// Only the first underscore separates words: `Matern_3_2` is "Matern 3_2".
pub fn kernel_label(kernel: &str) -> String {
    if kernel == NS_KERNEL {
        "Non-Stationary".to_string()
    } else {
        kernel.replacen('_', " ", 1)
    }
}

/// Render the full page for a resolved request.
pub fn render_index(config: &ViewerConfig, view: &ResolvedView, images: &ImageRefMap) -> String {
    let state = &view.state;
    let mut body = String::new();

    body.push_str("    <ul class=\"nav nav-tabs\" role=\"tablist\">\n");
    for mode in Mode::VARIANTS {
        body.push_str(&nav_tab(
            &format!("/?mode={}", mode.as_str()),
            mode.label(),
            *mode == state.mode,
        ));
        body.push('\n');
    }
    body.push_str("    </ul>\n");
    body.push_str("    <div class=\"tab-content mt-4\">\n");

    if view.is_empty() {
        body.push_str(&format!(
            "      <div class=\"alert alert-warning\">No results found under <code>{}</code>.</div>\n",
            escape(&config.results_root.display().to_string())
        ));
    } else {
        body.push_str(&render_form(view));
        body.push_str(&render_panels(state, images));
    }

    body.push_str("    </div>\n");
    page_shell(&config.title, &body)
}

fn render_form(view: &ResolvedView) -> String {
    let state = &view.state;
    let mut fields = Vec::new();

    fields.push(hidden_field("mode", state.mode.as_str()));
    fields.push(select_field("date", "Date", &view.catalog.dates, &state.date));
    fields.push(select_field("var", "Variable", &view.catalog.variables, &state.variable));
    if state.kernel_selectable() && !view.catalog.kernels.is_empty() {
        fields.push(select_field("kernel", "Kernel", &view.catalog.kernels, &state.kernel));
    }

    let radios: String = match state.mode {
        Mode::View => ViewType::VARIANTS
            .iter()
            .map(|v| radio_field("view_type", v.as_str(), v.label(), *v == state.view_type))
            .collect(),
        Mode::Compare => CompareType::VARIANTS
            .iter()
            .map(|c| radio_field("compare_type", c.as_str(), c.label(), *c == state.compare_type))
            .collect(),
    };
    fields.push(format!("<div class=\"col-md-8\">{}</div>", radios));

    fields.push(format!(
        r#"<div class="col-md-4 form-check">
  <input class="form-check-input" type="checkbox" name="uncert" id="uncert"{}>
  <label class="form-check-label" for="uncert">Show uncertainty</label>
</div>"#,
        if state.show_uncertainty { " checked" } else { "" }
    ));
    fields.push(
        r#"<div class="col-12"><button type="submit" class="btn btn-primary">Update</button></div>"#
            .to_string(),
    );

    format!(
        "      <form method=\"get\" class=\"row g-3 mb-4\">\n{}\n      </form>\n",
        fields.join("\n")
    )
}

fn render_panels(state: &RequestState, images: &ImageRefMap) -> String {
    let panels = state.panels();
    if panels.is_empty() {
        return "      <div class=\"alert alert-info\">No kernels available for this selection.</div>\n"
            .to_string();
    }

    let column = if panels.len() > 1 { "col-md-6" } else { "col-12" };
    let mut out = String::from("      <div class=\"row\">\n");

    for kernel in &panels {
        let pair = images.pair_for(kernel);
        let label = kernel_label(kernel);

        out.push_str(&format!(
            "        <div class=\"{} mb-4\">\n          <h3>{}</h3>\n          <div class=\"d-flex\">\n",
            column,
            escape(&label)
        ));
        out.push_str(&format!(
            "            <div class=\"img-col\"><h4>Mean Prediction</h4>{}</div>\n",
            image_or_missing(pair.mean.as_deref(), &format!("{} mean prediction", label))
        ));
        if state.show_uncertainty {
            out.push_str(&format!(
                "            <div class=\"img-col\"><h4>Uncertainty Map</h4>{}</div>\n",
                image_or_missing(pair.uncertainty.as_deref(), &format!("{} uncertainty", label))
            ));
        }
        out.push_str("          </div>\n        </div>\n");
    }

    out.push_str("      </div>\n");
    out
}
