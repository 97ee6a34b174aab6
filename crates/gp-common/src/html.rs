//! HTML building blocks shared by both viewer pages.
//!
//! Pages are assembled with `format!` over small fragments. Every value that
//! comes from the filesystem or the query string goes through [`escape`].

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the common document with Bootstrap from the CDN.
pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link href="{css}" rel="stylesheet">
  <style>
    body {{ padding-top: 20px; }}
    .img-col {{ flex: 1; padding: 10px; }}
    .d-flex {{ display: flex; flex-wrap: wrap; }}
    .missing {{ display: flex; align-items: center; justify-content: center; min-height: 200px; border: 2px dashed #adb5bd; color: #6c757d; font-weight: 600; }}
  </style>
</head>
<body>
  <div class="container">
    <h1 class="mb-4">{title}</h1>
{body}
  </div>
  <script src="{js}"></script>
</body>
</html>
"#,
        title = escape(title),
        css = BOOTSTRAP_CSS,
        js = BOOTSTRAP_JS,
        body = body,
    )
}

/// One navigation tab link.
pub fn nav_tab(href: &str, label: &str, active: bool) -> String {
    format!(
        r#"      <li class="nav-item"><a class="nav-link{active}" href="{href}">{label}</a></li>"#,
        active = if active { " active" } else { "" },
        href = escape(href),
        label = escape(label),
    )
}

/// A labelled `<select>` whose options are `values`, with `selected` preselected.
pub fn select_field(name: &str, label: &str, values: &[String], selected: &str) -> String {
    let options: String = values
        .iter()
        .map(|v| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = escape(v),
                sel = if v == selected { " selected" } else { "" },
            )
        })
        .collect();

    format!(
        r#"<div class="col-md-4">
  <label for="{name}Select" class="form-label">{label}</label>
  <select name="{name}" id="{name}Select" class="form-select">{options}</select>
</div>"#,
        name = escape(name),
        label = escape(label),
        options = options,
    )
}

/// A labelled radio button.
pub fn radio_field(name: &str, value: &str, label: &str, checked: bool) -> String {
    let id = format!("{}-{}", name, value);
    format!(
        r#"<div class="form-check form-check-inline">
  <input class="form-check-input" type="radio" name="{name}" id="{id}" value="{value}"{checked}>
  <label class="form-check-label" for="{id}">{label}</label>
</div>"#,
        name = escape(name),
        id = escape(&id),
        value = escape(value),
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

/// Hidden form field.
pub fn hidden_field(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        escape(name),
        escape(value)
    )
}

/// The placeholder shown where an image file does not exist.
pub fn missing_placeholder() -> &'static str {
    r#"<div class="missing">Missing</div>"#
}

/// An image, or the missing placeholder when `src` is `None`.
pub fn image_or_missing(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="img-fluid">"#,
            escape(src),
            escape(alt)
        ),
        None => missing_placeholder().to_string(),
    }
}
