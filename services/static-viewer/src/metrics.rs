//! Page metrics. File requests are counted in `viewer_http`.

use metrics::counter;

/// Count one rendered page, labelled by tab.
pub fn record_page_request(tab: &'static str) {
    counter!("page_requests_total", "tab" => tab).increment(1);
}
