//! End-to-end tests for the results viewer router.
//!
//! Each test builds a temporary results tree, drives the router with
//! `tower::ServiceExt::oneshot` and inspects the response.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use gp_common::IgnoreSet;
use results_viewer::{build_router, AppState, ViewerConfig};
use test_utils::{assert_html_contains, assert_html_lacks, fixtures, ResultsTree};
use viewer_http::export_page;

fn state_for(tree: &ResultsTree) -> Arc<AppState> {
    Arc::new(AppState::new(
        ViewerConfig::new(tree.root(), IgnoreSet::default()),
        None,
    ))
}

fn router_for(tree: &ResultsTree) -> Router {
    build_router(state_for(tree))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, body.to_vec())
}

async fn get_page(app: Router, uri: &str) -> String {
    let (status, content_type, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    String::from_utf8(body).unwrap()
}

// ============================================================================
// Index page
// ============================================================================

#[tokio::test]
async fn test_index_defaults_to_first_date() {
    let tree = ResultsTree::new();
    tree.stationary_kernel("jan31", "pH", "Exponential");
    tree.stationary_kernel("dec6", "pH", "Exponential");
    tree.dir("arti");

    let html = get_page(router_for(&tree), "/").await;

    assert_html_contains!(html, r#"<option value="dec6" selected>dec6</option>"#);
    assert_html_contains!(html, r#"<option value="jan31">jan31</option>"#);
    assert_html_lacks!(html, r#"value="arti""#);
    assert_html_contains!(
        html,
        r#"src="/img/dec6/pH/kernels/Exponential/mean_dec6_pH_Exponential.png""#
    );
}

#[tokio::test]
async fn test_index_unknown_values_fall_back() {
    let tree = fixtures::full_tree();
    let html = get_page(
        router_for(&tree),
        "/?mode=Nope&date=feb15&var=Salinity&kernel=Linear&view_type=x&compare_type=y&uncert=1",
    )
    .await;

    assert_html_contains!(html, r#"<option value="dec6" selected>"#);
    assert_html_contains!(html, r#"<option value="Chlorophyll_ug_L" selected>"#);
    assert_html_contains!(html, r#"<option value="Exponential" selected>"#);
    assert_html_lacks!(html, "Uncertainty Map");
}

#[tokio::test]
async fn test_index_repeated_key_keeps_first_value() {
    let tree = fixtures::full_tree();
    let html = get_page(router_for(&tree), "/?date=jan31&date=dec6&var=pH").await;
    assert_html_contains!(html, r#"<option value="jan31" selected>"#);
    assert_html_contains!(html, r#"<option value="pH" selected>"#);
}

#[tokio::test]
async fn test_index_uncertainty_flag() {
    let tree = fixtures::full_tree();
    let html = get_page(router_for(&tree), "/?var=pH&kernel=Matern_3_2&uncert=on").await;

    assert_html_contains!(html, "Uncertainty Map");
    assert_html_contains!(html, "/img/dec6/pH/kernels/Matern_3_2/std_dec6_pH_Matern_3_2.png");
    assert_html_contains!(html, r#"id="uncert" checked"#);
}

#[tokio::test]
async fn test_index_non_stationary_overrides_kernel() {
    let tree = fixtures::full_tree();
    let html = get_page(
        router_for(&tree),
        "/?mode=View&view_type=Non-Stationary&var=pH&kernel=Matern_3_2&uncert=on",
    )
    .await;

    assert_html_contains!(html, "/img/dec6/pH/kernels/ns/dec6_pH_mean.png");
    assert_html_contains!(html, "/img/dec6/pH/kernels/ns/dec6_pH_uncert.png");
    assert_html_lacks!(html, "Matern_3_2/mean_");
    assert_html_lacks!(html, r#"name="kernel""#);
}

#[tokio::test]
async fn test_index_compare_all_shows_every_kernel() {
    let tree = fixtures::full_tree();
    let html = get_page(
        router_for(&tree),
        "/?mode=Compare&compare_type=all&var=pH&kernel=Matern_3_2",
    )
    .await;

    for kernel in fixtures::KERNELS {
        assert_html_contains!(
            html,
            format!("/img/dec6/pH/kernels/{k}/mean_dec6_pH_{k}.png", k = kernel)
        );
    }
    assert_html_lacks!(html, "<h3>Non-Stationary</h3>");
}

#[tokio::test]
async fn test_index_compare_single_against_ns() {
    let tree = fixtures::full_tree();
    let html = get_page(
        router_for(&tree),
        "/?mode=Compare&compare_type=single&var=pH&kernel=Squared_Exponential",
    )
    .await;

    assert_html_contains!(html, "<h3>Squared Exponential</h3>");
    assert_html_contains!(html, "<h3>Non-Stationary</h3>");
    assert_html_lacks!(html, "/kernels/Exponential/mean_");
}

#[tokio::test]
async fn test_index_missing_images_render_placeholders() {
    let tree = ResultsTree::new();
    tree.kernel_with_files("dec6", "pH", "k", &["readme.txt"]);

    let html = get_page(router_for(&tree), "/?uncert=on").await;

    assert_eq!(html.matches(r#"<div class="missing">Missing</div>"#).count(), 2);
    assert_html_lacks!(html, "<img");
}

#[tokio::test]
async fn test_index_empty_root_renders_empty_state() {
    let tree = ResultsTree::new();
    let html = get_page(router_for(&tree), "/").await;

    assert_html_contains!(html, "No results found under");
    assert_html_lacks!(html, "<form");
}

#[tokio::test]
async fn test_index_escapes_directory_names() {
    let tree = ResultsTree::new();
    tree.stationary_kernel("dec6", "a<b>", "Exponential");

    let html = get_page(router_for(&tree), "/").await;
    assert_html_contains!(html, "a&lt;b&gt;");
    assert_html_lacks!(html, "<b>");
    assert_html_contains!(html, "/img/dec6/a%3Cb%3E/kernels/Exponential/");
}

#[tokio::test]
async fn test_index_reserved_character_file_names_are_fetchable() {
    let tree = ResultsTree::new();
    tree.kernel_with_files("dec6", "pH", "k", &["mean_50%.png", "std_a#1.png"]);

    let html = get_page(router_for(&tree), "/?uncert=on").await;
    let mean = "/img/dec6/pH/kernels/k/mean_50%25.png";
    let std = "/img/dec6/pH/kernels/k/std_a%231.png";
    assert_html_contains!(html, format!(r#"src="{}""#, mean));
    assert_html_contains!(html, format!(r#"src="{}""#, std));

    for src in [mean, std] {
        let (status, content_type, _) = get(router_for(&tree), src).await;
        assert_eq!(status, StatusCode::OK, "{}", src);
        assert_eq!(content_type.as_deref(), Some("image/png"));
    }
}

// ============================================================================
// Images
// ============================================================================

#[tokio::test]
async fn test_image_served() {
    let tree = fixtures::full_tree();
    let (status, content_type, body) = get(
        router_for(&tree),
        "/img/dec6/pH/kernels/Exponential/mean_dec6_pH_Exponential.png",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(body, test_utils::tree::PNG_BYTES);
}

#[tokio::test]
async fn test_image_with_encoded_name_served() {
    let tree = fixtures::full_tree();
    let (status, _, _) = get(
        router_for(&tree),
        "/img/dec6/Temperature_%C3%82%C2%B0C/kernels/Exponential/mean_dec6_Temperature_%C3%82%C2%B0C_Exponential.png",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_image_missing_is_404() {
    let tree = fixtures::full_tree();
    let (status, _, _) = get(router_for(&tree), "/img/dec6/pH/kernels/Exponential/nope.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_directory_is_404() {
    let tree = fixtures::full_tree();
    let (status, _, _) = get(router_for(&tree), "/img/dec6/pH").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_traversal_is_404() {
    let outer = ResultsTree::new();
    outer.file("secret.png", b"secret");
    outer.stationary_kernel("results/dec6", "pH", "Exponential");
    let app = build_router(Arc::new(AppState::new(
        ViewerConfig::new(outer.root().join("results"), IgnoreSet::default()),
        None,
    )));

    let (status, _, _) = get(app, "/img/..%2Fsecret.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Health, metrics, export
// ============================================================================

#[tokio::test]
async fn test_health() {
    let tree = ResultsTree::new();
    let (status, _, body) = get(router_for(&tree), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "results-viewer");
}

#[tokio::test]
async fn test_metrics_without_recorder_is_empty() {
    let tree = ResultsTree::new();
    let (status, _, body) = get(router_for(&tree), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_export_matches_index() {
    let tree = fixtures::full_tree();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("site.html");

    let written = export_page(build_router(state_for(&tree)), &output).await.unwrap();
    assert_eq!(written, output);

    let exported = std::fs::read_to_string(&output).unwrap();
    let served = get_page(router_for(&tree), "/").await;
    assert_eq!(exported, served);
}
