use line_status::error::AppError;
use line_status::presentation::account::AccountRecord;
use line_status::presentation::report::{Renderer, Report};
use std::path::Path;

fn sample_record() -> AccountRecord {
    AccountRecord {
        id: "12345".to_string(),
        login: "user@a.1".to_string(),
        postcode: "TR1 1AA".to_string(),
        tx_rate: "80000000".to_string(),
        rx_rate: "20000000".to_string(),
        tx_rate_adjusted: "75000000".to_string(),
        quota_monthly: "500000000000".to_string(),
        quota_remaining: "1999999999".to_string(),
        quota_timestamp: "2026-10-18 09:00:00".to_string(),
    }
}

#[test]
fn test_default_template_shows_formatted_values() {
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&Report::new(sample_record())).unwrap();

    assert!(html.contains("80.00 Mb/s"));
    assert!(html.contains("20.00 Mb/s"));
    assert!(html.contains("75.00 Mb/s"));
    assert!(html.contains("500 GB"));
    assert!(html.contains("1 GB"));
    assert!(html.contains("2026-10-18 09:00:00"));
    assert!(html.contains("TR1 1AA"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_default_template_embeds_graphs() {
    let renderer = Renderer::new().unwrap();
    let mut report = Report::new(sample_record());
    report.upload_image = Some("cG5n".to_string());
    report.download_image = Some("ZG93bg==".to_string());

    let html = renderer.render(&report).unwrap();
    assert!(html.contains("data:image/png;base64,cG5n"));
    assert!(html.contains("Download speed history"));
    assert!(html.contains("Upload speed history"));
}

#[test]
fn test_unknown_values_render_as_zero() {
    let renderer = Renderer::new().unwrap();
    let html = renderer.render(&Report::new(AccountRecord::default())).unwrap();
    assert!(html.contains("0.00 Mb/s"));
    assert!(html.contains("0 GB"));
}

#[test]
fn test_upstream_text_is_escaped() {
    let renderer = Renderer::new().unwrap();
    let mut record = sample_record();
    record.login = "<script>alert(1)</script>".to_string();

    let html = renderer.render(&Report::new(record)).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_custom_template_functions() {
    let renderer = Renderer::with_source(
        "{{ formatRate(info.tx_rate) }}|{{ formatQuota(info.quota_monthly) }}|{{ formatRate(100000000) }}|{{ formatQuota(missing) }}"
            .to_string(),
    )
    .unwrap();

    let html = renderer.render(&Report::new(sample_record())).unwrap();
    assert_eq!(html, "80.00 Mb/s|500 GB|100.00 Mb/s|0 GB");
}

#[test]
fn test_template_syntax_error_is_reported() {
    match Renderer::with_source("{% if %}".to_string()) {
        Err(AppError::Template(_)) => (),
        Err(other) => panic!("Expected Template error, got {other:?}"),
        Ok(_) => panic!("Expected Template error"),
    }
}

#[test]
fn test_missing_template_file_is_io_error() {
    match Renderer::from_path(Path::new("/nonexistent/line-status/index.html")) {
        Err(AppError::Io(_)) => (),
        Err(other) => panic!("Expected Io error, got {other:?}"),
        Ok(_) => panic!("Expected Io error"),
    }
}
