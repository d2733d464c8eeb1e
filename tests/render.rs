use bif::report::{render, Report};
use bif::RenderError;

const NGINX_REPORT: &str = r#"{
  "image_repository": "nginx",
  "image_tag": "1.25",
  "base_images": [
    {
      "image_repository": "debian",
      "image_tag": "12",
      "vulnerabilities": [
        {"id": "CVE-B", "severity": "LOW", "cvss": 3.2},
        {"id": "CVE-A", "severity": "HIGH", "cvss": 8.1}
      ],
      "last_scan": "2024-03-05T00:00:00Z",
      "upgrades": [
        {
          "type": "minor",
          "image_tag": "debian:12.1",
          "last_scan": null,
          "fixed_vulnerabilities": [{"id": "CVE-A", "severity": "HIGH", "cvss": 8.1}]
        }
      ]
    }
  ]
}"#;

fn nginx() -> Report {
    serde_json::from_str(NGINX_REPORT).unwrap()
}

/// Table body lines (skips banner, borders and header)
fn data_lines(table: &str) -> Vec<&str> {
    table
        .lines()
        .filter(|l| l.contains("CVE-"))
        .collect()
}

#[test]
fn severity_desc_table_end_to_end() {
    let out = render(&nginx(), "table", "severity", "desc", false).unwrap();
    assert!(out.starts_with("Input: nginx 1.25\n"));

    let lines = data_lines(&out);
    assert_eq!(lines.len(), 2);

    assert!(lines[0].contains("CVE-A"));
    assert!(lines[0].contains("HIGH"));
    assert!(lines[0].contains("8.10"));
    assert!(lines[0].contains("debian:12.1"));
    assert!(lines[0].contains("2024-03-05"));

    assert!(lines[1].contains("CVE-B"));
    assert!(lines[1].contains("3.20"));
    assert!(!lines[1].contains("debian:12.1"));
}

#[test]
fn severity_asc_reverses_rows() {
    let out = render(&nginx(), "table", "severity", "asc", false).unwrap();
    let lines = data_lines(&out);
    assert!(lines[0].contains("CVE-B"));
    assert!(lines[1].contains("CVE-A"));
}

#[test]
fn json_round_trips() {
    let report = nginx();
    let out = render(&report, "json", "severity", "desc", false).unwrap();
    let back: Report = serde_json::from_str(&out).unwrap();
    assert_eq!(back, report);
}

#[test]
fn unsupported_format_and_sort_spec() {
    assert!(matches!(
        render(&nginx(), "xml", "severity", "desc", false),
        Err(RenderError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        render(&nginx(), "table", "priority", "desc", false),
        Err(RenderError::InvalidSortSpec { .. })
    ));
}
