use chrono::{DateTime, Utc};
use comfy_table::{presets, Cell, Color, Table};

use crate::report::fixed_in::fixed_in_base;
use crate::report::model::Report;
use crate::report::severity::Severity;
use crate::report::sorter::{sort_vulnerabilities, SortKey, SortOrder};

const HEADER: [&str; 6] = ["Base Image", "Last Scan", "Vulnerability", "Severity", "CVSS", "Fixed In"];

/// One (base image, vulnerability) pair, fully formatted
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub image: String,
    pub last_scan: String,
    pub id: String,
    pub severity: String,
    pub cvss: String,
    pub fixed_in: String,
}

/// `YYYY-MM-DD`, or `unknown` when the image was never scanned
pub fn format_last_scan(last_scan: Option<&DateTime<Utc>>) -> String {
    match last_scan {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "unknown".to_string(),
    }
}

pub fn format_cvss(cvss: f64) -> String {
    format!("{:.2}", cvss)
}

/// Build the table rows: base images in report order, each image's
/// vulnerabilities sorted on a copy so the report itself is untouched.
pub fn table_rows(report: &Report, key: SortKey, order: SortOrder) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for base in &report.base_images {
        let image = base.reference();
        let last_scan = format_last_scan(base.last_scan.as_ref());

        let mut vulns = base.vulnerabilities.clone();
        sort_vulnerabilities(&mut vulns, key, order);

        for vuln in &vulns {
            rows.push(TableRow {
                image: image.clone(),
                last_scan: last_scan.clone(),
                id: vuln.id.clone(),
                severity: vuln.severity.clone(),
                cvss: format_cvss(vuln.cvss),
                fixed_in: fixed_in_base(vuln, base).join(", "),
            });
        }
    }

    rows
}

fn severity_color(label: &str) -> Option<Color> {
    match Severity::from_label(label) {
        Severity::Critical | Severity::High => Some(Color::Red),
        Severity::Medium => Some(Color::Yellow),
        Severity::Low => Some(Color::Blue),
        Severity::Unknown => None,
    }
}

fn styled(text: &str, color: Option<Color>) -> Cell {
    match color {
        Some(color) => Cell::new(text).fg(color),
        None => Cell::new(text),
    }
}

/// Render the report as a table preceded by an `Input: <repository> <tag>` banner
pub fn render(report: &Report, key: SortKey, order: SortOrder, colorize: bool) -> String {
    let rows = table_rows(report, key, order);

    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL_CONDENSED).force_no_tty();
    if colorize {
        table.enforce_styling();
    }
    table.set_header(HEADER.to_vec());

    let mut previous: Option<(&str, &str)> = None;
    for row in &rows {
        // Repeated (image, last scan) pairs collapse into the row above
        let current = (row.image.as_str(), row.last_scan.as_str());
        let (image, last_scan) = if previous == Some(current) {
            ("", "")
        } else {
            current
        };
        previous = Some(current);

        let color = if colorize { severity_color(&row.severity) } else { None };
        table.add_row(vec![
            Cell::new(image),
            Cell::new(last_scan),
            styled(&row.id, color),
            styled(&row.severity, color),
            styled(&row.cvss, color),
            Cell::new(&row.fixed_in),
        ]);
    }

    format!("Input: {} {}\n{}\n", report.image_repository, report.image_tag, table)
}
