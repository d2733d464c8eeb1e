use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::RenderError;
use crate::report::model::Vulnerability;
use crate::report::severity::severity_rank;

pub const SORT_COLUMNS: &[&str] = &["id", "severity", "cvss"];
pub const SORT_ORDERS: &[&str] = &["asc", "desc"];

/// Column the table's vulnerabilities are sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Severity,
    Cvss,
}

impl FromStr for SortKey {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "severity" => Ok(SortKey::Severity),
            "cvss" => Ok(SortKey::Cvss),
            _ => Err(RenderError::InvalidSortSpec {
                field: "sort-by",
                value: s.to_string(),
                allowed: SORT_COLUMNS,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(RenderError::InvalidSortSpec {
                field: "sort-order",
                value: s.to_string(),
                allowed: SORT_ORDERS,
            }),
        }
    }
}

fn compare(key: SortKey, a: &Vulnerability, b: &Vulnerability) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Severity => severity_rank(&a.severity).cmp(&severity_rank(&b.severity)),
        SortKey::Cvss => a.cvss.total_cmp(&b.cvss),
    }
}

/// Sort one base image's vulnerabilities in place.
///
/// `asc` puts the smallest key first (A→Z for ids), `desc` the largest.
/// The sort is stable in both directions: equal keys keep their input order.
pub fn sort_vulnerabilities(vulns: &mut [Vulnerability], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => vulns.sort_by(|a, b| compare(key, a, b)),
        SortOrder::Desc => vulns.sort_by(|a, b| compare(key, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vuln(id: &str, severity: &str, cvss: f64) -> Vulnerability {
        Vulnerability {
            id: id.to_string(),
            severity: severity.to_string(),
            cvss,
        }
    }

    fn ids(vulns: &[Vulnerability]) -> Vec<&str> {
        vulns.iter().map(|v| v.id.as_str()).collect()
    }

    fn sample() -> Vec<Vulnerability> {
        vec![
            vuln("CVE-C", "LOW", 3.2),
            vuln("CVE-A", "CRITICAL", 9.8),
            vuln("CVE-E", "weird", 0.0),
            vuln("CVE-B", "MEDIUM", 5.5),
            vuln("CVE-D", "HIGH", 8.1),
        ]
    }

    #[test]
    fn severity_desc_puts_critical_first_and_unknown_last() {
        let mut vulns = sample();
        sort_vulnerabilities(&mut vulns, SortKey::Severity, SortOrder::Desc);
        assert_eq!(ids(&vulns), vec!["CVE-A", "CVE-D", "CVE-B", "CVE-C", "CVE-E"]);
    }

    #[test]
    fn severity_asc_is_the_reverse() {
        let mut vulns = sample();
        sort_vulnerabilities(&mut vulns, SortKey::Severity, SortOrder::Asc);
        assert_eq!(ids(&vulns), vec!["CVE-E", "CVE-C", "CVE-B", "CVE-D", "CVE-A"]);
    }

    #[test]
    fn cvss_desc_is_non_increasing() {
        let mut vulns = sample();
        sort_vulnerabilities(&mut vulns, SortKey::Cvss, SortOrder::Desc);
        assert!(vulns.windows(2).all(|w| w[0].cvss >= w[1].cvss));
    }

    #[test]
    fn cvss_asc_is_non_decreasing() {
        let mut vulns = sample();
        sort_vulnerabilities(&mut vulns, SortKey::Cvss, SortOrder::Asc);
        assert!(vulns.windows(2).all(|w| w[0].cvss <= w[1].cvss));
    }

    #[test]
    fn id_asc_is_alphabetical() {
        let mut vulns = sample();
        sort_vulnerabilities(&mut vulns, SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&vulns), vec!["CVE-A", "CVE-B", "CVE-C", "CVE-D", "CVE-E"]);

        sort_vulnerabilities(&mut vulns, SortKey::Id, SortOrder::Desc);
        assert_eq!(ids(&vulns), vec!["CVE-E", "CVE-D", "CVE-C", "CVE-B", "CVE-A"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let input = vec![
            vuln("first", "HIGH", 7.0),
            vuln("second", "LOW", 7.0),
            vuln("third", "HIGH", 7.0),
        ];

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let mut vulns = input.clone();
            sort_vulnerabilities(&mut vulns, SortKey::Cvss, order);
            assert_eq!(ids(&vulns), vec!["first", "second", "third"]);
        }

        let mut vulns = input.clone();
        sort_vulnerabilities(&mut vulns, SortKey::Severity, SortOrder::Desc);
        assert_eq!(ids(&vulns), vec!["first", "third", "second"]);
    }

    #[test]
    fn parses_recognized_settings() {
        assert_eq!("cvss".parse::<SortKey>().unwrap(), SortKey::Cvss);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn rejects_unknown_settings() {
        assert!(matches!(
            "priority".parse::<SortKey>(),
            Err(RenderError::InvalidSortSpec { field: "sort-by", .. })
        ));
        assert!(matches!(
            "DESC".parse::<SortOrder>(),
            Err(RenderError::InvalidSortSpec { field: "sort-order", .. })
        ));
    }
}
