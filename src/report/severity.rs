/// Severity of a vulnerability, ordered from least to most severe.
///
/// Labels outside the four recognized ones map to `Unknown`, which ranks
/// below `Low`. Matching is exact: "high" is not "HIGH".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn from_label(label: &str) -> Self {
        match label {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    /// Numeric rank used for sorting: CRITICAL=4, HIGH=3, MEDIUM=2, LOW=1, anything else 0
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::Unknown => 0,
        }
    }
}

/// Rank of a raw severity label
pub fn severity_rank(label: &str) -> u8 {
    Severity::from_label(label).rank()
}
