use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A base image vulnerability report as returned by the BIF server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Repository of the image that was looked up, e.g. "nginx"
    pub image_repository: String,

    /// Tag of the image that was looked up, e.g. "1.25"
    pub image_tag: String,

    /// Platform of the image, e.g. "linux/amd64"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_platform: Option<String>,

    /// Candidate base images, in the order the server ranked them
    #[serde(default)]
    pub base_images: Vec<BaseImage>,
}

/// One candidate base image and the vulnerabilities known for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseImage {
    pub image_repository: String,

    pub image_tag: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,

    /// When the base image was last scanned (None = never / unknown)
    #[serde(default)]
    pub last_scan: Option<DateTime<Utc>>,

    /// Upgrade targets and the vulnerabilities each of them fixes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Vec<Upgrade>>,
}

impl BaseImage {
    /// Image reference in `repository:tag` form
    pub fn reference(&self) -> String {
        format!("{}:{}", self.image_repository, self.image_tag)
    }
}

/// A known vulnerability. Identity is the `id` string, compared exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// CVE (or other advisory) identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Severity label: CRITICAL, HIGH, MEDIUM or LOW. Anything else is kept verbatim.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,

    /// CVSS score, 0.0 when the server did not send one
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cvss: f64,
}

/// An image tag that can replace the base image, with the vulnerabilities it fixes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Upgrade type tag, e.g. "patch" or "minor"
    #[serde(rename = "type")]
    pub kind: String,

    /// Target image of the upgrade
    pub image_tag: String,

    #[serde(default)]
    pub last_scan: Option<DateTime<Utc>>,

    /// Vulnerabilities present in the base image that this upgrade no longer has
    #[serde(default)]
    pub fixed_vulnerabilities: Vec<Vulnerability>,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}
