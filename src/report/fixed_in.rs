use crate::report::model::{BaseImage, Upgrade, Vulnerability};

/// Upgrade targets whose fixed set contains `vuln`, in upgrade order.
///
/// A target appears once per matching entry, so an upgrade that lists the
/// same id twice shows up twice.
pub fn fixed_in<'a>(vuln: &Vulnerability, upgrades: Option<&'a [Upgrade]>) -> Vec<&'a str> {
    let Some(upgrades) = upgrades else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for upgrade in upgrades {
        for fixed in &upgrade.fixed_vulnerabilities {
            if fixed.id == vuln.id {
                tags.push(upgrade.image_tag.as_str());
            }
        }
    }
    tags
}

/// Shorthand for resolving against a base image's own upgrade collection
pub fn fixed_in_base<'a>(vuln: &Vulnerability, base: &'a BaseImage) -> Vec<&'a str> {
    fixed_in(vuln, base.upgrades.as_deref())
}
