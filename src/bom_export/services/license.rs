//! License expression planning.
//!
//! Turns the license structure the hub reports for a BOM component into
//! an SPDX license expression plus the list of custom licenses whose
//! text has to be pulled separately. Planning is pure; the actual text
//! retrieval happens in the network adapter so it can be batched and
//! cached.

use crate::bom_export::domain::component::BomComponent;
use crate::bom_export::domain::document::NOASSERTION;
use crate::bom_export::domain::identifier::license_ref;

/// Map ids the hub still reports from the deprecated part of the SPDX
/// license list onto their current equivalents. Ids without a current
/// equivalent become NOASSERTION; unknown ids pass through unchanged.
pub fn remap_deprecated(spdx_id: &str) -> &str {
    match spdx_id {
        "AGPL-1.0" => "AGPL-1.0-only",
        "AGPL-3.0" => "AGPL-3.0-only",
        "BSD-2-Clause-FreeBSD" => "BSD-2-Clause",
        "BSD-2-Clause-NetBSD" => "BSD-2-Clause",
        "eCos-2.0" => NOASSERTION,
        "GFDL-1.1" => "GFDL-1.1-only",
        "GFDL-1.2" => "GFDL-1.2-only",
        "GFDL-1.3" => "GFDL-1.3-only",
        "GPL-1.0" => "GPL-1.0-only",
        "GPL-1.0+" => "GPL-1.0-or-later",
        "GPL-2.0-with-autoconf-exception" => "GPL-2.0-only",
        "GPL-2.0-with-bison-exception" => "GPL-2.0-only",
        "GPL-2.0-with-classpath-exception" => "GPL-2.0-only",
        "GPL-2.0-with-font-exception" => "GPL-2.0-only",
        "GPL-2.0-with-GCC-exception" => "GPL-2.0-only",
        "GPL-2.0" => "GPL-2.0-only",
        "GPL-2.0+" => "GPL-2.0-or-later",
        "GPL-3.0-with-autoconf-exception" => "GPL-3.0-only",
        "GPL-3.0-with-GCC-exception" => "GPL-3.0-only",
        "GPL-3.0" => "GPL-3.0-only",
        "GPL-3.0+" => "GPL-3.0-or-later",
        "LGPL-2.0" => "LGPL-2.0-only",
        "LGPL-2.0+" => "LGPL-2.0-or-later",
        "LGPL-2.1" => "LGPL-2.1-only",
        "LGPL-2.1+" => "LGPL-2.1-or-later",
        "LGPL-3.0" => "LGPL-3.0-only",
        "LGPL-3.0+" => "LGPL-3.0-or-later",
        "Nunit" => NOASSERTION,
        "StandardML-NJ" => "SMLNJ",
        "wxWindows" => NOASSERTION,
        other => other,
    }
}

/// One license contributing to a component's expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLicense {
    /// SPDX id or LicenseRef identifier.
    pub id: String,
    /// License resource URL to pull the text from; set only for custom
    /// licenses, which are not on the SPDX license list.
    pub text_url: Option<String>,
}

/// All licenses of one component plus how they combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicensePlan {
    pub entries: Vec<PlannedLicense>,
    pub disjunctive: bool,
}

/// Plan the license expression for a BOM component.
///
/// The hub reports a flat list, or a single group whose nested list is
/// combined per the group's `licenseType`. Known SPDX ids are remapped
/// off the deprecated list; licenses without an SPDX id become
/// LicenseRef entries scoped by component name. Entries carrying
/// neither an id nor a display name contribute nothing.
///
/// Returns `None` when the component has no usable license data at all.
pub fn plan_licenses(component: &BomComponent) -> Option<LicensePlan> {
    if component.licenses.is_empty() {
        return None;
    }

    let mut selected = component.licenses.as_slice();
    let mut license_type = None;
    if selected[0].licenses.len() > 1 {
        license_type = selected[0].license_type.as_deref();
        selected = selected[0].licenses.as_slice();
    }
    let disjunctive = license_type == Some("DISJUNCTIVE");

    let mut entries = Vec::with_capacity(selected.len());
    for group in selected {
        if let Some(spdx_id) = group.spdx_id.as_deref() {
            entries.push(PlannedLicense {
                id: remap_deprecated(spdx_id).to_string(),
                text_url: None,
            });
        } else if let Some(display) = group.license_display.as_deref() {
            entries.push(PlannedLicense {
                id: license_ref(display, &component.component_name),
                text_url: group.license.clone(),
            });
        }
    }

    if entries.is_empty() {
        return None;
    }
    Some(LicensePlan {
        entries,
        disjunctive,
    })
}

/// Combine license ids into an SPDX expression. Two or more ids are
/// joined with OR (disjunctive) or AND and wrapped in parentheses.
pub fn combine_expression(ids: &[String], disjunctive: bool) -> String {
    match ids {
        [] => NOASSERTION.to_string(),
        [single] => single.clone(),
        _ => {
            let joiner = if disjunctive { " OR " } else { " AND " };
            format!("({})", ids.join(joiner))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_export::domain::component::LicenseGroup;

    fn component_with_licenses(licenses: Vec<LicenseGroup>) -> BomComponent {
        BomComponent {
            component_name: "libfoo".to_string(),
            licenses,
            ..BomComponent::default()
        }
    }

    fn spdx_license(id: &str) -> LicenseGroup {
        LicenseGroup {
            license_display: Some(format!("{} License", id)),
            spdx_id: Some(id.to_string()),
            ..LicenseGroup::default()
        }
    }

    #[test]
    fn test_remap_deprecated_ids() {
        assert_eq!(remap_deprecated("GPL-2.0"), "GPL-2.0-only");
        assert_eq!(remap_deprecated("GPL-2.0+"), "GPL-2.0-or-later");
        assert_eq!(remap_deprecated("GPL-2.0-with-classpath-exception"), "GPL-2.0-only");
        assert_eq!(remap_deprecated("StandardML-NJ"), "SMLNJ");
        assert_eq!(remap_deprecated("eCos-2.0"), "NOASSERTION");
    }

    #[test]
    fn test_remap_passes_current_ids_through() {
        assert_eq!(remap_deprecated("MIT"), "MIT");
        assert_eq!(remap_deprecated("Apache-2.0"), "Apache-2.0");
    }

    #[test]
    fn test_plan_single_spdx_license() {
        let component = component_with_licenses(vec![spdx_license("MIT")]);
        let plan = plan_licenses(&component).unwrap();
        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].id, "MIT");
        assert_eq!(plan.entries[0].text_url, None);
        assert!(!plan.disjunctive);
    }

    #[test]
    fn test_plan_custom_license_gets_license_ref() {
        let component = component_with_licenses(vec![LicenseGroup {
            license_display: Some("Foo Public License v1.0".to_string()),
            license: Some("https://hub.example.com/api/licenses/9f1a".to_string()),
            ..LicenseGroup::default()
        }]);
        let plan = plan_licenses(&component).unwrap();
        assert_eq!(plan.entries[0].id, "LicenseRef-FooPublicLicensev10-libfoo");
        assert_eq!(
            plan.entries[0].text_url.as_deref(),
            Some("https://hub.example.com/api/licenses/9f1a")
        );
    }

    #[test]
    fn test_plan_nested_disjunctive_group() {
        let component = component_with_licenses(vec![LicenseGroup {
            license_display: Some("(MIT OR Apache-2.0)".to_string()),
            license_type: Some("DISJUNCTIVE".to_string()),
            licenses: vec![spdx_license("MIT"), spdx_license("Apache-2.0")],
            ..LicenseGroup::default()
        }]);
        let plan = plan_licenses(&component).unwrap();
        assert!(plan.disjunctive);
        assert_eq!(plan.entries.len(), 2);
        assert_eq!(plan.entries[0].id, "MIT");
        assert_eq!(plan.entries[1].id, "Apache-2.0");
    }

    #[test]
    fn test_plan_nested_single_entry_uses_top_list() {
        // A group whose nested list holds one license is treated as the
        // flat case: the top-level entries combine conjunctively.
        let component = component_with_licenses(vec![LicenseGroup {
            license_display: Some("MIT License".to_string()),
            spdx_id: Some("MIT".to_string()),
            license_type: Some("DISJUNCTIVE".to_string()),
            licenses: vec![spdx_license("MIT")],
            ..LicenseGroup::default()
        }]);
        let plan = plan_licenses(&component).unwrap();
        assert!(!plan.disjunctive);
        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].id, "MIT");
    }

    #[test]
    fn test_plan_deprecated_id_is_remapped() {
        let component = component_with_licenses(vec![spdx_license("LGPL-2.1+")]);
        let plan = plan_licenses(&component).unwrap();
        assert_eq!(plan.entries[0].id, "LGPL-2.1-or-later");
    }

    #[test]
    fn test_plan_skips_entries_without_id_or_display() {
        let component = component_with_licenses(vec![
            LicenseGroup::default(),
            spdx_license("MIT"),
        ]);
        let plan = plan_licenses(&component).unwrap();
        assert_eq!(plan.entries.len(), 1);
    }

    #[test]
    fn test_plan_no_license_data() {
        assert_eq!(plan_licenses(&component_with_licenses(vec![])), None);
        assert_eq!(
            plan_licenses(&component_with_licenses(vec![LicenseGroup::default()])),
            None
        );
    }

    #[test]
    fn test_combine_expression() {
        assert_eq!(combine_expression(&[], false), "NOASSERTION");
        assert_eq!(combine_expression(&["MIT".to_string()], false), "MIT");
        assert_eq!(
            combine_expression(&["MIT".to_string(), "Apache-2.0".to_string()], false),
            "(MIT AND Apache-2.0)"
        );
        assert_eq!(
            combine_expression(&["MIT".to_string(), "Apache-2.0".to_string()], true),
            "(MIT OR Apache-2.0)"
        );
    }
}
