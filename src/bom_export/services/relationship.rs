//! Relationship verbs, supplier resolution and package comments.
//!
//! The hub describes how a component entered the BOM through its match
//! types; SPDX describes the same thing through relationship verbs and
//! free-text package comments. The mapping tables here are ordered:
//! dependency matches outrank containment matches, and within each
//! table the first entry present in the component's match types wins.

use crate::bom_export::domain::component::BomComponent;
use crate::bom_export::domain::document::NOASSERTION;

const DEPENDS_MATCHES: &[(&str, &str)] = &[
    ("FILE_DEPENDENCY_DIRECT", "DEPENDS_ON"),
    ("FILE_DEPENDENCY_TRANSITIVE", "DEPENDS_ON"),
];

const CONTAINS_MATCHES: &[(&str, &str)] = &[
    ("FILE_EXACT", "CONTAINS"),
    ("FILE_FILES_ADDED_DELETED_AND_MODIFIED", "CONTAINS"),
    ("FILE_DEPENDENCY", "CONTAINS"),
    ("FILE_EXACT_FILE_MATCH", "CONTAINS"),
    ("FILE_SOME_FILES_MODIFIED", "CONTAINS"),
    ("MANUAL_BOM_COMPONENT", "CONTAINS"),
    ("MANUAL_BOM_FILE", "CONTAINS"),
    ("PARTIAL_FILE", "CONTAINS"),
    ("BINARY", "CONTAINS"),
    ("SNIPPET", "OTHER"),
];

/// Pick the relationship verb for a component's match types.
///
/// Returns `None` when no match type is recognized; the caller emits
/// the package without a relationship and warns.
pub fn relationship_for_match_types(match_types: &[String]) -> Option<&'static str> {
    for (match_type, verb) in DEPENDS_MATCHES.iter().chain(CONTAINS_MATCHES) {
        if match_types.iter().any(|m| m == match_type) {
            return Some(verb);
        }
    }
    None
}

/// Where a package's supplier value came from.
///
/// Cascade: the BOM-level `PackageSupplier` custom field beats the
/// first origin's external namespace, which beats nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Supplier {
    /// Set by the user through the BOM custom field.
    BomField(String),
    /// Derived from the first origin's external namespace.
    Origin(String),
    Unknown,
}

impl Supplier {
    pub fn resolve(component: &BomComponent, custom_field: Option<&str>) -> Self {
        if let Some(name) = custom_field.filter(|name| !name.is_empty()) {
            return Supplier::BomField(name.to_string());
        }
        if let Some(namespace) = component
            .first_origin()
            .and_then(|origin| origin.external_namespace.as_deref())
        {
            return Supplier::Origin(format!("Organization: {}", namespace));
        }
        Supplier::Unknown
    }

    /// Value for the package's supplier field.
    pub fn spdx_value(&self) -> &str {
        match self {
            Supplier::BomField(name) | Supplier::Origin(name) => name,
            Supplier::Unknown => NOASSERTION,
        }
    }

    /// Locator that replaces the purl external reference when the
    /// supplier was set at the BOM level.
    pub fn locator(&self, component: &BomComponent) -> Option<String> {
        match self {
            Supplier::BomField(name) => Some(format!(
                "supplier:{}/{}/{}",
                name.replace("Organization: ", ""),
                component.component_name,
                component
                    .component_version_name
                    .as_deref()
                    .unwrap_or_default()
            )),
            _ => None,
        }
    }
}

/// Synthesize the package comment: how the component entered the BOM
/// and where its supplier value came from.
pub fn package_comment(component: &BomComponent, supplier: &Supplier) -> String {
    let mut comment = if component.is_custom() {
        String::from("This is a custom component")
    } else if component.is_sub_project() {
        String::from("This is a sub project")
    } else {
        String::from("This is an open source component from the hub knowledge base")
    };

    if let Some(first_match) = component.match_types.first() {
        if first_match == "MANUAL_BOM_COMPONENT" {
            comment.push_str(" which was manually added");
        } else {
            comment.push_str(" which was automatically detected");
            match first_match.as_str() {
                "FILE_EXACT" => comment.push_str(" as a direct file match"),
                "SNIPPET" => comment.push_str(" as a code snippet"),
                "FILE_DEPENDENCY_DIRECT" => {
                    comment.push_str(" as a directly declared dependency")
                }
                "FILE_DEPENDENCY_TRANSITIVE" => {
                    comment.push_str(" as a transitive dependency")
                }
                _ => {}
            }
        }
    }

    match supplier {
        Supplier::BomField(_) => {
            comment.push_str(", the PackageSupplier was provided by the user at the BOM level")
        }
        Supplier::Origin(_) => {
            comment.push_str(", the PackageSupplier was based on the externalNamespace")
        }
        Supplier::Unknown => comment.push_str(", the PackageSupplier was not populated"),
    }
    comment
}
