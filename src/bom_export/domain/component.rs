//! Wire model for the hub server's REST API.
//!
//! Field names mirror the server's JSON. Deserialization is tolerant:
//! every field is defaulted, so partially populated BOM entries (common
//! for manually added components) never fail to parse. The component
//! version URL doubles as the unique per-version handle throughout the
//! export.

use serde::Deserialize;

use super::purl::purl_for_origin;

/// `_meta` block attached to every hub API resource.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Meta {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub links: Vec<MetaLink>,
}

impl Meta {
    /// Find the href of the link with the given relation, if present.
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }
}

/// One entry of a resource's `_meta.links` array.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MetaLink {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// Envelope of every paged hub listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedItems<T> {
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub items: Vec<T>,
}

/// One BOM entry of a project version.
///
/// Both the flat components listing and the hierarchical listing
/// deserialize into this type; the hierarchical variant additionally
/// carries a `children` link in its `_meta` block.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BomComponent {
    pub component_name: String,
    pub component_version_name: Option<String>,
    /// API URL of the component version; the unique handle for this entry.
    pub component_version: Option<String>,
    /// API URL of the component itself.
    pub component: Option<String>,
    pub component_type: Option<String>,
    pub description: Option<String>,
    pub ignored: bool,
    pub match_types: Vec<String>,
    pub origins: Vec<ComponentOrigin>,
    pub licenses: Vec<LicenseGroup>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl BomComponent {
    /// "name/version" label used in progress and trace output.
    pub fn display_name(&self) -> String {
        match &self.component_version_name {
            Some(version) => format!("{}/{}", self.component_name, version),
            None => format!("{}/?", self.component_name),
        }
    }

    /// The component version URL, or `None` for entries with no assigned
    /// version (those are skipped during the walk).
    pub fn version_key(&self) -> Option<&str> {
        self.component_version.as_deref()
    }

    pub fn is_custom(&self) -> bool {
        self.component_type.as_deref() == Some("CUSTOM_COMPONENT")
    }

    pub fn is_sub_project(&self) -> bool {
        self.component_type.as_deref() == Some("SUB_PROJECT")
    }

    pub fn first_origin(&self) -> Option<&ComponentOrigin> {
        self.origins.first()
    }

    /// purl derived from the first origin, when that origin's namespace
    /// maps onto a known package type.
    pub fn purl(&self) -> Option<String> {
        self.first_origin().and_then(ComponentOrigin::purl)
    }
}

/// Origin (forge match) of a BOM component.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentOrigin {
    pub external_namespace: Option<String>,
    pub external_id: Option<String>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl ComponentOrigin {
    pub fn purl(&self) -> Option<String> {
        match (&self.external_namespace, &self.external_id) {
            (Some(namespace), Some(id)) => purl_for_origin(namespace, id),
            _ => None,
        }
    }
}

/// One node of the license structure reported for a BOM component.
///
/// The server reports either a single license or a group whose nested
/// `licenses` list is combined conjunctively or disjunctively per
/// `license_type`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseGroup {
    pub license_display: Option<String>,
    pub spdx_id: Option<String>,
    /// API URL of the license resource, used for text retrieval on
    /// custom licenses.
    pub license: Option<String>,
    pub license_type: Option<String>,
    pub licenses: Vec<LicenseGroup>,
}

/// A project in the hub catalog.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// A version of a hub project.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectVersion {
    pub version_name: String,
    pub license: Option<VersionLicense>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

/// Aggregate license of a project version.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionLicense {
    pub license_display: Option<String>,
}
