//! SPDX 2.2 document model.
//!
//! The structs serialize straight to the SPDX 2.2 JSON schema via serde
//! (camelCase field names, `SPDXID` and `licenseId` spelled the way the
//! schema spells them); the tag-value formatter walks the same
//! structures. Packages, relationships and extracted licenses keep
//! insertion order so output is reproducible for a given BOM.

use chrono::Utc;
use serde::Serialize;

use super::component::{Project, ProjectVersion};
use super::identifier::strip_quotes;

/// Value used wherever the exporter can make no assertion.
pub const NOASSERTION: &str = "NOASSERTION";

/// SPDX license list version the generated documents reference.
pub const LICENSE_LIST_VERSION: &str = "3.9";

/// Identifier of the document itself.
pub const DOCUMENT_REF: &str = "SPDXRef-DOCUMENT";

/// UTC timestamp in the second-precision form the SPDX schema requires
/// (no fractional seconds).
pub fn spdx_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// A complete SPDX 2.2 document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxDocument {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub spdx_version: String,
    pub creation_info: CreationInfo,
    pub name: String,
    pub data_license: String,
    pub document_describes: Vec<String>,
    pub document_namespace: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
    pub packages: Vec<SpdxPackage>,
    pub relationships: Vec<SpdxRelationship>,
    pub snippets: Vec<SpdxSnippet>,
    pub has_extracted_licensing_infos: Vec<ExtractedLicense>,
}

impl SpdxDocument {
    /// Start a document for a project version.
    ///
    /// The document namespace is the version's API href (stable and
    /// unique per version), the document comment carries the project
    /// description, and two external references link back to the
    /// project and version resources on the hub.
    pub fn new(project: &Project, version: &ProjectVersion, root_package_id: &str) -> Self {
        SpdxDocument {
            spdx_id: DOCUMENT_REF.to_string(),
            spdx_version: "SPDX-2.2".to_string(),
            creation_info: CreationInfo {
                created: spdx_timestamp(),
                creators: vec![format!(
                    "Tool: {}/{}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                )],
                license_list_version: LICENSE_LIST_VERSION.to_string(),
                comment: project.description.as_deref().map(strip_quotes),
            },
            name: strip_quotes(&format!("{}/{}", project.name, version.version_name)),
            data_license: "CC0-1.0".to_string(),
            document_describes: vec![root_package_id.to_string()],
            document_namespace: version.meta.href.clone(),
            external_refs: vec![
                ExternalRef::other("Hub-Project", &project.meta.href),
                ExternalRef::other("Hub-Project-Version", &version.meta.href),
            ],
            packages: Vec::new(),
            relationships: Vec::new(),
            snippets: Vec::new(),
            has_extracted_licensing_infos: Vec::new(),
        }
    }

    pub fn add_package(&mut self, package: SpdxPackage) {
        self.packages.push(package);
    }

    /// Record `element VERB related`, e.g.
    /// `SPDXRef-Package-a DEPENDS_ON SPDXRef-Package-b`.
    pub fn add_relationship(&mut self, element: &str, relationship_type: &str, related: &str) {
        self.relationships.push(SpdxRelationship {
            spdx_element_id: strip_quotes(element),
            relationship_type: strip_quotes(relationship_type),
            related_spdx_element: strip_quotes(related),
        });
    }

    pub fn add_extracted_license(&mut self, license: ExtractedLicense) {
        self.has_extracted_licensing_infos.push(license);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    pub created: String,
    pub creators: Vec<String>,
    pub license_list_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One package entry of the document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub version_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub download_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub license_concluded: String,
    pub license_declared: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_comments: Option<String>,
    pub supplier: String,
    pub files_analyzed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub copyright_text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<SpdxAnnotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
}

impl SpdxPackage {
    /// The top-level package standing in for the project version itself.
    ///
    /// Declared license comes from the version's aggregate license
    /// display; the hub reports "Unknown License" when none was set,
    /// which maps to NOASSERTION.
    pub fn project_root(project: &Project, version: &ProjectVersion, spdx_id: &str) -> Self {
        let license_declared = version
            .license
            .as_ref()
            .and_then(|l| l.license_display.as_deref())
            .filter(|display| *display != "Unknown License")
            .map(strip_quotes)
            .unwrap_or_else(|| NOASSERTION.to_string());

        SpdxPackage {
            spdx_id: strip_quotes(spdx_id),
            name: strip_quotes(&project.name),
            version_info: strip_quotes(&version.version_name),
            package_file_name: None,
            description: project.description.as_deref().map(strip_quotes),
            download_location: NOASSERTION.to_string(),
            homepage: None,
            license_concluded: NOASSERTION.to_string(),
            license_declared,
            license_comments: None,
            supplier: NOASSERTION.to_string(),
            files_analyzed: false,
            comment: Some(format!(
                "Generated top level package representing the {} project version",
                project.name
            )),
            copyright_text: NOASSERTION.to_string(),
            annotations: Vec::new(),
            external_refs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxRelationship {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
}

/// Review annotation attached to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpdxAnnotation {
    pub annotation_date: String,
    pub annotation_type: String,
    pub annotator: String,
    pub comment: String,
}

/// Snippet entries are part of the SPDX 2.2 shape but the hub BOM has
/// no file-level data to fill them with; the list stays empty.
#[derive(Debug, Clone, Serialize)]
pub struct SpdxSnippet {}

/// Text of a license that is not on the SPDX license list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLicense {
    pub license_id: String,
    pub extracted_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

impl ExternalRef {
    pub fn new(category: &str, reference_type: &str, locator: &str) -> Self {
        ExternalRef {
            reference_category: category.to_string(),
            reference_type: reference_type.to_string(),
            reference_locator: locator.to_string(),
        }
    }

    /// Shorthand for the `OTHER`-category references used for hub and
    /// OpenHub backlinks.
    pub fn other(reference_type: &str, locator: &str) -> Self {
        ExternalRef::new("OTHER", reference_type, locator)
    }

    pub fn purl(locator: &str) -> Self {
        ExternalRef::new("PACKAGE_MANAGER", "purl", locator)
    }
}
