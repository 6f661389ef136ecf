use crate::bom_export::domain::document::{SpdxDocument, SpdxPackage, NOASSERTION};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// TagValueFormatter adapter for generating SPDX 2.2 tag-value output
///
/// This adapter implements the DocumentFormatter port for the
/// tag-value form. It walks the same document model the JSON
/// formatter serializes; free-text values are wrapped in
/// `<text>...</text>` and external reference categories use the
/// hyphenated spelling the tag-value syntax expects
/// (`PACKAGE-MANAGER` rather than the JSON schema's
/// `PACKAGE_MANAGER`).
pub struct TagValueFormatter;

impl TagValueFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for TagValueFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        let mut lines = Vec::new();
        self.write_header(document, &mut lines);
        self.write_relationships(document, &mut lines);
        for package in &document.packages {
            self.write_package(document, package, &mut lines);
        }
        self.write_extracted_licenses(document, &mut lines);
        lines.push(String::new());
        Ok(lines.join("\n"))
    }
}

impl TagValueFormatter {
    fn write_header(&self, document: &SpdxDocument, lines: &mut Vec<String>) {
        lines.push(format!("SPDXVersion: {}", document.spdx_version));
        lines.push(format!("DataLicense: {}", document.data_license));
        lines.push(format!("SPDXID: {}", document.spdx_id));
        lines.push(format!("DocumentName: {}", document.name));
        lines.push(format!("DocumentNamespace: {}", document.document_namespace));
        if let Some(comment) = &document.creation_info.comment {
            lines.push(format!("DocumentComment: {}", text_value(comment)));
        }
        lines.push(String::new());
        lines.push("## Creation Information".to_string());
        for creator in &document.creation_info.creators {
            lines.push(format!("Creator: {}", creator));
        }
        lines.push(format!("Created: {}", document.creation_info.created));
        lines.push(format!(
            "LicenseListVersion: {}",
            document.creation_info.license_list_version
        ));
    }

    fn write_relationships(&self, document: &SpdxDocument, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push("## Relationships".to_string());
        for relationship in &document.relationships {
            lines.push(format!(
                "Relationship: {} {} {}",
                relationship.spdx_element_id,
                relationship.relationship_type,
                relationship.related_spdx_element
            ));
        }
    }

    fn write_package(
        &self,
        document: &SpdxDocument,
        package: &SpdxPackage,
        lines: &mut Vec<String>,
    ) {
        lines.push(String::new());
        if document.document_describes.contains(&package.spdx_id) {
            lines.push("## Project package".to_string());
        } else {
            lines.push("## Project component".to_string());
        }
        lines.push(format!("PackageName: {}", package.name));
        lines.push(format!("SPDXID: {}", package.spdx_id));
        lines.push(format!("PackageVersion: {}", package.version_info));
        if let Some(file_name) = &package.package_file_name {
            lines.push(format!("PackageFileName: {}", file_name));
        }
        lines.push(format!("PackageSupplier: {}", package.supplier));
        lines.push(format!(
            "PackageDownloadLocation: {}",
            package.download_location
        ));
        lines.push(format!("FilesAnalyzed: {}", package.files_analyzed));
        if let Some(homepage) = &package.homepage {
            lines.push(format!("PackageHomePage: {}", homepage));
        }
        lines.push(format!(
            "PackageLicenseConcluded: {}",
            package.license_concluded
        ));
        lines.push(format!(
            "PackageLicenseDeclared: {}",
            package.license_declared
        ));
        if let Some(comments) = &package.license_comments {
            lines.push(format!("PackageLicenseComments: {}", text_value(comments)));
        }
        lines.push(format!(
            "PackageCopyrightText: {}",
            text_value(&package.copyright_text)
        ));
        if let Some(description) = &package.description {
            lines.push(format!("PackageDescription: {}", text_value(description)));
        }
        if let Some(comment) = &package.comment {
            lines.push(format!("PackageComment: {}", text_value(comment)));
        }
        for external_ref in &package.external_refs {
            lines.push(format!(
                "ExternalRef: {} {} {}",
                tag_value_category(&external_ref.reference_category),
                external_ref.reference_type,
                external_ref.reference_locator
            ));
        }
        for annotation in &package.annotations {
            lines.push(format!("Annotator: {}", annotation.annotator));
            lines.push(format!("AnnotationDate: {}", annotation.annotation_date));
            lines.push(format!("AnnotationType: {}", annotation.annotation_type));
            lines.push(format!("SPDXREF: {}", package.spdx_id));
            lines.push(format!(
                "AnnotationComment: {}",
                text_value(&annotation.comment)
            ));
        }
    }

    fn write_extracted_licenses(&self, document: &SpdxDocument, lines: &mut Vec<String>) {
        if document.has_extracted_licensing_infos.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push("## Custom Licenses".to_string());
        for license in &document.has_extracted_licensing_infos {
            lines.push(String::new());
            lines.push(format!("LicenseID: {}", license.license_id));
            lines.push(format!(
                "ExtractedText: <text>{}</text>",
                license.extracted_text
            ));
        }
    }
}

/// Free-text values are wrapped so multi-line content (copyright
/// blocks, descriptions) stays a single tag-value field. NOASSERTION
/// is a keyword and stays bare.
fn text_value(value: &str) -> String {
    if value == NOASSERTION {
        value.to_string()
    } else {
        format!("<text>{}</text>", value)
    }
}

fn tag_value_category(category: &str) -> String {
    category.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_export::domain::component::{Project, ProjectVersion};
    use crate::bom_export::domain::document::{
        ExternalRef, ExtractedLicense, SpdxAnnotation, DOCUMENT_REF,
    };

    fn test_document() -> SpdxDocument {
        let project: Project = serde_json::from_value(serde_json::json!({
            "name": "Demo",
            "description": "A demo project",
            "_meta": { "href": "https://hub.example.com/api/projects/p1" }
        }))
        .unwrap();
        let version: ProjectVersion = serde_json::from_value(serde_json::json!({
            "versionName": "1.0",
            "_meta": { "href": "https://hub.example.com/api/projects/p1/versions/v1" }
        }))
        .unwrap();

        let root_id = "SPDXRef-Package-Demo-10";
        let mut document = SpdxDocument::new(&project, &version, root_id);
        document.add_package(SpdxPackage::project_root(&project, &version, root_id));
        document.add_relationship(DOCUMENT_REF, "DESCRIBES", root_id);
        document
    }

    fn component_package() -> SpdxPackage {
        SpdxPackage {
            spdx_id: "SPDXRef-Package-libfoo-210".to_string(),
            name: "libfoo".to_string(),
            version_info: "2.1.0".to_string(),
            package_file_name: Some("libs/libfoo-2.1.0.jar".to_string()),
            description: Some("A foo library".to_string()),
            download_location: "https://github.com/example/libfoo.git".to_string(),
            homepage: Some("https://libfoo.example.com".to_string()),
            license_concluded: "Apache-2.0".to_string(),
            license_declared: "Apache-2.0".to_string(),
            license_comments: Some(
                "The concluded license was taken from the package level".to_string(),
            ),
            supplier: "Organization: npmjs".to_string(),
            files_analyzed: false,
            comment: Some("This is an open source component".to_string()),
            copyright_text: "Copyright 2020 Example\nCopyright 2021 Other".to_string(),
            annotations: vec![SpdxAnnotation {
                annotation_date: "2024-01-01T00:00:00Z".to_string(),
                annotation_type: "OTHER".to_string(),
                annotator: "Person: dev@example.com".to_string(),
                comment: "Reviewed".to_string(),
            }],
            external_refs: vec![ExternalRef::purl("pkg:npm/libfoo@2.1.0")],
        }
    }

    #[test]
    fn test_header_lines_in_order() {
        let formatter = TagValueFormatter::new();
        let output = formatter.format(&test_document()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "SPDXVersion: SPDX-2.2");
        assert_eq!(lines[1], "DataLicense: CC0-1.0");
        assert_eq!(lines[2], "SPDXID: SPDXRef-DOCUMENT");
        assert_eq!(lines[3], "DocumentName: Demo/1.0");
        assert_eq!(
            lines[4],
            "DocumentNamespace: https://hub.example.com/api/projects/p1/versions/v1"
        );
        assert_eq!(lines[5], "DocumentComment: <text>A demo project</text>");
        assert!(output.contains("## Creation Information"));
        assert!(output.contains("LicenseListVersion: 3.9"));
    }

    #[test]
    fn test_relationship_lines() {
        let formatter = TagValueFormatter::new();
        let output = formatter.format(&test_document()).unwrap();
        assert!(output.contains(
            "Relationship: SPDXRef-DOCUMENT DESCRIBES SPDXRef-Package-Demo-10"
        ));
    }

    #[test]
    fn test_root_package_block() {
        let formatter = TagValueFormatter::new();
        let output = formatter.format(&test_document()).unwrap();

        assert!(output.contains("## Project package"));
        assert!(output.contains("PackageName: Demo"));
        assert!(output.contains("SPDXID: SPDXRef-Package-Demo-10"));
        assert!(output.contains("PackageVersion: 1.0"));
        assert!(output.contains("FilesAnalyzed: false"));
        // NOASSERTION stays bare, never text-wrapped
        assert!(output.contains("PackageCopyrightText: NOASSERTION"));
        assert!(!output.contains("<text>NOASSERTION</text>"));
    }

    #[test]
    fn test_component_package_block() {
        let mut document = test_document();
        let package = component_package();
        document.add_relationship("SPDXRef-Package-Demo-10", "DEPENDS_ON", &package.spdx_id);
        document.add_package(package);

        let formatter = TagValueFormatter::new();
        let output = formatter.format(&document).unwrap();

        assert!(output.contains("## Project component"));
        assert!(output.contains("PackageFileName: libs/libfoo-2.1.0.jar"));
        assert!(output.contains("PackageSupplier: Organization: npmjs"));
        assert!(output.contains("PackageHomePage: https://libfoo.example.com"));
        assert!(output.contains(
            "PackageLicenseComments: <text>The concluded license was taken from the package level</text>"
        ));
        assert!(output.contains(
            "PackageCopyrightText: <text>Copyright 2020 Example\nCopyright 2021 Other</text>"
        ));
        assert!(output.contains("ExternalRef: PACKAGE-MANAGER purl pkg:npm/libfoo@2.1.0"));
        assert!(output.contains("Annotator: Person: dev@example.com"));
        assert!(output.contains("SPDXREF: SPDXRef-Package-libfoo-210"));
        assert!(output.contains("AnnotationComment: <text>Reviewed</text>"));
    }

    #[test]
    fn test_extracted_license_block() {
        let mut document = test_document();
        document.add_extracted_license(ExtractedLicense {
            license_id: "LicenseRef-CustomLicense-libfoo".to_string(),
            extracted_text: "Custom license text".to_string(),
        });

        let formatter = TagValueFormatter::new();
        let output = formatter.format(&document).unwrap();

        assert!(output.contains("## Custom Licenses"));
        assert!(output.contains("LicenseID: LicenseRef-CustomLicense-libfoo"));
        assert!(output.contains("ExtractedText: <text>Custom license text</text>"));
    }

    #[test]
    fn test_no_custom_license_section_without_extracted_texts() {
        let formatter = TagValueFormatter::new();
        let output = formatter.format(&test_document()).unwrap();
        assert!(!output.contains("## Custom Licenses"));
    }

    #[test]
    fn test_output_ends_with_newline() {
        let formatter = TagValueFormatter::new();
        let output = formatter.format(&test_document()).unwrap();
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_tag_value_category_hyphenation() {
        assert_eq!(tag_value_category("PACKAGE_MANAGER"), "PACKAGE-MANAGER");
        assert_eq!(tag_value_category("OTHER"), "OTHER");
    }
}
