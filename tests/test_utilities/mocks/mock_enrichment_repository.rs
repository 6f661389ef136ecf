use std::collections::HashMap;

use hub_spdx::prelude::*;

/// Mock EnrichmentRepository with per-component canned data.
///
/// Data is keyed by component name; components without an entry get
/// `Ok(None)` from every lookup, like a component the hub has no extra
/// data for.
pub struct MockEnrichmentRepository {
    copyrights: HashMap<String, String>,
    annotations: HashMap<String, Vec<SpdxAnnotation>>,
    matched_files: HashMap<String, String>,
    licenses: HashMap<String, LicenseResolution>,
    homepages: HashMap<String, String>,
    suppliers: HashMap<String, String>,
    should_fail: bool,
}

impl MockEnrichmentRepository {
    pub fn new() -> Self {
        Self {
            copyrights: HashMap::new(),
            annotations: HashMap::new(),
            matched_files: HashMap::new(),
            licenses: HashMap::new(),
            homepages: HashMap::new(),
            suppliers: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_copyright(mut self, component: &str, text: &str) -> Self {
        self.copyrights
            .insert(component.to_string(), text.to_string());
        self
    }

    pub fn with_annotation(mut self, component: &str, annotator: &str, comment: &str) -> Self {
        self.annotations
            .entry(component.to_string())
            .or_default()
            .push(SpdxAnnotation {
                annotation_date: "2020-06-01T12:00:00Z".to_string(),
                annotation_type: "OTHER".to_string(),
                annotator: format!("Person: {}", annotator),
                comment: comment.to_string(),
            });
        self
    }

    pub fn with_matched_file(mut self, component: &str, path: &str) -> Self {
        self.matched_files
            .insert(component.to_string(), path.to_string());
        self
    }

    pub fn with_license(mut self, component: &str, expression: &str) -> Self {
        self.licenses.insert(
            component.to_string(),
            LicenseResolution {
                expression: expression.to_string(),
                extracted: vec![],
            },
        );
        self
    }

    /// License resolution carrying the text of a custom license.
    pub fn with_custom_license(
        mut self,
        component: &str,
        expression: &str,
        license_id: &str,
        text: &str,
    ) -> Self {
        self.licenses.insert(
            component.to_string(),
            LicenseResolution {
                expression: expression.to_string(),
                extracted: vec![ExtractedLicense {
                    license_id: license_id.to_string(),
                    extracted_text: text.to_string(),
                }],
            },
        );
        self
    }

    pub fn with_homepage(mut self, component: &str, url: &str) -> Self {
        self.homepages
            .insert(component.to_string(), url.to_string());
        self
    }

    pub fn with_supplier(mut self, component: &str, supplier: &str) -> Self {
        self.suppliers
            .insert(component.to_string(), supplier.to_string());
        self
    }

    /// A repository whose every lookup fails, as when the hub server
    /// drops enrichment requests.
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    fn lookup<T: Clone>(
        &self,
        data: &HashMap<String, T>,
        component: &BomComponent,
    ) -> Result<Option<T>> {
        if self.should_fail {
            anyhow::bail!("Mock enrichment failure");
        }
        Ok(data.get(&component.component_name).cloned())
    }
}

impl Default for MockEnrichmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EnrichmentRepository for MockEnrichmentRepository {
    async fn fetch_copyrights(&self, component: &BomComponent) -> Result<Option<String>> {
        self.lookup(&self.copyrights, component)
    }

    async fn fetch_annotations(
        &self,
        component: &BomComponent,
    ) -> Result<Option<Vec<SpdxAnnotation>>> {
        self.lookup(&self.annotations, component)
    }

    async fn fetch_matched_file(&self, component: &BomComponent) -> Result<Option<String>> {
        self.lookup(&self.matched_files, component)
    }

    async fn fetch_licenses(
        &self,
        component: &BomComponent,
    ) -> Result<Option<LicenseResolution>> {
        self.lookup(&self.licenses, component)
    }

    async fn fetch_homepage(&self, component: &BomComponent) -> Result<Option<String>> {
        self.lookup(&self.homepages, component)
    }

    async fn fetch_supplier(&self, component: &BomComponent) -> Result<Option<String>> {
        self.lookup(&self.suppliers, component)
    }
}
