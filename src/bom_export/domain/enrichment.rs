//! Per-component enrichment data and fetch outcomes.
//!
//! Six independent lookups run for every BOM component (copyrights,
//! review comments, matched archive file, license resolution, homepage,
//! supplier). Any of them can legitimately find nothing, and any of
//! them can fail; a failure never aborts the export, it just leaves the
//! corresponding SPDX field at its NOASSERTION default and is reported
//! as a warning.

use crate::shared::Result;

use super::document::{ExtractedLicense, SpdxAnnotation, NOASSERTION};

/// Result of one enrichment lookup.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    /// The lookup succeeded and returned data.
    Found(T),
    /// The lookup succeeded but the server has nothing for this
    /// component (no origin, no link, empty listing).
    Missing,
    /// The lookup failed; the reason is reported as a warning.
    Failed { reason: String },
}

impl<T> Default for FetchOutcome<T> {
    fn default() -> Self {
        FetchOutcome::Missing
    }
}

impl<T> FetchOutcome<T> {
    /// Fold a fetch result into an outcome: `Ok(Some(_))` is `Found`,
    /// `Ok(None)` is `Missing`, `Err(_)` is `Failed`.
    pub fn from_result(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => FetchOutcome::Found(value),
            Ok(None) => FetchOutcome::Missing,
            Err(e) => FetchOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            FetchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Combined license expression for a component plus the texts of any
/// licenses that are not on the SPDX license list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseResolution {
    pub expression: String,
    pub extracted: Vec<ExtractedLicense>,
}

/// Everything fetched for one component version, with accessors that
/// apply the per-kind defaults used during package emission.
#[derive(Debug, Clone, Default)]
pub struct ComponentEnrichment {
    pub copyrights: FetchOutcome<String>,
    pub annotations: FetchOutcome<Vec<SpdxAnnotation>>,
    pub matched_file: FetchOutcome<String>,
    pub licenses: FetchOutcome<LicenseResolution>,
    pub homepage: FetchOutcome<String>,
    pub supplier: FetchOutcome<String>,
}

impl ComponentEnrichment {
    pub fn copyright_text(&self) -> &str {
        self.copyrights
            .found()
            .map(String::as_str)
            .unwrap_or(NOASSERTION)
    }

    pub fn annotations(&self) -> &[SpdxAnnotation] {
        self.annotations
            .found()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn matched_file(&self) -> &str {
        self.matched_file
            .found()
            .map(String::as_str)
            .unwrap_or(NOASSERTION)
    }

    pub fn license_expression(&self) -> &str {
        self.licenses
            .found()
            .map(|resolution| resolution.expression.as_str())
            .unwrap_or(NOASSERTION)
    }

    pub fn extracted_licenses(&self) -> &[ExtractedLicense] {
        self.licenses
            .found()
            .map(|resolution| resolution.extracted.as_slice())
            .unwrap_or_default()
    }

    pub fn homepage(&self) -> &str {
        self.homepage
            .found()
            .map(String::as_str)
            .unwrap_or(NOASSERTION)
    }

    /// Supplier from the BOM-level custom field, when one was set.
    pub fn supplier(&self) -> Option<&str> {
        self.supplier.found().map(String::as_str)
    }

    /// Labels and reasons of every failed lookup, for warning output.
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        let mut failures = Vec::new();
        if let Some(reason) = self.copyrights.failure() {
            failures.push(("copyrights", reason));
        }
        if let Some(reason) = self.annotations.failure() {
            failures.push(("comments", reason));
        }
        if let Some(reason) = self.matched_file.failure() {
            failures.push(("matched files", reason));
        }
        if let Some(reason) = self.licenses.failure() {
            failures.push(("licenses", reason));
        }
        if let Some(reason) = self.homepage.failure() {
            failures.push(("homepage", reason));
        }
        if let Some(reason) = self.supplier.failure() {
            failures.push(("supplier", reason));
        }
        failures
    }
}
