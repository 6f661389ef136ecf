use crate::bom_export::domain::component::BomComponent;
use crate::bom_export::domain::document::SpdxAnnotation;
use crate::bom_export::domain::enrichment::LicenseResolution;
use crate::shared::Result;
use async_trait::async_trait;

/// EnrichmentRepository port for per-component lookups
///
/// Each method covers one enrichment kind fetched for every BOM
/// component: copyright statements, review comments, the matched
/// archive file, the license resolution, the component homepage and
/// the BOM-level supplier custom field.
///
/// Every method distinguishes "nothing there" (`Ok(None)`: no origin,
/// no link, empty listing) from a failed lookup (`Err`), so callers can
/// warn on failures without aborting the export.
///
/// # Async Support
/// All methods are async for concurrent batch fetching and must be
/// usable across tasks; implementations must be `Send + Sync`.
#[async_trait]
pub trait EnrichmentRepository: Send + Sync {
    /// Fetches the copyright statements of the component's first origin
    ///
    /// # Returns
    /// Active copyright first lines joined with newlines, or `None`
    /// when the component has no origin or no active copyrights
    async fn fetch_copyrights(&self, component: &BomComponent) -> Result<Option<String>>;

    /// Fetches BOM review comments as SPDX annotations
    async fn fetch_annotations(
        &self,
        component: &BomComponent,
    ) -> Result<Option<Vec<SpdxAnnotation>>>;

    /// Fetches the path of the first matched file when it is an archive
    ///
    /// # Returns
    /// The archive path, or `None` when nothing was matched or the
    /// first match is not an archive
    async fn fetch_matched_file(&self, component: &BomComponent) -> Result<Option<String>>;

    /// Resolves the component's license expression, pulling the text of
    /// any custom licenses
    async fn fetch_licenses(&self, component: &BomComponent)
        -> Result<Option<LicenseResolution>>;

    /// Fetches the component's homepage URL from its catalog entry
    async fn fetch_homepage(&self, component: &BomComponent) -> Result<Option<String>>;

    /// Fetches the BOM-level `PackageSupplier` custom field value
    async fn fetch_supplier(&self, component: &BomComponent) -> Result<Option<String>>;
}
