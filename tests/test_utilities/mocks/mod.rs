/// Mock implementations for testing
mod mock_download_locator;
mod mock_enrichment_repository;
mod mock_progress_reporter;
mod mock_project_catalog;

pub use mock_download_locator::MockDownloadLocator;
pub use mock_enrichment_repository::MockEnrichmentRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_catalog::MockProjectCatalog;
