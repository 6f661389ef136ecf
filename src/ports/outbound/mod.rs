/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (hub server, OpenHub, file
/// system, console).
pub mod download_locator;
pub mod enrichment_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_catalog;

pub use download_locator::DownloadLocator;
pub use enrichment_repository::EnrichmentRepository;
pub use formatter::DocumentFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_catalog::ProjectCatalog;
