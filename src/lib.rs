//! hub-spdx - SPDX export tool for hub project versions
//!
//! This library turns the Bill of Materials of a project version on an
//! SCA hub server into an SPDX 2.2 document, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_export`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use hub_spdx::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let hub = HubClient::connect(
//!     "https://hub.example.com",
//!     "my-api-token",
//!     false,
//!     Duration::from_secs(15),
//! )
//! .await?;
//! let enrichment = CachingEnrichmentRepository::new(hub.clone());
//! let download_locator = OpenHubLocator::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ExportDocumentUseCase::new(
//!     hub,
//!     enrichment,
//!     download_locator,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ExportRequest::new("My Project", "1.0");
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_export;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TagValueFormatter};
    pub use crate::adapters::outbound::network::{
        CachingEnrichmentRepository, HubClient, OpenHubLocator,
    };
    pub use crate::application::dto::{ExportRequest, ExportResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ExportDocumentUseCase;
    pub use crate::bom_export::domain::component::{
        BomComponent, ComponentOrigin, LicenseGroup, Meta, MetaLink, Project, ProjectVersion,
    };
    pub use crate::bom_export::domain::document::{
        ExternalRef, ExtractedLicense, SpdxAnnotation, SpdxDocument, SpdxPackage,
        SpdxRelationship,
    };
    pub use crate::bom_export::domain::enrichment::{
        ComponentEnrichment, FetchOutcome, LicenseResolution,
    };
    pub use crate::bom_export::domain::identifier::default_output_stem;
    pub use crate::ports::outbound::{
        DocumentFormatter, DownloadLocator, EnrichmentRepository, OutputPresenter,
        ProgressReporter, ProjectCatalog,
    };
    pub use crate::shared::Result;
}
