/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_request;
mod export_response;
mod output_format;

pub use export_request::ExportRequest;
pub use export_response::ExportResponse;
pub use output_format::OutputFormat;
