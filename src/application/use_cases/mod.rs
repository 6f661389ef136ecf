/// Use cases module containing application business logic orchestration
mod export_document;

pub use export_document::ExportDocumentUseCase;
