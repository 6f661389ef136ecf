use crate::bom_export::domain::document::SpdxDocument;

/// ExportResponse - Internal response DTO from the SPDX export use case
///
/// This DTO contains the assembled document, which adapters then
/// format into the appropriate output form.
#[derive(Debug, Clone)]
pub struct ExportResponse {
    /// The assembled SPDX document
    pub document: SpdxDocument,
    /// Number of component packages emitted (the project root package
    /// is not counted)
    pub component_count: usize,
}

impl ExportResponse {
    pub fn new(document: SpdxDocument, component_count: usize) -> Self {
        Self {
            document,
            component_count,
        }
    }
}
