use crate::bom_export::domain::document::SpdxDocument;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for generating SPDX 2.2 JSON output
///
/// This adapter implements the DocumentFormatter port for the JSON
/// form. The serde attributes on the document model already produce
/// the schema's field spellings, so formatting is plain pretty
/// serialization.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        serde_json::to_string_pretty(document).map_err(Into::into)
    }
}
