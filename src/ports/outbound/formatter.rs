use crate::bom_export::domain::document::SpdxDocument;
use crate::shared::Result;

/// DocumentFormatter port for rendering the finished document
///
/// This port abstracts the serialization format (SPDX JSON or SPDX
/// tag-value) applied to an assembled document.
pub trait DocumentFormatter {
    /// Renders the document in this formatter's output format
    ///
    /// # Arguments
    /// * `document` - The fully assembled SPDX document
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument) -> Result<String>;
}
