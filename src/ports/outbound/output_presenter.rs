use crate::shared::Result;

/// OutputPresenter port for delivering the rendered document
///
/// This port abstracts the output destination (a file with rotation of
/// older outputs, or stdout) that receives the rendered SPDX document.
pub trait OutputPresenter {
    /// Presents the rendered document to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered SPDX document
    ///
    /// # Returns
    /// Success or error if presentation fails
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - All rotation names for an existing output file are taken
    fn present(&self, content: &str) -> Result<()>;
}
