use crate::adapters::outbound::formatters::{JsonFormatter, TagValueFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating SPDX document formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    ///
    /// # Returns
    /// A boxed DocumentFormatter trait object appropriate for the specified format
    ///
    /// # Examples
    /// ```
    /// use hub_spdx::application::dto::OutputFormat;
    /// use hub_spdx::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::TagValue => Box::new(TagValueFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format
    ///
    /// # Returns
    /// A static string containing the progress message to display
    ///
    /// # Examples
    /// ```
    /// use hub_spdx::application::dto::OutputFormat;
    /// use hub_spdx::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating SPDX JSON format output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating SPDX JSON format output...",
            OutputFormat::TagValue => "📝 Generating SPDX tag-value format output...",
        }
    }
}
