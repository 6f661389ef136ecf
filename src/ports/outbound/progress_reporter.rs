/// ProgressReporter port for operator feedback during the export
///
/// This port abstracts progress reporting (e.g., to stderr) while the
/// BOM is walked and enrichment batches run. Reporting is fire and
/// forget; a reporter failure never affects the export itself.
pub trait ProgressReporter {
    /// Reports a status message, such as the start of an export phase
    ///
    /// # Arguments
    /// * `message` - The status message to report
    fn report(&self, message: &str);

    /// Reports progress through a batch of known size
    ///
    /// # Arguments
    /// * `current` - Number of completed items
    /// * `total` - Total number of items in the batch
    /// * `message` - Optional label for the current item or phase
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error without aborting the export
    ///
    /// # Arguments
    /// * `message` - The warning/error message
    fn report_error(&self, message: &str);

    /// Reports completion of a phase or of the whole export
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
