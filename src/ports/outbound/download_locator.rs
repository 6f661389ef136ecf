use crate::shared::Result;
use async_trait::async_trait;

/// DownloadLocator port for resolving package download locations
///
/// This port abstracts the external service (OpenHub) used to discover
/// where a component's source can be downloaded from. Discovery is
/// best-effort: a component without a discoverable location is normal
/// and maps to NOASSERTION, not an error.
#[async_trait]
pub trait DownloadLocator: Send + Sync {
    /// Locates the download URL behind a component's OpenHub page
    ///
    /// # Arguments
    /// * `openhub_url` - The component's `openhub` link from the BOM
    ///
    /// # Returns
    /// A download URL with an accepted scheme (http, https, git), or
    /// `None` when the page has no usable code location
    ///
    /// # Errors
    /// Returns an error if the page cannot be retrieved
    async fn locate_download(&self, openhub_url: &str) -> Result<Option<String>>;
}
