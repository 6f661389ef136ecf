use std::collections::HashMap;

use hub_spdx::prelude::*;

/// Mock DownloadLocator resolving OpenHub page URLs from a fixed map.
pub struct MockDownloadLocator {
    locations: HashMap<String, String>,
    should_fail: bool,
}

impl MockDownloadLocator {
    pub fn new() -> Self {
        Self {
            locations: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_location(mut self, openhub_url: &str, download_url: &str) -> Self {
        self.locations
            .insert(openhub_url.to_string(), download_url.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            locations: HashMap::new(),
            should_fail: true,
        }
    }
}

impl Default for MockDownloadLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DownloadLocator for MockDownloadLocator {
    async fn locate_download(&self, openhub_url: &str) -> Result<Option<String>> {
        if self.should_fail {
            anyhow::bail!("Mock OpenHub failure");
        }
        Ok(self.locations.get(openhub_url).cloned())
    }
}
