use crate::ports::outbound::DownloadLocator;
use crate::shared::Result;
use anyhow::bail;
use async_trait::async_trait;
use std::time::Duration;

const OPENHUB_BASE: &str = "https://openhub.net";
const OPENHUB_TIMEOUT: Duration = Duration::from_secs(15);

/// OpenHubLocator resolves package download locations from openhub.net
///
/// The hub knowledge base links components to their OpenHub project
/// page. OpenHub itself publishes no API for code locations, so this
/// adapter scans two pages: the project page for the "Code Locations:"
/// link, and the enlistments page behind it for the first repository
/// URL.
pub struct OpenHubLocator {
    client: reqwest::Client,
}

impl OpenHubLocator {
    /// Creates a locator with its own unauthenticated HTTP client
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(OPENHUB_TIMEOUT)
            .user_agent(format!("hub-spdx/{}", version))
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!(
                "OpenHub request failed: {} (status code {})",
                url,
                response.status()
            );
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl DownloadLocator for OpenHubLocator {
    async fn locate_download(&self, openhub_url: &str) -> Result<Option<String>> {
        let page = self.fetch_page(openhub_url).await?;
        let Some(path) = extract_enlistments_path(&page) else {
            return Ok(None);
        };

        let enlist_url = format!("{}{}", OPENHUB_BASE, path);
        let enlist_page = self.fetch_page(&enlist_url).await?;
        Ok(extract_first_location(&enlist_page).filter(|location| has_allowed_scheme(location)))
    }
}

/// Finds the href of the "Code Locations:" anchor in the sidebar,
/// which only counts when it appears after the "Project Links:"
/// heading anchor.
fn extract_enlistments_path(page: &str) -> Option<&str> {
    let links_start = page.find("Project Links:")?;
    let after_links = &page[links_start..];
    let anchor_end = after_links.find("Code Locations:</a>")?;
    let before_anchor = &after_links[..anchor_end];
    let href_start = before_anchor.rfind("href=\"")? + "href=\"".len();
    let href = &before_anchor[href_start..];
    let href_end = href.find('"')?;
    let path = &href[..href_end];
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

/// First whitespace-delimited token of the first table cell of the
/// enlistments listing.
fn extract_first_location(page: &str) -> Option<String> {
    let tbody_start = page.find("<tbody")?;
    let tbody = &page[tbody_start..];
    let td_start = tbody.find("<td")?;
    let td = &tbody[td_start..];
    let text_start = td.find('>')? + 1;
    let cell = &td[text_start..];
    let text_end = cell.find('<')?;
    cell[..text_end]
        .split_whitespace()
        .next()
        .map(str::to_string)
}

fn has_allowed_scheme(url: &str) -> bool {
    match url.split_once("://") {
        Some((scheme, _)) => matches!(scheme, "https" | "http" | "git"),
        None => false,
    }
}
