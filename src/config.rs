//! Connection settings for the hub server.
//!
//! Settings come from command line options first and environment
//! variables second (`HUB_URL`, `HUB_API_TOKEN`,
//! `EXCLUDE_IGNORED_COMPONENTS`). The URL and token are required; the
//! export refuses to start without them.

use std::time::Duration;

use crate::cli::Args;
use crate::shared::error::ExportError;
use crate::shared::Result;

pub const HUB_URL_VAR: &str = "HUB_URL";
pub const API_TOKEN_VAR: &str = "HUB_API_TOKEN";
pub const EXCLUDE_IGNORED_VAR: &str = "EXCLUDE_IGNORED_COMPONENTS";

/// Resolved connection settings for one export run.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub hub_url: String,
    pub api_token: String,
    pub trust_cert: bool,
    pub timeout: Duration,
    /// True when ignored BOM entries are left out of the export.
    pub exclude_ignored: bool,
}

impl HubConfig {
    /// Resolves the configuration from arguments and the process environment
    ///
    /// # Errors
    /// Returns `ExportError::MissingHubUrl`, `ExportError::MissingApiToken`
    /// or `ExportError::InvalidHubUrl` when the settings are absent or
    /// unusable
    pub fn resolve(args: &Args) -> Result<Self> {
        Self::resolve_with(args, |name| std::env::var(name).ok())
    }

    /// Same as [`HubConfig::resolve`] with an explicit environment
    /// lookup, so tests do not touch the process environment
    pub fn resolve_with<F>(args: &Args, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hub_url = args
            .hub_url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| env(HUB_URL_VAR).filter(|url| !url.is_empty()))
            .ok_or(ExportError::MissingHubUrl)?;
        validate_hub_url(&hub_url)?;

        let api_token = args
            .api_token
            .clone()
            .filter(|token| !token.is_empty())
            .or_else(|| env(API_TOKEN_VAR).filter(|token| !token.is_empty()))
            .ok_or(ExportError::MissingApiToken)?;

        let exclude_ignored = args.exclude_ignored_components
            || env(EXCLUDE_IGNORED_VAR).is_some_and(|value| !value.is_empty());

        Ok(HubConfig {
            hub_url,
            api_token,
            trust_cert: args.trust_cert,
            timeout: Duration::from_secs(args.timeout),
            exclude_ignored,
        })
    }
}

/// Rejects URLs the HTTP client could not talk to anyway.
fn validate_hub_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ExportError::InvalidHubUrl {
            url: url.to_string(),
            reason: "unsupported URL scheme".to_string(),
        }
        .into())
    }
}
