/// Network adapters for external API calls
mod caching_hub_client;
mod hub_client;
mod openhub_client;

pub use caching_hub_client::CachingEnrichmentRepository;
pub use hub_client::HubClient;
pub use openhub_client::OpenHubLocator;
