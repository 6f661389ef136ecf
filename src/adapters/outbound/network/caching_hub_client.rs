use crate::bom_export::domain::component::BomComponent;
use crate::bom_export::domain::document::SpdxAnnotation;
use crate::bom_export::domain::enrichment::LicenseResolution;
use crate::ports::outbound::EnrichmentRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingEnrichmentRepository wraps an EnrichmentRepository and adds
/// in-memory caching of license resolutions.
///
/// This adapter implements the decorator pattern. The same component
/// version appears many times across a hierarchical BOM, and license
/// resolution is the one enrichment that can fan out into further
/// text fetches, so it is cached keyed by the component version URL.
/// The remaining enrichments are fetched at most once per emitted
/// package and pass straight through.
///
/// # Architecture
/// In hexagonal architecture, caching is an implementation detail of
/// the adapter layer. The use case only cares about fetching
/// enrichment data - whether it comes from cache or API is
/// transparent to it.
pub struct CachingEnrichmentRepository<R: EnrichmentRepository> {
    inner: R,
    cache: Arc<DashMap<String, Option<LicenseResolution>>>,
}

impl<R: EnrichmentRepository> CachingEnrichmentRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: EnrichmentRepository> EnrichmentRepository for CachingEnrichmentRepository<R> {
    async fn fetch_copyrights(&self, component: &BomComponent) -> Result<Option<String>> {
        self.inner.fetch_copyrights(component).await
    }

    async fn fetch_annotations(
        &self,
        component: &BomComponent,
    ) -> Result<Option<Vec<SpdxAnnotation>>> {
        self.inner.fetch_annotations(component).await
    }

    async fn fetch_matched_file(&self, component: &BomComponent) -> Result<Option<String>> {
        self.inner.fetch_matched_file(component).await
    }

    async fn fetch_licenses(
        &self,
        component: &BomComponent,
    ) -> Result<Option<LicenseResolution>> {
        // Components without a version URL have no stable identity to
        // cache under
        let Some(key) = component.version_key() else {
            return self.inner.fetch_licenses(component).await;
        };

        // Check cache first
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached.clone());
        }

        // Cache miss: fetch from inner repository
        let resolution = self.inner.fetch_licenses(component).await?;

        // Store in cache
        self.cache.insert(key.to_string(), resolution.clone());

        Ok(resolution)
    }

    async fn fetch_homepage(&self, component: &BomComponent) -> Result<Option<String>> {
        self.inner.fetch_homepage(component).await
    }

    async fn fetch_supplier(&self, component: &BomComponent) -> Result<Option<String>> {
        self.inner.fetch_supplier(component).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock repository for testing that tracks call counts
    struct MockEnrichmentRepository {
        license_calls: AtomicUsize,
    }

    impl MockEnrichmentRepository {
        fn new() -> Self {
            Self {
                license_calls: AtomicUsize::new(0),
            }
        }

        fn license_call_count(&self) -> usize {
            self.license_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EnrichmentRepository for MockEnrichmentRepository {
        async fn fetch_copyrights(&self, _component: &BomComponent) -> Result<Option<String>> {
            Ok(None)
        }

        async fn fetch_annotations(
            &self,
            _component: &BomComponent,
        ) -> Result<Option<Vec<SpdxAnnotation>>> {
            Ok(None)
        }

        async fn fetch_matched_file(&self, _component: &BomComponent) -> Result<Option<String>> {
            Ok(None)
        }

        async fn fetch_licenses(
            &self,
            component: &BomComponent,
        ) -> Result<Option<LicenseResolution>> {
            self.license_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(LicenseResolution {
                expression: format!("{}-license", component.component_name),
                extracted: Vec::new(),
            }))
        }

        async fn fetch_homepage(&self, _component: &BomComponent) -> Result<Option<String>> {
            Ok(None)
        }

        async fn fetch_supplier(&self, _component: &BomComponent) -> Result<Option<String>> {
            Ok(None)
        }
    }

    fn component(name: &str, version_url: Option<&str>) -> BomComponent {
        let mut value = serde_json::json!({ "componentName": name });
        if let Some(url) = version_url {
            value["componentVersion"] = serde_json::Value::String(url.to_string());
        }
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_caching_repository_returns_cached_value() {
        let mock = MockEnrichmentRepository::new();
        let caching_repo = CachingEnrichmentRepository::new(mock);
        let comp = component("libfoo", Some("https://hub.example.com/versions/v1"));

        // First call - should hit the inner repository
        let result1 = caching_repo.fetch_licenses(&comp).await.unwrap();
        assert_eq!(result1.unwrap().expression, "libfoo-license");
        assert_eq!(caching_repo.inner.license_call_count(), 1);

        // Second call - should return cached value
        let result2 = caching_repo.fetch_licenses(&comp).await.unwrap();
        assert_eq!(result2.unwrap().expression, "libfoo-license");
        // Call count should still be 1 (cached)
        assert_eq!(caching_repo.inner.license_call_count(), 1);

        // Cache size should be 1
        assert_eq!(caching_repo.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_repository_different_versions_cached_separately() {
        let mock = MockEnrichmentRepository::new();
        let caching_repo = CachingEnrichmentRepository::new(mock);
        let v1 = component("libfoo", Some("https://hub.example.com/versions/v1"));
        let v2 = component("libfoo", Some("https://hub.example.com/versions/v2"));

        caching_repo.fetch_licenses(&v1).await.unwrap();
        assert_eq!(caching_repo.inner.license_call_count(), 1);

        // Different version URL - should hit inner repository
        caching_repo.fetch_licenses(&v2).await.unwrap();
        assert_eq!(caching_repo.inner.license_call_count(), 2);

        // Cache size should be 2
        assert_eq!(caching_repo.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_versionless_component_is_not_cached() {
        let mock = MockEnrichmentRepository::new();
        let caching_repo = CachingEnrichmentRepository::new(mock);
        let comp = component("libfoo", None);

        caching_repo.fetch_licenses(&comp).await.unwrap();
        caching_repo.fetch_licenses(&comp).await.unwrap();

        // Both calls reach the inner repository
        assert_eq!(caching_repo.inner.license_call_count(), 2);
        assert_eq!(caching_repo.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_other_enrichments_pass_through() {
        let mock = MockEnrichmentRepository::new();
        let caching_repo = CachingEnrichmentRepository::new(mock);
        let comp = component("libfoo", Some("https://hub.example.com/versions/v1"));

        assert!(caching_repo.fetch_copyrights(&comp).await.unwrap().is_none());
        assert!(caching_repo.fetch_homepage(&comp).await.unwrap().is_none());
        assert!(caching_repo.fetch_supplier(&comp).await.unwrap().is_none());
        assert_eq!(caching_repo.cache_size(), 0);
    }
}
