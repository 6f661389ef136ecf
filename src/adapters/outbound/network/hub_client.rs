use crate::bom_export::domain::component::{
    BomComponent, PagedItems, Project, ProjectVersion,
};
use crate::bom_export::domain::document::{
    spdx_timestamp, ExtractedLicense, SpdxAnnotation, NOASSERTION,
};
use crate::bom_export::domain::enrichment::LicenseResolution;
use crate::bom_export::domain::identifier::strip_quotes;
use crate::bom_export::services::license::{combine_expression, plan_licenses};
use crate::ports::outbound::{EnrichmentRepository, ProjectCatalog};
use crate::shared::error::ExportError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Page size for hub listings.
const PAGE_BUCKET: usize = 1000;

/// The name of the BOM custom field which overrides the default
/// package supplier.
const SUPPLIER_FIELD_LABEL: &str = "PackageSupplier";

/// Matched files only become PackageFileName when they point at an
/// archive the component was identified inside.
const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".jar", ".ear", ".war", ".zip", ".gz", ".tar", ".xz", ".lz", ".bz2", ".7z", ".rar", ".cpio",
    ".Z", ".lz4", ".lha", ".arj", ".rpm", ".deb", ".dmg", ".whl",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BearerResponse {
    bearer_token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CopyrightItem {
    active: bool,
    updated_copyright: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommentItem {
    comment: String,
    user: CommentUser,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommentUser {
    email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MatchedFileItem {
    file_path: MatchedFilePath,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MatchedFilePath {
    path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CustomFieldItem {
    label: String,
    values: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ComponentDetail {
    url: Option<String>,
}

/// HubClient adapter for the hub server's REST API
///
/// Implements both the ProjectCatalog and the EnrichmentRepository
/// ports over one shared connection-pooled HTTP client. Construction
/// exchanges the API token for a bearer token; every later request
/// carries the bearer.
///
/// # Async Support
/// Uses async reqwest; the client is cheap to clone (the pool is
/// shared) so the same connection set serves catalog walks and
/// concurrent enrichment batches.
#[derive(Clone)]
pub struct HubClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
    max_retries: u32,
}

impl HubClient {
    /// Connects to a hub server and authenticates
    ///
    /// # Arguments
    /// * `base_url` - Server URL, with or without a trailing slash
    /// * `api_token` - API token to exchange for a bearer token
    /// * `trust_cert` - Accept the server certificate without verification
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    /// Returns `ExportError::AuthenticationFailed` when the token
    /// exchange is rejected
    pub async fn connect(
        base_url: &str,
        api_token: &str,
        trust_cert: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("hub-spdx/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .danger_accept_invalid_certs(trust_cert)
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let auth_url = format!("{}/api/tokens/authenticate", base_url);
        let response = client
            .post(&auth_url)
            .header("Authorization", format!("token {}", api_token))
            .send()
            .await
            .map_err(|e| ExportError::AuthenticationFailed {
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ExportError::AuthenticationFailed {
                details: format!("server returned status {}", response.status()),
            }
            .into());
        }

        let bearer: BearerResponse =
            response
                .json()
                .await
                .map_err(|e| ExportError::AuthenticationFailed {
                    details: e.to_string(),
                })?;

        Ok(Self {
            client,
            base_url,
            bearer_token: bearer.bearer_token,
            max_retries: 3,
        })
    }

    /// Fetches JSON from the hub with retry logic (async)
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_json(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        // Retry after a short wait (async)
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::ApiRequestFailed {
                url: url.to_string(),
                details: format!("status code {}", response.status()),
            }
            .into());
        }

        Ok(response.json().await?)
    }

    /// Fetches a plain-text resource (license texts)
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Accept", "text/plain")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::ApiRequestFailed {
                url: url.to_string(),
                details: format!("status code {}", response.status()),
            }
            .into());
        }

        Ok(response.text().await?)
    }

    /// Collects all pages of a hub listing
    async fn get_paged<T: DeserializeOwned + Default>(&self, url: &str) -> Result<Vec<T>> {
        let page_base = page_url(url, PAGE_BUCKET);
        let first: PagedItems<T> = self.get_json(&page_base).await?;
        let total = first.total_count;
        let mut all = first.items;
        let mut offset = PAGE_BUCKET;

        while all.len() < total {
            let next: PagedItems<T> = self
                .get_json(&format!("{}&offset={}", page_base, offset))
                .await?;
            if next.items.is_empty() {
                // Server reported more than it delivers; stop rather
                // than loop on the same page
                break;
            }
            all.extend(next.items);
            offset += PAGE_BUCKET;
        }

        Ok(all)
    }
}

/// Appends the paging limit to a listing URL, which may already carry
/// query parameters (searches, children links).
fn page_url(url: &str, bucket: usize) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}limit={}", url, separator, bucket)
}

fn is_archive_file(path: &str) -> bool {
    ARCHIVE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Reference a license text is fetched under: the last path segment
/// of the license resource URL.
fn license_text_ref(license_url: &str) -> Option<&str> {
    license_url
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// First lines of all active copyright statements, deduplicated in
/// order of appearance.
fn merge_copyrights(items: &[CopyrightItem]) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();
    for item in items.iter().filter(|item| item.active) {
        let first_line = match item
            .updated_copyright
            .as_deref()
            .and_then(|text| text.lines().next())
        {
            Some(line) => line.trim(),
            None => continue,
        };
        if first_line.is_empty() {
            continue;
        }
        if !lines.iter().any(|existing| existing == first_line) {
            lines.push(first_line.to_string());
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[async_trait]
impl ProjectCatalog for HubClient {
    async fn find_project(&self, name: &str) -> Result<Option<Project>> {
        let url = format!(
            "{}/api/projects?q=name:{}",
            self.base_url,
            urlencoding::encode(name)
        );
        let projects: Vec<Project> = self.get_paged(&url).await?;
        Ok(projects.into_iter().find(|project| project.name == name))
    }

    async fn list_project_names(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/projects?sort=name", self.base_url);
        let projects: Vec<Project> = self.get_paged(&url).await?;
        Ok(projects.into_iter().map(|project| project.name).collect())
    }

    async fn find_version(
        &self,
        project: &Project,
        version_name: &str,
    ) -> Result<Option<ProjectVersion>> {
        let Some(versions_url) = project.meta.link("versions") else {
            return Ok(None);
        };
        let url = format!(
            "{}?q=versionName:{}",
            versions_url,
            urlencoding::encode(version_name)
        );
        let versions: Vec<ProjectVersion> = self.get_paged(&url).await?;
        Ok(versions
            .into_iter()
            .find(|version| version.version_name == version_name))
    }

    async fn list_version_names(&self, project: &Project) -> Result<Vec<String>> {
        let Some(versions_url) = project.meta.link("versions") else {
            return Ok(Vec::new());
        };
        let versions: Vec<ProjectVersion> = self.get_paged(versions_url).await?;
        Ok(versions
            .into_iter()
            .map(|version| version.version_name)
            .collect())
    }

    async fn bom_components(&self, version: &ProjectVersion) -> Result<Vec<BomComponent>> {
        let url = format!("{}/components", version.meta.href);
        self.get_paged(&url).await
    }

    async fn hierarchical_components(
        &self,
        version: &ProjectVersion,
    ) -> Result<Vec<BomComponent>> {
        match version.meta.link("hierarchical-components") {
            Some(url) => self.get_paged(url).await,
            // Not every scan produces a hierarchical BOM
            None => Ok(Vec::new()),
        }
    }

    async fn child_components(&self, children_url: &str) -> Result<Vec<BomComponent>> {
        self.get_paged(children_url).await
    }
}

#[async_trait]
impl EnrichmentRepository for HubClient {
    async fn fetch_copyrights(&self, component: &BomComponent) -> Result<Option<String>> {
        let Some(origin) = component.first_origin() else {
            return Ok(None);
        };
        let Some(link) = origin.meta.link("component-origin-copyrights") else {
            return Ok(None);
        };

        let url = format!("{}?limit=100", link);
        let page: PagedItems<CopyrightItem> = self.get_json(&url).await?;
        Ok(merge_copyrights(&page.items))
    }

    async fn fetch_annotations(
        &self,
        component: &BomComponent,
    ) -> Result<Option<Vec<SpdxAnnotation>>> {
        let Some(link) = component.meta.link("comments") else {
            return Ok(None);
        };

        let page: PagedItems<CommentItem> = self.get_json(link).await?;
        if page.items.is_empty() {
            return Ok(None);
        }

        let date = spdx_timestamp();
        let annotations = page
            .items
            .iter()
            .map(|comment| SpdxAnnotation {
                annotation_date: date.clone(),
                annotation_type: "OTHER".to_string(),
                annotator: strip_quotes(&format!("Person: {}", comment.user.email)),
                comment: strip_quotes(&comment.comment),
            })
            .collect();
        Ok(Some(annotations))
    }

    async fn fetch_matched_file(&self, component: &BomComponent) -> Result<Option<String>> {
        let Some(link) = component.meta.link("matched-files") else {
            return Ok(None);
        };

        let page: PagedItems<MatchedFileItem> = self.get_json(link).await?;
        Ok(page
            .items
            .first()
            .map(|item| item.file_path.path.as_str())
            .filter(|path| is_archive_file(path))
            .map(str::to_string))
    }

    async fn fetch_licenses(
        &self,
        component: &BomComponent,
    ) -> Result<Option<LicenseResolution>> {
        let Some(plan) = plan_licenses(component) else {
            return Ok(None);
        };

        let mut ids = Vec::with_capacity(plan.entries.len());
        let mut extracted = Vec::new();
        for entry in &plan.entries {
            if let Some(text_url) = &entry.text_url {
                // A failed text fetch keeps the LicenseRef in the
                // expression; the extracted text degrades to NOASSERTION
                let text = match license_text_ref(text_url) {
                    Some(reference) => {
                        let url = format!("{}/api/licenses/{}/text", self.base_url, reference);
                        self.get_text(&url)
                            .await
                            .map(|text| strip_quotes(&text))
                            .unwrap_or_else(|_| NOASSERTION.to_string())
                    }
                    None => NOASSERTION.to_string(),
                };
                extracted.push(ExtractedLicense {
                    license_id: strip_quotes(&entry.id),
                    extracted_text: text,
                });
            }
            ids.push(entry.id.clone());
        }

        Ok(Some(LicenseResolution {
            expression: combine_expression(&ids, plan.disjunctive),
            extracted,
        }))
    }

    async fn fetch_homepage(&self, component: &BomComponent) -> Result<Option<String>> {
        let Some(component_url) = component.component.as_deref() else {
            return Ok(None);
        };

        let detail: ComponentDetail = self.get_json(component_url).await?;
        Ok(detail.url.filter(|url| !url.is_empty()))
    }

    async fn fetch_supplier(&self, component: &BomComponent) -> Result<Option<String>> {
        let Some(link) = component.meta.link("custom-fields") else {
            return Ok(None);
        };

        let page: PagedItems<CustomFieldItem> = self.get_json(link).await?;
        Ok(page
            .items
            .into_iter()
            .find(|field| field.label == SUPPLIER_FIELD_LABEL)
            .and_then(|field| field.values.into_iter().next())
            .filter(|value| !value.is_empty()))
    }
}
