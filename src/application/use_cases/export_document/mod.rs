use crate::application::dto::{ExportRequest, ExportResponse};
use crate::bom_export::domain::component::{BomComponent, Project, ProjectVersion};
use crate::bom_export::domain::document::{
    ExternalRef, SpdxDocument, SpdxPackage, DOCUMENT_REF, NOASSERTION,
};
use crate::bom_export::domain::enrichment::{ComponentEnrichment, FetchOutcome};
use crate::bom_export::domain::identifier::{package_ref, sanitize_description, strip_quotes};
use crate::bom_export::services::relationship::{
    package_comment, relationship_for_match_types, Supplier,
};
use crate::ports::outbound::{
    DownloadLocator, EnrichmentRepository, ProgressReporter, ProjectCatalog,
};
use crate::shared::error::ExportError;
use crate::shared::Result;
use futures::future::{BoxFuture, LocalBoxFuture};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Maximum concurrent requests per enrichment batch
const MAX_CONCURRENT_FETCHES: usize = 10;

/// ExportDocumentUseCase - Core use case for the SPDX export
///
/// This use case resolves a project version on the hub, walks its BOM
/// (hierarchical listing first, then the flat listing for anything the
/// hierarchy missed) and assembles an SPDX 2.2 document, using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `C` - ProjectCatalog implementation
/// * `E` - EnrichmentRepository implementation
/// * `D` - DownloadLocator implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportDocumentUseCase<C, E, D, PR> {
    catalog: C,
    enrichment: E,
    download_locator: D,
    progress_reporter: PR,
}

/// One project version waiting to be walked, with the package id its
/// components relate back to.
struct ProjectTask {
    version: ProjectVersion,
    parent_id: String,
}

/// Mutable state threaded through one export run.
///
/// Tracks what is already in the document so revisits (diamonds in the
/// hierarchy, the flat pass, sub-project walks) reuse package ids
/// instead of duplicating packages.
struct ExportSession {
    document: SpdxDocument,
    /// Component version URL -> id of the package emitted for it.
    processed_versions: HashMap<String, String>,
    /// Emitted package id -> component version URL it was minted for.
    emitted_ids: HashMap<String, String>,
    /// Extracted license ids already in the document.
    extracted_ids: HashSet<String>,
    /// Sub-projects already walked or queued, by (project, version) name.
    processed_projects: HashSet<(String, String)>,
    /// Emitted component packages, excluding the root package.
    component_count: usize,
}

impl ExportSession {
    fn new(document: SpdxDocument) -> Self {
        ExportSession {
            document,
            processed_versions: HashMap::new(),
            emitted_ids: HashMap::new(),
            extracted_ids: HashSet::new(),
            processed_projects: HashSet::new(),
            component_count: 0,
        }
    }
}

impl<C, E, D, PR> ExportDocumentUseCase<C, E, D, PR>
where
    C: ProjectCatalog,
    E: EnrichmentRepository,
    D: DownloadLocator,
    PR: ProgressReporter,
{
    /// Creates a new ExportDocumentUseCase with injected dependencies
    pub fn new(catalog: C, enrichment: E, download_locator: D, progress_reporter: PR) -> Self {
        Self {
            catalog,
            enrichment,
            download_locator,
            progress_reporter,
        }
    }

    /// Executes the SPDX export use case
    ///
    /// # Arguments
    /// * `request` - Export request naming the project version and options
    ///
    /// # Returns
    /// ExportResponse containing the assembled document and the number
    /// of component packages in it
    pub async fn execute(&self, request: ExportRequest) -> Result<ExportResponse> {
        // Step 1: Resolve the project and version in the hub catalog
        let (project, version) = self.resolve_target(&request).await?;

        // Step 2: Fetch all project names once; sub-projects are
        // recognized by name during the walk
        let known_projects: HashSet<String> = if request.recursive {
            self.catalog.list_project_names().await?.into_iter().collect()
        } else {
            HashSet::new()
        };

        // Step 3: Start the document with its root package
        let root_id = package_ref(&project.name, &version.version_name);
        let mut session = ExportSession::new(SpdxDocument::new(&project, &version, &root_id));
        session
            .document
            .add_package(SpdxPackage::project_root(&project, &version, &root_id));
        session
            .document
            .add_relationship(DOCUMENT_REF, "DESCRIBES", &root_id);
        session
            .processed_projects
            .insert((project.name.clone(), version.version_name.clone()));
        // A BOM entry for the exported project version itself must not
        // mint a second package under the root id
        session
            .emitted_ids
            .insert(root_id.clone(), version.meta.href.clone());

        // Step 4: Walk the BOM; sub-projects are queued, not recursed into
        let mut queue = VecDeque::new();
        queue.push_back(ProjectTask {
            version,
            parent_id: root_id,
        });
        while let Some(task) = queue.pop_front() {
            let subtasks = self
                .export_project_version(&mut session, &task, &known_projects, &request)
                .await?;
            queue.extend(subtasks);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Export complete: {} component packages in the document",
            session.component_count
        ));

        Ok(ExportResponse::new(session.document, session.component_count))
    }

    /// Resolves the requested project and version in the catalog
    ///
    /// # Arguments
    /// * `request` - The export request naming the project and version
    ///
    /// # Returns
    /// The matching project and version
    ///
    /// # Errors
    /// Returns `ExportError::ProjectNotFound` or
    /// `ExportError::VersionNotFound`, each carrying the available
    /// names, when the lookup misses
    async fn resolve_target(&self, request: &ExportRequest) -> Result<(Project, ProjectVersion)> {
        self.progress_reporter.report(&format!(
            "📖 Working on project '{}' version '{}'",
            request.project_name, request.version_name
        ));

        let project = match self.catalog.find_project(&request.project_name).await? {
            Some(project) => project,
            None => {
                return Err(ExportError::ProjectNotFound {
                    name: request.project_name.clone(),
                    available: self.catalog.list_project_names().await?,
                }
                .into())
            }
        };

        let version = match self
            .catalog
            .find_version(&project, &request.version_name)
            .await?
        {
            Some(version) => version,
            None => {
                return Err(ExportError::VersionNotFound {
                    project: request.project_name.clone(),
                    version: request.version_name.clone(),
                    available: self.catalog.list_version_names(&project).await?,
                }
                .into())
            }
        };

        Ok((project, version))
    }

    /// Exports one project version's BOM into the session document
    ///
    /// Runs the component list, enrichment, hierarchy and flat passes
    /// for this version.
    ///
    /// # Returns
    /// Walk tasks for the sub-projects discovered in this BOM
    async fn export_project_version(
        &self,
        session: &mut ExportSession,
        task: &ProjectTask,
        known_projects: &HashSet<String>,
        request: &ExportRequest,
    ) -> Result<Vec<ProjectTask>> {
        // Step 1: Flat component list; it carries the richest per-entry data
        let phase_start = Instant::now();
        self.progress_reporter.report("🔍 Getting component list ...");
        let components = self.list_components(&task.version, request).await?;
        self.progress_reporter
            .report(&format!("✅ Found {} components", components.len()));
        self.report_phase_time(request, phase_start);

        // Step 2: Concurrent enrichment, one batch per data kind
        let phase_start = Instant::now();
        let enrichments = self.enrich_components(&components).await;
        self.report_phase_time(request, phase_start);

        let lookup: HashMap<&str, &BomComponent> = components
            .iter()
            .filter_map(|component| component.version_key().map(|key| (key, component)))
            .collect();

        // Step 3: Hierarchy pass
        let phase_start = Instant::now();
        self.progress_reporter
            .report("🔍 Processing hierarchical BOM ...");
        let hierarchical = self.catalog.hierarchical_components(&task.version).await?;
        let mut count = 0;
        for entry in hierarchical {
            count += self
                .walk_hierarchy(
                    session,
                    entry,
                    task.parent_id.clone(),
                    &lookup,
                    &enrichments,
                    request,
                    String::new(),
                )
                .await?;
        }
        self.progress_reporter
            .report(&format!("Processed {} hierarchical components", count));
        self.report_phase_time(request, phase_start);

        // Step 4: Flat pass picks up the entries the hierarchy missed
        let phase_start = Instant::now();
        self.progress_reporter
            .report("🔍 Processing other components ...");
        let mut count = 0;
        let mut subtasks = Vec::new();
        for component in &components {
            let Some((version_key, version_name)) = component_identity(component) else {
                continue;
            };
            if session.processed_versions.contains_key(version_key) {
                continue;
            }
            if request.debug {
                self.progress_reporter.report(&component.display_name());
            }

            let spdx_id = self
                .emit_component(
                    session,
                    component,
                    version_key,
                    version_name,
                    &lookup,
                    &enrichments,
                    request,
                )
                .await;
            self.relate(session, &task.parent_id, component, &spdx_id);
            count += 1;

            if request.recursive && known_projects.contains(&component.component_name) {
                if let Some(subtask) = self
                    .resolve_sub_project(session, component, &spdx_id)
                    .await?
                {
                    subtasks.push(subtask);
                }
            }
        }
        self.progress_reporter
            .report(&format!("Processed {} other components", count));
        self.report_phase_time(request, phase_start);

        Ok(subtasks)
    }

    /// Reads the flat BOM and drops the entries the export cannot use
    ///
    /// Ignored entries are dropped when the request asks for it;
    /// entries with no assigned version are always dropped, with an
    /// INFO line naming them.
    async fn list_components(
        &self,
        version: &ProjectVersion,
        request: &ExportRequest,
    ) -> Result<Vec<BomComponent>> {
        let components = self.catalog.bom_components(version).await?;
        let mut kept = Vec::with_capacity(components.len());
        for component in components {
            if request.exclude_ignored && component.ignored {
                continue;
            }
            if component_identity(&component).is_none() {
                self.progress_reporter.report(&format!(
                    "INFO: Skipping component {} which has no assigned version",
                    component.component_name
                ));
                continue;
            }
            kept.push(component);
        }
        Ok(kept)
    }

    /// Fetches all six enrichment kinds for every listed component
    ///
    /// Each kind runs as its own batch with up to
    /// [`MAX_CONCURRENT_FETCHES`] requests in flight; a batch finishes
    /// before the next kind starts. Failed lookups are folded into the
    /// per-component outcome and warned about after the batches; they
    /// never abort the export.
    async fn enrich_components(
        &self,
        components: &[BomComponent],
    ) -> HashMap<String, ComponentEnrichment> {
        let targets: Vec<&BomComponent> = components
            .iter()
            .filter(|component| component.version_key().is_some())
            .collect();
        let mut enrichments: HashMap<String, ComponentEnrichment> = targets
            .iter()
            .filter_map(|component| component.version_key())
            .map(|key| (key.to_string(), ComponentEnrichment::default()))
            .collect();
        if targets.is_empty() {
            return enrichments;
        }

        self.progress_reporter.report("🔍 Getting component data ...");

        let results = self
            .run_batch(&targets, "Fetching copyright statements...", |component| {
                self.enrichment.fetch_copyrights(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.copyrights = outcome);

        let results = self
            .run_batch(&targets, "Fetching review comments...", |component| {
                self.enrichment.fetch_annotations(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.annotations = outcome);

        let results = self
            .run_batch(&targets, "Fetching matched files...", |component| {
                self.enrichment.fetch_matched_file(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.matched_file = outcome);

        let results = self
            .run_batch(&targets, "Fetching license details...", |component| {
                self.enrichment.fetch_licenses(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.licenses = outcome);

        let results = self
            .run_batch(&targets, "Fetching component homepages...", |component| {
                self.enrichment.fetch_homepage(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.homepage = outcome);

        let results = self
            .run_batch(&targets, "Fetching supplier fields...", |component| {
                self.enrichment.fetch_supplier(component)
            })
            .await;
        fold_batch(&mut enrichments, results, |e, outcome| e.supplier = outcome);

        self.report_enrichment_outcome(&targets, &enrichments);

        enrichments
    }

    /// Runs one enrichment kind for every target with bounded concurrency
    ///
    /// # Arguments
    /// * `targets` - Components to fetch for
    /// * `message` - Progress bar label for this batch
    /// * `fetch` - The repository call performing one lookup
    ///
    /// # Returns
    /// One `(component version URL, outcome)` pair per target
    async fn run_batch<'a, T, F>(
        &self,
        targets: &[&'a BomComponent],
        message: &str,
        fetch: F,
    ) -> Vec<(String, FetchOutcome<T>)>
    where
        F: Fn(&'a BomComponent) -> BoxFuture<'a, Result<Option<T>>>,
    {
        let current = Arc::new(AtomicUsize::new(0));
        let total = Arc::new(AtomicUsize::new(targets.len()));
        let is_done = Arc::new(AtomicBool::new(false));

        let current_clone = Arc::clone(&current);
        let total_clone = Arc::clone(&total);
        let done_clone = Arc::clone(&is_done);
        let message_clone = message.to_string();

        // The bar renders on a plain thread so it keeps moving while
        // this task is parked on the fetches
        let progress_handle = thread::spawn(move || {
            let pb = ProgressBar::new(total_clone.load(Ordering::Relaxed) as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            pb.set_message(message_clone);

            while !done_clone.load(Ordering::Relaxed) {
                let current_val = current_clone.load(Ordering::Relaxed) as u64;
                pb.set_position(current_val);
                thread::sleep(Duration::from_millis(50));
            }

            pb.finish_and_clear();
        });

        let results: Vec<(String, FetchOutcome<T>)> = stream::iter(targets.iter().copied())
            .map(|component| {
                let current = Arc::clone(&current);
                let future = fetch(component);
                async move {
                    let outcome = FetchOutcome::from_result(future.await);
                    current.fetch_add(1, Ordering::Relaxed);
                    let key = component.version_key().unwrap_or_default().to_string();
                    (key, outcome)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        is_done.store(true, Ordering::Relaxed);
        let _ = progress_handle.join();

        results
    }

    /// Warns about failed lookups and summarizes the enrichment phase
    ///
    /// Failures are reported here, after the async batches, since the
    /// progress reporter may not be Send.
    fn report_enrichment_outcome(
        &self,
        targets: &[&BomComponent],
        enrichments: &HashMap<String, ComponentEnrichment>,
    ) {
        let mut failed = 0;
        for component in targets {
            let Some(enrichment) = component
                .version_key()
                .and_then(|key| enrichments.get(key))
            else {
                continue;
            };
            let failures = enrichment.failures();
            if failures.is_empty() {
                continue;
            }
            failed += 1;
            for (kind, reason) in failures {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} fetch failed for {}: {}",
                    kind,
                    component.display_name(),
                    reason
                ));
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Component data retrieval complete: {} succeeded out of {}, {} failed",
            targets.len() - failed,
            targets.len(),
            failed
        ));
    }

    /// Walks one hierarchical BOM entry and its children
    ///
    /// Emits the entry (unless already emitted), records its
    /// relationship to `parent_id` and descends through the entry's
    /// `children` link.
    ///
    /// # Returns
    /// The number of entries visited, including revisits
    #[allow(clippy::too_many_arguments)]
    fn walk_hierarchy<'a>(
        &'a self,
        session: &'a mut ExportSession,
        component: BomComponent,
        parent_id: String,
        lookup: &'a HashMap<&'a str, &'a BomComponent>,
        enrichments: &'a HashMap<String, ComponentEnrichment>,
        request: &'a ExportRequest,
        indent: String,
    ) -> LocalBoxFuture<'a, Result<usize>> {
        Box::pin(async move {
            let Some((version_key, version_name)) = component_identity(&component) else {
                if indent.is_empty() {
                    self.progress_reporter.report(&format!(
                        "{}/? - (no version - skipping)",
                        component.component_name
                    ));
                } else {
                    self.progress_reporter
                        .report(&format!("{}{}/? (SKIPPED)", indent, component.component_name));
                }
                return Ok(0);
            };
            if request.debug {
                self.progress_reporter
                    .report(&format!("{}{}", indent, component.display_name()));
            }

            let spdx_id = self
                .emit_component(
                    session,
                    &component,
                    version_key,
                    version_name,
                    lookup,
                    enrichments,
                    request,
                )
                .await;
            self.relate(session, &parent_id, &component, &spdx_id);
            let mut count = 1;

            if let Some(children_url) = component.meta.link("children") {
                let children = self.catalog.child_components(children_url).await?;
                let child_indent = if indent.is_empty() {
                    String::from("--> ")
                } else {
                    format!("    {}", indent)
                };
                for child in children {
                    count += self
                        .walk_hierarchy(
                            session,
                            child,
                            spdx_id.clone(),
                            lookup,
                            enrichments,
                            request,
                            child_indent.clone(),
                        )
                        .await?;
                }
            }

            Ok(count)
        })
    }

    /// Emits one component as an SPDX package, exactly once
    ///
    /// The flat BOM entry for the same version is preferred as the data
    /// source because it carries the origins and licenses the
    /// hierarchical listing omits.
    ///
    /// # Returns
    /// The package id, whether it was emitted now or earlier
    #[allow(clippy::too_many_arguments)]
    async fn emit_component(
        &self,
        session: &mut ExportSession,
        component: &BomComponent,
        version_key: &str,
        version_name: &str,
        lookup: &HashMap<&str, &BomComponent>,
        enrichments: &HashMap<String, ComponentEnrichment>,
        request: &ExportRequest,
    ) -> String {
        if let Some(existing) = session.processed_versions.get(version_key) {
            return existing.clone();
        }

        let spdx_id = package_ref(&component.component_name, version_name);
        if let Some(first_key) = session.emitted_ids.get(&spdx_id) {
            // Distinct versions can sanitize to the same id; the first
            // one emitted keeps it
            if first_key != version_key {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} maps to the already used id {}; reusing the existing package",
                    component.display_name(),
                    spdx_id
                ));
            }
            session
                .processed_versions
                .insert(version_key.to_string(), spdx_id.clone());
            return spdx_id;
        }

        let entry = lookup.get(version_key).copied().unwrap_or(component);
        let enrichment = enrichments.get(version_key).cloned().unwrap_or_default();

        let package = self
            .build_package(
                entry,
                &spdx_id,
                &component.component_name,
                version_name,
                &enrichment,
                request,
            )
            .await;
        session.document.add_package(package);
        for extracted in enrichment.extracted_licenses() {
            if session.extracted_ids.insert(extracted.license_id.clone()) {
                session.document.add_extracted_license(extracted.clone());
            }
        }

        session
            .emitted_ids
            .insert(spdx_id.clone(), version_key.to_string());
        session
            .processed_versions
            .insert(version_key.to_string(), spdx_id.clone());
        session.component_count += 1;

        spdx_id
    }

    /// Builds the SPDX package for one BOM entry
    ///
    /// # Arguments
    /// * `entry` - The BOM entry the package data is taken from
    /// * `spdx_id` - Package id minted by the caller
    /// * `name` - Component name of the walked entry
    /// * `version_name` - Version name of the walked entry
    /// * `enrichment` - Fetched per-component data
    /// * `request` - Flags controlling suppression and download lookup
    async fn build_package(
        &self,
        entry: &BomComponent,
        spdx_id: &str,
        name: &str,
        version_name: &str,
        enrichment: &ComponentEnrichment,
        request: &ExportRequest,
    ) -> SpdxPackage {
        let download_location = self.locate_download(entry, request).await;

        let supplier = Supplier::resolve(entry, enrichment.supplier());
        // A supplier set at the BOM level replaces the purl as the
        // package manager locator
        let locator = supplier.locator(entry).or_else(|| entry.purl());

        let copyright_text = if request.no_copyrights {
            NOASSERTION.to_string()
        } else {
            strip_quotes(enrichment.copyright_text())
        };
        let package_file_name = if request.no_files {
            None
        } else {
            enrichment.matched_file.found().map(|file| strip_quotes(file))
        };
        let license = strip_quotes(enrichment.license_expression());

        let mut external_refs = Vec::new();
        if let Some(locator) = locator.filter(|locator| !locator.is_empty()) {
            external_refs.push(ExternalRef::purl(&locator));
        }
        if let Some(component_url) = entry.component.as_deref() {
            external_refs.push(ExternalRef::other("Hub-Component", component_url));
        }
        if let Some(version_url) = entry.version_key() {
            external_refs.push(ExternalRef::other("Hub-Component-Version", version_url));
        }
        if let Some(openhub_url) = entry.meta.link("openhub") {
            external_refs.push(ExternalRef::other("OpenHub", openhub_url));
        }

        SpdxPackage {
            spdx_id: spdx_id.to_string(),
            name: strip_quotes(name),
            version_info: strip_quotes(version_name),
            package_file_name,
            description: Some(
                entry
                    .description
                    .as_deref()
                    .map_or_else(|| NOASSERTION.to_string(), sanitize_description),
            ),
            download_location,
            homepage: enrichment.homepage.found().map(|url| strip_quotes(url)),
            license_concluded: license.clone(),
            license_declared: license,
            license_comments: Some(String::from(
                "The concluded license was taken from the package level",
            )),
            supplier: supplier.spdx_value().to_string(),
            files_analyzed: false,
            comment: Some(package_comment(entry, &supplier)),
            copyright_text,
            annotations: enrichment.annotations().to_vec(),
            external_refs,
        }
    }

    /// Resolves the package download location
    ///
    /// Only attempted when the request asks for it and the entry has an
    /// OpenHub link; a failed lookup degrades to NOASSERTION with a
    /// warning.
    async fn locate_download(&self, entry: &BomComponent, request: &ExportRequest) -> String {
        if !request.download_loc {
            return NOASSERTION.to_string();
        }
        let Some(openhub_url) = entry.meta.link("openhub") else {
            return NOASSERTION.to_string();
        };

        match self.download_locator.locate_download(openhub_url).await {
            Ok(Some(url)) => url,
            Ok(None) => NOASSERTION.to_string(),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: OpenHub lookup failed for {}: {}",
                    entry.display_name(),
                    e
                ));
                NOASSERTION.to_string()
            }
        }
    }

    /// Records the relationship between a parent package and a component
    ///
    /// The verb comes from the component's match types; unmapped match
    /// types leave the package unrelated, with a warning.
    fn relate(
        &self,
        session: &mut ExportSession,
        parent_id: &str,
        component: &BomComponent,
        spdx_id: &str,
    ) {
        match relationship_for_match_types(&component.match_types) {
            Some(verb) => session.document.add_relationship(parent_id, verb, spdx_id),
            None => self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No relationship mapping for {} (match types {:?})",
                component.display_name(),
                component.match_types
            )),
        }
    }

    /// Resolves a BOM component that is itself a hub project
    ///
    /// # Returns
    /// The walk task for the component's own BOM, or `None` when the
    /// name or version does not resolve as a project or that project
    /// version was already walked
    async fn resolve_sub_project(
        &self,
        session: &mut ExportSession,
        component: &BomComponent,
        parent_id: &str,
    ) -> Result<Option<ProjectTask>> {
        let Some(version_name) = component.component_version_name.as_deref() else {
            return Ok(None);
        };
        let guard_key = (component.component_name.clone(), version_name.to_string());
        if session.processed_projects.contains(&guard_key) {
            return Ok(None);
        }

        let Some(project) = self.catalog.find_project(&component.component_name).await? else {
            return Ok(None);
        };
        let Some(version) = self.catalog.find_version(&project, version_name).await? else {
            return Ok(None);
        };

        self.progress_reporter.report(&format!(
            "Processing project within project '{}'",
            component.display_name()
        ));

        session.processed_projects.insert(guard_key);
        Ok(Some(ProjectTask {
            version,
            parent_id: parent_id.to_string(),
        }))
    }

    fn report_phase_time(&self, request: &ExportRequest, start: Instant) {
        if request.debug {
            self.progress_reporter.report(&format!(
                "--- {:.3} seconds ---",
                start.elapsed().as_secs_f64()
            ));
        }
    }
}

/// Version URL and version name of a component, or `None` for entries
/// with no assigned version.
fn component_identity(component: &BomComponent) -> Option<(&str, &str)> {
    match (
        component.version_key(),
        component.component_version_name.as_deref(),
    ) {
        (Some(key), Some(name)) => Some((key, name)),
        _ => None,
    }
}

/// Folds one batch of outcomes into the per-component enrichments.
fn fold_batch<T>(
    enrichments: &mut HashMap<String, ComponentEnrichment>,
    results: Vec<(String, FetchOutcome<T>)>,
    mut assign: impl FnMut(&mut ComponentEnrichment, FetchOutcome<T>),
) {
    for (key, outcome) in results {
        if let Some(enrichment) = enrichments.get_mut(&key) {
            assign(enrichment, outcome);
        }
    }
}
