use crate::bom_export::domain::component::{BomComponent, Project, ProjectVersion};
use crate::shared::Result;
use async_trait::async_trait;

/// ProjectCatalog port for resolving projects and reading BOMs
///
/// This port abstracts the hub server's catalog API: looking up
/// projects and versions by name and reading the flat and hierarchical
/// component listings of a version.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` so the
/// enrichment scheduler can share them across concurrent tasks.
#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    /// Finds a project by exact (case-sensitive) name
    ///
    /// # Arguments
    /// * `name` - Project name to match exactly
    ///
    /// # Returns
    /// The project, or `None` when no project has that name
    ///
    /// # Errors
    /// Returns an error if the catalog request fails
    async fn find_project(&self, name: &str) -> Result<Option<Project>>;

    /// Lists the names of all projects, for not-found guidance
    async fn list_project_names(&self) -> Result<Vec<String>>;

    /// Finds a version of a project by exact (case-sensitive) name
    ///
    /// # Arguments
    /// * `project` - Project whose versions are searched
    /// * `version_name` - Version name to match exactly
    async fn find_version(
        &self,
        project: &Project,
        version_name: &str,
    ) -> Result<Option<ProjectVersion>>;

    /// Lists the version names of a project, for not-found guidance
    async fn list_version_names(&self, project: &Project) -> Result<Vec<String>>;

    /// Reads the full flat BOM of a project version
    ///
    /// # Returns
    /// All BOM entries in server order, across all result pages
    async fn bom_components(&self, version: &ProjectVersion) -> Result<Vec<BomComponent>>;

    /// Reads the top level of the hierarchical BOM of a project version
    ///
    /// # Returns
    /// The top-level entries, or an empty list when the version has no
    /// hierarchical listing
    async fn hierarchical_components(&self, version: &ProjectVersion)
        -> Result<Vec<BomComponent>>;

    /// Reads the children of a hierarchical BOM entry
    ///
    /// # Arguments
    /// * `children_url` - The entry's `children` link
    async fn child_components(&self, children_url: &str) -> Result<Vec<BomComponent>>;
}
