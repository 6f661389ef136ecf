use std::collections::HashMap;

use hub_spdx::prelude::*;

/// Mock ProjectCatalog serving a fixed catalog from memory.
///
/// BOMs are keyed by project version href, children by the parent
/// entry's `children` link, mirroring how the live API is navigated.
pub struct MockProjectCatalog {
    projects: Vec<Project>,
    versions: Vec<(String, ProjectVersion)>,
    boms: HashMap<String, Vec<BomComponent>>,
    hierarchies: HashMap<String, Vec<BomComponent>>,
    children: HashMap<String, Vec<BomComponent>>,
    should_fail: bool,
}

impl MockProjectCatalog {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            versions: Vec::new(),
            boms: HashMap::new(),
            hierarchies: HashMap::new(),
            children: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    pub fn with_version(mut self, project_name: &str, version: ProjectVersion) -> Self {
        self.versions.push((project_name.to_string(), version));
        self
    }

    pub fn with_bom(mut self, version: &ProjectVersion, components: Vec<BomComponent>) -> Self {
        self.boms.insert(version.meta.href.clone(), components);
        self
    }

    pub fn with_hierarchy(
        mut self,
        version: &ProjectVersion,
        components: Vec<BomComponent>,
    ) -> Self {
        self.hierarchies
            .insert(version.meta.href.clone(), components);
        self
    }

    pub fn with_children(mut self, children_url: &str, components: Vec<BomComponent>) -> Self {
        self.children
            .insert(children_url.to_string(), components);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl Default for MockProjectCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectCatalog for MockProjectCatalog {
    async fn find_project(&self, name: &str) -> Result<Option<Project>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog failure");
        }
        Ok(self.projects.iter().find(|p| p.name == name).cloned())
    }

    async fn list_project_names(&self) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog failure");
        }
        Ok(self.projects.iter().map(|p| p.name.clone()).collect())
    }

    async fn find_version(
        &self,
        project: &Project,
        version_name: &str,
    ) -> Result<Option<ProjectVersion>> {
        Ok(self
            .versions
            .iter()
            .find(|(name, v)| name == &project.name && v.version_name == version_name)
            .map(|(_, v)| v.clone()))
    }

    async fn list_version_names(&self, project: &Project) -> Result<Vec<String>> {
        Ok(self
            .versions
            .iter()
            .filter(|(name, _)| name == &project.name)
            .map(|(_, v)| v.version_name.clone())
            .collect())
    }

    async fn bom_components(&self, version: &ProjectVersion) -> Result<Vec<BomComponent>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog failure");
        }
        Ok(self
            .boms
            .get(&version.meta.href)
            .cloned()
            .unwrap_or_default())
    }

    async fn hierarchical_components(
        &self,
        version: &ProjectVersion,
    ) -> Result<Vec<BomComponent>> {
        Ok(self
            .hierarchies
            .get(&version.meta.href)
            .cloned()
            .unwrap_or_default())
    }

    async fn child_components(&self, children_url: &str) -> Result<Vec<BomComponent>> {
        Ok(self
            .children
            .get(children_url)
            .cloned()
            .unwrap_or_default())
    }
}
