/// Builders for the hub wire model used across the integration tests.
///
/// All URLs follow the layout of a real hub server so that href-keyed
/// lookups in the mocks behave like the live API.
use hub_spdx::prelude::*;

pub fn version_href(project: &str, version: &str) -> String {
    format!(
        "https://hub.example.com/api/projects/{}/versions/{}",
        project, version
    )
}

pub fn component_version_url(name: &str, version: &str) -> String {
    format!(
        "https://hub.example.com/api/components/{}/versions/{}",
        name, version
    )
}

pub fn project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        description: None,
        meta: Meta {
            href: format!("https://hub.example.com/api/projects/{}", name),
            links: vec![],
        },
    }
}

pub fn project_version(project_name: &str, version_name: &str) -> ProjectVersion {
    ProjectVersion {
        version_name: version_name.to_string(),
        license: None,
        meta: Meta {
            href: version_href(project_name, version_name),
            links: vec![],
        },
    }
}

/// A KB component with an assigned version and a single match type.
pub fn component(name: &str, version: &str, match_type: &str) -> BomComponent {
    BomComponent {
        component_name: name.to_string(),
        component_version_name: Some(version.to_string()),
        component_version: Some(component_version_url(name, version)),
        component: Some(format!("https://hub.example.com/api/components/{}", name)),
        component_type: Some("KB_COMPONENT".to_string()),
        match_types: vec![match_type.to_string()],
        ..BomComponent::default()
    }
}

/// A BOM entry with no assigned version; the export skips these.
pub fn versionless_component(name: &str) -> BomComponent {
    BomComponent {
        component_name: name.to_string(),
        match_types: vec!["FILE_EXACT".to_string()],
        ..BomComponent::default()
    }
}

pub fn with_component_type(mut component: BomComponent, component_type: &str) -> BomComponent {
    component.component_type = Some(component_type.to_string());
    component
}

pub fn with_ignored(mut component: BomComponent) -> BomComponent {
    component.ignored = true;
    component
}

pub fn with_link(mut component: BomComponent, rel: &str, href: &str) -> BomComponent {
    component.meta.links.push(MetaLink {
        rel: rel.to_string(),
        href: href.to_string(),
    });
    component
}

pub fn with_origin(mut component: BomComponent, namespace: &str, id: &str) -> BomComponent {
    component.origins.push(ComponentOrigin {
        external_namespace: Some(namespace.to_string()),
        external_id: Some(id.to_string()),
        meta: Meta::default(),
    });
    component
}
