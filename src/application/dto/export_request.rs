/// ExportRequest - Internal request DTO for the SPDX export use case
///
/// This DTO represents the internal request structure used within
/// the application layer. It carries the resolved option set, after
/// `--basic` has been expanded into the individual flags.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Hub project name (matched exactly)
    pub project_name: String,
    /// Hub project version name (matched exactly)
    pub version_name: String,
    /// Recurse into BOM components that are themselves hub projects
    pub recursive: bool,
    /// Look up package download locations on OpenHub
    pub download_loc: bool,
    /// Skip copyright text in the output
    pub no_copyrights: bool,
    /// Skip package file names in the output
    pub no_files: bool,
    /// Leave components marked ignored out of the document
    pub exclude_ignored: bool,
    /// Trace every visited component to the progress reporter
    pub debug: bool,
}

impl ExportRequest {
    /// Creates a request with all optional behavior switched off
    pub fn new(project_name: &str, version_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            version_name: version_name.to_string(),
            recursive: false,
            download_loc: false,
            no_copyrights: false,
            no_files: false,
            exclude_ignored: false,
            debug: false,
        }
    }
}
