use clap::Parser;

use crate::application::dto::OutputFormat;

/// Export an SPDX document for a hub project version
#[derive(Parser, Debug)]
#[command(name = "hub-spdx")]
#[command(version)]
#[command(
    about = "Export the BOM of a hub project version as an SPDX 2.2 document",
    long_about = None
)]
pub struct Args {
    /// Hub project name
    pub project_name: String,

    /// Hub project version name
    pub project_version: String,

    /// Output format: json or tag-value
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file name ('-' writes to stdout) - default '<proj>-<ver>.<ext>'
    #[arg(short, long)]
    pub output: Option<String>,

    /// Scan sub-projects within projects (default = false)
    #[arg(short, long)]
    pub recursive: bool,

    /// Attempt to identify component download links via OpenHub
    /// (slows down processing - default = false)
    #[arg(long)]
    pub download_loc: bool,

    /// Do not export copyright data for components (speeds up processing)
    #[arg(long)]
    pub no_copyrights: bool,

    /// Do not export file data for components (speeds up processing)
    #[arg(long)]
    pub no_files: bool,

    /// Do not export copyright, download link or package file data
    /// (same as using "--no-copyrights --no-files" without "--download-loc")
    #[arg(short, long)]
    pub basic: bool,

    /// Exclude components marked ignored in the BOM
    #[arg(short = 'x', long)]
    pub exclude_ignored_components: bool,

    /// Hub server URL (can also be set as env. var. HUB_URL)
    #[arg(long)]
    pub hub_url: Option<String>,

    /// Hub API token (can also be set as env. var. HUB_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Trust the hub server certificate without verification
    #[arg(long)]
    pub trust_cert: bool,

    /// Hub server request timeout (seconds - default 15)
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Turn on debug messages
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Applies the flag implications of the basic export mode
    ///
    /// # Returns
    /// The arguments with `--basic` expanded into its component flags
    pub fn normalized(mut self) -> Self {
        if self.basic {
            self.no_copyrights = true;
            self.no_files = true;
            self.download_loc = false;
        }
        self
    }
}
