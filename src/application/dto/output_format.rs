/// Output format enumeration for SPDX export
///
/// This enum represents the supported output forms for SPDX documents.
/// It belongs in the application layer as it represents an application-level
/// concern that both the CLI (inbound adapter) and formatters (outbound adapters)
/// need to understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SPDX 2.2 JSON format (default)
    Json,
    /// SPDX 2.2 tag-value format
    TagValue,
}

impl OutputFormat {
    /// File extension used when deriving the default output name
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => ".json",
            OutputFormat::TagValue => ".spdx",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tag-value" | "tagvalue" | "tv" => Ok(OutputFormat::TagValue),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'tag-value'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::TagValue => write!(f, "tag-value"),
        }
    }
}
