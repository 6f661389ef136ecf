use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the SPDX document to a file
///
/// This adapter implements the OutputPresenter port for file output.
/// An existing file at the target path is rotated to a numbered
/// backup name before the new document is written.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(ExportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    /// - Validate the parent directory resolves cleanly
    fn validate_output_security(&self) -> Result<()> {
        // If the file already exists, check it's not a symlink
        if self.output_path.exists() {
            let metadata = fs::symlink_metadata(&self.output_path).map_err(|e| {
                ExportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Failed to read file metadata: {}", e),
                }
            })?;

            if metadata.is_symlink() {
                return Err(ExportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        if let Some(parent) = self.output_path.parent() {
            if parent.exists() {
                parent
                    .canonicalize()
                    .map_err(|e| ExportError::FileWriteError {
                        path: self.output_path.clone(),
                        details: format!("Failed to validate parent directory: {}", e),
                    })?;
            }
        }

        Ok(())
    }

    /// Moves an existing output file aside to the first free numbered
    /// backup name
    fn rotate_existing(&self) -> Result<()> {
        if !self.output_path.is_file() {
            return Ok(());
        }

        for index in 0..1000 {
            let candidate = backup_candidate(&self.output_path, index);
            if candidate.exists() {
                continue;
            }
            fs::rename(&self.output_path, &candidate).map_err(|e| {
                ExportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Failed to move old output file: {}", e),
                }
            })?;
            eprintln!(
                "📦 Moved old output file '{}' to '{}'",
                self.output_path.display(),
                candidate.display()
            );
            return Ok(());
        }

        Err(ExportError::FileWriteError {
            path: self.output_path.clone(),
            details: "All 1000 backup names are in use. Please remove old backups.".to_string(),
        }
        .into())
    }
}

/// Backup name for rotation: the counter goes between stem and
/// extension so "demo.json" rotates to "demo.000.json" and stays
/// openable as JSON.
fn backup_candidate(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{:03}.{}", stem, index, ext),
        None => format!("{}.{:03}", stem, index),
    };
    path.with_file_name(name)
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        // Security validations
        self.validate_parent_directory()?;
        self.validate_output_security()?;
        self.rotate_existing()?;

        // Safe to write now
        fs::write(&self.output_path, content).map_err(|e| ExportError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
