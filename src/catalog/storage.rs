use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{bail, Context, Result};
use log::{info, debug};

use super::types::CatalogFile;

/// On-disk encodings a catalog can use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .with_context(|| format!("Catalog file {} has no extension", path.display()))?;

        match extension.as_str() {
            "toml" => Ok(CatalogFormat::Toml),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "json" => Ok(CatalogFormat::Json),
            other => bail!("Unsupported catalog format .{} for {}", other, path.display()),
        }
    }

    /// Parse catalog text in this format
    pub fn parse(self, content: &str) -> Result<CatalogFile> {
        let catalog = match self {
            CatalogFormat::Toml => toml::from_str(content).context("Invalid TOML catalog")?,
            CatalogFormat::Yaml => serde_yaml::from_str(content).context("Invalid YAML catalog")?,
            CatalogFormat::Json => serde_json::from_str(content).context("Invalid JSON catalog")?,
        };
        Ok(catalog)
    }
}

/// Catalog file access
#[derive(Debug)]
pub struct CatalogStorage {
    /// Path to the catalog file
    path: PathBuf,
}

impl CatalogStorage {
    /// Create a catalog storage for the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load and parse the catalog from disk
    pub fn load(&self) -> Result<CatalogFile> {
        let path = &self.path;
        debug!("Loading catalog from {}", path.display());

        let format = CatalogFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let catalog = format
            .parse(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

        info!(
            "Loaded catalog with {} courses and {} students",
            catalog.courses.len(),
            catalog.students.len()
        );
        Ok(catalog)
    }

    /// Check if the catalog file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the path to the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
