use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::storage::persistence::ISSUES_FILENAME;

/// Filesystem layout for synchronized data and rendered images.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    data_dir: PathBuf,
    image_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(data_dir: impl Into<PathBuf>, image_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), image_dir: image_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn project_dir(&self, identifier: &str) -> PathBuf {
        self.data_dir.join(identifier)
    }

    pub fn issue_dir(&self, identifier: &str) -> PathBuf {
        self.project_dir(identifier).join("issues")
    }

    pub fn image_path(&self, identifier: &str) -> PathBuf {
        self.image_dir.join(format!("{identifier}.png"))
    }

    /// Empty the data root, creating it if missing.
    ///
    /// A run is a total replace of the previous snapshot, so every existing
    /// project partition is deleted before fetching starts.
    pub fn reset_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create data directory: {}", self.data_dir.display()))?;

        for entry in fs::read_dir(&self.data_dir)
            .with_context(|| format!("Failed to read data directory: {}", self.data_dir.display()))?
        {
            let entry = entry.context("Failed to read data directory entry")?;
            let path = entry.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)
                    .with_context(|| format!("Failed to remove partition: {}", path.display()))?;
            } else {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            }
        }
        Ok(())
    }

    /// Create a project partition. Creating an existing partition is fine.
    pub fn create_project_dir(&self, identifier: &str) -> Result<PathBuf> {
        let dir = self.project_dir(identifier);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create project directory: {}", dir.display()))?;
        Ok(dir)
    }

    /// Create the `issues/` subdirectory of a project partition.
    pub fn create_issue_dir(&self, identifier: &str) -> Result<PathBuf> {
        let dir = self.issue_dir(identifier);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create issue directory: {}", dir.display()))?;
        Ok(dir)
    }

    pub fn create_image_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.image_dir).with_context(|| {
            format!("Failed to create image directory: {}", self.image_dir.display())
        })
    }

    /// Find synchronized project partitions by walking the data root for
    /// issue snapshot files, in sorted path order.
    pub fn discover_snapshots(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = WalkDir::new(&self.data_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() == ISSUES_FILENAME)
            .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
            .collect();
        dirs.sort();
        dirs
    }
}
