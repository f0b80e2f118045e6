// Filesystem repository implementation for upower history files
use crate::application::history_repository::HistoryRepository;
use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FsHistoryRepository {
    base_dir: PathBuf,
    file_glob: String,
}

impl FsHistoryRepository {
    pub fn new(base_dir: impl Into<PathBuf>, file_glob: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_glob: file_glob.into(),
        }
    }
}

impl HistoryRepository for FsHistoryRepository {
    fn search_root(&self) -> &Path {
        &self.base_dir
    }

    fn list_history_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(&self.file_glob)
            .with_context(|| format!("Invalid history file pattern `{}`", self.file_glob))?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.base_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to scan {}", self.base_dir.display())
                    });
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if pattern.matches(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(
            "Found {} history files matching {} under {}",
            files.len(),
            self.file_glob,
            self.base_dir.display()
        );

        files.sort();
        Ok(files)
    }

    fn read_history(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file {}", path.display()))
    }
}
