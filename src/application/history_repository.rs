// Repository trait for charge history access
use std::path::{Path, PathBuf};

pub trait HistoryRepository {
    /// Directory that discovery starts from, for user-facing messages
    fn search_root(&self) -> &Path;

    /// All history files found under the search root, sorted by path
    fn list_history_files(&self) -> anyhow::Result<Vec<PathBuf>>;

    /// Raw text of one history file
    fn read_history(&self, path: &Path) -> anyhow::Result<String>;
}
