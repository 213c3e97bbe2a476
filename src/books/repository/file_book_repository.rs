use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::InventoryResult;
use crate::core::repository::Repository;

// FileBookRepository persists the whole catalog as one JSON array at a fixed
// path. The process owns the file exclusively for its lifetime; there is no
// locking against other processes.
#[derive(Debug)]
pub struct FileBookRepository {
    storage_path: PathBuf,
}

impl FileBookRepository {
    pub(crate) fn new(storage_path: &Path) -> Self {
        // Directory creation failure is not fatal; the store keeps running
        // with an empty in-memory catalog and saves keep failing loudly.
        if let Some(parent) = storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = fs::create_dir_all(parent) {
                    error!("failed to create storage directory {}: {}", parent.display(), err);
                }
            }
        }
        Self {
            storage_path: storage_path.to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for FileBookRepository {
    fn load_all(&self) -> InventoryResult<Vec<BookEntity>> {
        // A catalog that was never saved is an empty catalog, not an error.
        if !self.storage_path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(self.storage_path.as_path())?;
        let books = serde_json::from_str::<Vec<BookEntity>>(contents.as_str())?;
        Ok(books)
    }

    fn save_all(&self, entities: &[BookEntity]) -> InventoryResult<()> {
        let json = serde_json::to_string_pretty(entities)?;
        fs::write(self.storage_path.as_path(), json)?;
        Ok(())
    }
}

impl BookRepository for FileBookRepository {
    fn storage_path(&self) -> &Path {
        self.storage_path.as_path()
    }
}
