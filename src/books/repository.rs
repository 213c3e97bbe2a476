pub mod file_book_repository;

use std::path::Path;
use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<BookEntity> {
    // the resolved location of the persisted catalog, for diagnostics
    fn storage_path(&self) -> &Path;
}
