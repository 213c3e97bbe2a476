use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::core::domain::Configuration;

pub(crate) fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    Box::new(FileBookRepository::new(config.storage_path()))
}
