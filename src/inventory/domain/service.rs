use tracing::{debug, error, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{InventoryError, InventoryResult};
use crate::inventory::domain::CatalogService;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    books: Vec<BookEntity>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        // Fail-empty: a catalog file that cannot be parsed is discarded and
        // the store starts from an empty sequence. The next save overwrites
        // the unreadable file.
        let books = match book_repository.load_all() {
            Ok(books) => books,
            Err(err) => {
                warn!("discarding unreadable catalog at {}: {}",
                      book_repository.storage_path().display(), err);
                Vec::new()
            }
        };
        Self {
            book_repository,
            books,
        }
    }

    // Full synchronous rewrite after every mutation. I/O failures are logged
    // and swallowed, so on-disk state may lag the in-memory catalog.
    fn persist(&self) {
        if let Err(err) = self.book_repository.save_all(&self.books) {
            error!("failed to save catalog to {}: {}",
                   self.book_repository.storage_path().display(), err);
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) {
        let entity = BookEntity::from(book);
        if self.books.iter().any(|b| b.isbn == entity.isbn) {
            debug!("dropping duplicate book {}", entity.id());
            return;
        }
        self.books.push(entity);
        self.persist();
    }

    fn search_by_title(&self, query: &str) -> Vec<BookDto> {
        let q = query.trim().to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(q.as_str()))
            .map(BookDto::from)
            .collect()
    }

    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto> {
        let isbn = isbn.trim();
        self.books.iter().find(|b| b.isbn == isbn).map(BookDto::from)
    }

    fn issue_book(&mut self, isbn: &str) -> InventoryResult<BookDto> {
        let isbn = isbn.trim();
        let dto = match self.books.iter_mut().find(|b| b.isbn == isbn) {
            Some(book) => {
                if !book.issue() {
                    return Err(InventoryError::invalid_state(
                        format!("book {} is not available", isbn).as_str()));
                }
                BookDto::from(&*book)
            }
            None => {
                return Err(InventoryError::not_found(
                    format!("book {} not found", isbn).as_str()));
            }
        };
        self.persist();
        Ok(dto)
    }

    fn return_book(&mut self, isbn: &str) -> InventoryResult<BookDto> {
        let isbn = isbn.trim();
        let dto = match self.books.iter_mut().find(|b| b.isbn == isbn) {
            Some(book) => {
                if !book.give_back() {
                    return Err(InventoryError::invalid_state(
                        format!("book {} is not issued", isbn).as_str()));
                }
                BookDto::from(&*book)
            }
            None => {
                return Err(InventoryError::not_found(
                    format!("book {} not found", isbn).as_str()));
            }
        };
        self.persist();
        Ok(dto)
    }

    fn display_all(&self) -> Vec<String> {
        self.books.iter().map(|b| b.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use crate::books::dto::BookDto;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, InventoryError};
    use crate::inventory::domain::CatalogService;
    use crate::inventory::factory;

    fn create_service(path: &Path) -> Box<dyn CatalogService> {
        let config = Configuration::new(path.to_str());
        factory::create_catalog_service(&config)
    }

    #[test]
    fn test_should_start_empty_for_missing_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let svc = create_service(dir.path().join("catalog.json").as_path());
        assert!(svc.display_all().is_empty());
    }

    #[test]
    fn test_should_add_book_and_drop_duplicates() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut svc = create_service(dir.path().join("catalog.json").as_path());

        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));
        svc.add_book(&BookDto::new("Dune Messiah", "Herbert", "111"));
        svc.add_book(&BookDto::new("The Lord of the Rings", "Tolkien", "222"));
        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));

        let all = svc.display_all();
        assert_eq!(2, all.len());
        assert_eq!("'Dune' by Herbert (ISBN: 111) - available", all[0].as_str());
        assert_eq!("'The Lord of the Rings' by Tolkien (ISBN: 222) - available", all[1].as_str());
    }

    #[test]
    fn test_should_search_by_title_case_insensitive() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut svc = create_service(dir.path().join("catalog.json").as_path());

        svc.add_book(&BookDto::new("The Lord of the Rings", "Tolkien", "222"));
        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));

        let res = svc.search_by_title("lord");
        assert_eq!(1, res.len());
        assert_eq!("The Lord of the Rings", res[0].title.as_str());

        // empty query is a substring of every title
        assert_eq!(2, svc.search_by_title("").len());
        assert!(svc.search_by_title("foundation").is_empty());
    }

    #[test]
    fn test_should_search_by_isbn_with_trimming() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut svc = create_service(dir.path().join("catalog.json").as_path());

        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));

        let book = svc.search_by_isbn(" 111 ").expect("should find book");
        assert_eq!("Dune", book.title.as_str());
        assert!(svc.search_by_isbn("999").is_none());
    }

    #[test]
    fn test_should_issue_and_return_book() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut svc = create_service(dir.path().join("catalog.json").as_path());

        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));
        assert_eq!(BookStatus::Available, svc.search_by_isbn("111").expect("should find book").status);

        let issued = svc.issue_book("111").expect("should issue book");
        assert_eq!(BookStatus::Issued, issued.status);

        let again = svc.issue_book("111");
        assert!(matches!(again, Err(InventoryError::InvalidState { message: _ })));
        assert_eq!(BookStatus::Issued, svc.search_by_isbn("111").expect("should find book").status);

        let returned = svc.return_book("111").expect("should return book");
        assert_eq!(BookStatus::Available, returned.status);

        let again = svc.return_book("111");
        assert!(matches!(again, Err(InventoryError::InvalidState { message: _ })));
    }

    #[test]
    fn test_should_fail_issue_and_return_for_unknown_isbn() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let mut svc = create_service(dir.path().join("catalog.json").as_path());

        assert!(matches!(svc.issue_book("999"), Err(InventoryError::NotFound { message: _ })));
        assert!(matches!(svc.return_book("999"), Err(InventoryError::NotFound { message: _ })));
    }

    #[test]
    fn test_should_round_trip_catalog_across_restarts() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        {
            let mut svc = create_service(path.as_path());
            svc.add_book(&BookDto::new("The Lord of the Rings", "Tolkien", "222"));
            svc.add_book(&BookDto::new("Dune", "Herbert", "111"));
            let _ = svc.issue_book("222").expect("should issue book");
        }

        let svc = create_service(path.as_path());
        let all = svc.display_all();
        assert_eq!(2, all.len());
        assert_eq!("'The Lord of the Rings' by Tolkien (ISBN: 222) - issued", all[0].as_str());
        assert_eq!("'Dune' by Herbert (ISBN: 111) - available", all[1].as_str());
    }

    #[test]
    fn test_should_reset_to_empty_on_corrupt_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        fs::write(path.as_path(), "{not json").expect("should write file");

        let mut svc = create_service(path.as_path());
        assert!(svc.display_all().is_empty());

        // the next mutation overwrites the corrupt file
        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));
        let svc = create_service(path.as_path());
        assert_eq!(1, svc.display_all().len());
    }

    #[test]
    fn test_should_persist_every_mutation() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("catalog.json");
        let mut svc = create_service(path.as_path());

        svc.add_book(&BookDto::new("Dune", "Herbert", "111"));
        assert_eq!(1, create_service(path.as_path()).display_all().len());

        let _ = svc.issue_book("111").expect("should issue book");
        assert_eq!(BookStatus::Issued,
                   create_service(path.as_path()).search_by_isbn("111").expect("should find book").status);

        let _ = svc.return_book("111").expect("should return book");
        assert_eq!(BookStatus::Available,
                   create_service(path.as_path()).search_by_isbn("111").expect("should find book").status);
    }
}
