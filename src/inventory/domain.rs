pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::InventoryResult;

// CatalogService is the catalog store: an in-memory ordered sequence of book
// records kept synchronized with a single JSON file. Persistence failures
// never cross this boundary; they are logged and absorbed inside the store.
pub(crate) trait CatalogService: Sync + Send {
    // appends and persists; silently drops the record when the isbn is taken
    fn add_book(&mut self, book: &BookDto);
    fn search_by_title(&self, query: &str) -> Vec<BookDto>;
    fn search_by_isbn(&self, isbn: &str) -> Option<BookDto>;
    fn issue_book(&mut self, isbn: &str) -> InventoryResult<BookDto>;
    fn return_book(&mut self, isbn: &str) -> InventoryResult<BookDto>;
    fn display_all(&self) -> Vec<String>;
}
