use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
    }
}

#[derive(Debug)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        // duplicate isbns are silently dropped by the store
        self.catalog_service.add_book(&book);
        Ok(AddBookCommandResponse::new(book))
    }
}
