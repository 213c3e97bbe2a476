use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct SearchBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) title: String,
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.search_by_title(req.title.as_str());
        Ok(SearchBooksCommandResponse { books })
    }
}
