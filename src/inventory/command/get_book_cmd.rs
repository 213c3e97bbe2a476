use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct GetBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> GetBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

#[derive(Debug)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl<'a> Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'a> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        match self.catalog_service.search_by_isbn(req.isbn.as_str()) {
            Some(book) => Ok(GetBookCommandResponse { book }),
            None => Err(CommandError::NotFound {
                message: format!("book {} not found", req.isbn.trim()),
            }),
        }
    }
}
