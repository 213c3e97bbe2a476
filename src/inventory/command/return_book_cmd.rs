use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) isbn: String,
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let book = self.catalog_service.return_book(req.isbn.as_str())?;
        Ok(ReturnBookCommandResponse { book })
    }
}
