use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct IssueBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> IssueBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct IssueBookCommandRequest {
    pub(crate) isbn: String,
}

#[derive(Debug)]
pub(crate) struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl<'a> Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'a> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        let book = self.catalog_service.issue_book(req.isbn.as_str())?;
        Ok(IssueBookCommandResponse { book })
    }
}
