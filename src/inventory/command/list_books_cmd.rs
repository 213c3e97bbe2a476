use crate::core::command::{Command, CommandError};
use crate::inventory::domain::CatalogService;

pub(crate) struct ListBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug)]
pub(crate) struct ListBooksCommandResponse {
    // one rendered line per record, in catalog order
    pub lines: Vec<String>,
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let lines = self.catalog_service.display_all();
        Ok(ListBooksCommandResponse { lines })
    }
}
