use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::inventory::domain::CatalogService;
use crate::inventory::domain::service::CatalogServiceImpl;

pub(crate) fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repository = create_book_repository(config);
    Box::new(CatalogServiceImpl::new(config, book_repository))
}
