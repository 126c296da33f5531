pub mod service;

use std::sync::{Arc, Mutex, MutexGuard};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::dto::CatalogListing;
use crate::core::library::{LibraryError, LibraryResult};

pub trait CatalogService: Send {
    fn add_book(&mut self, book: BookEntity) -> BookDto;
    fn check_out_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn list_available_books(&self) -> CatalogListing;
    fn list_all_books(&self) -> CatalogListing;
    fn get_book_count(&self) -> usize;
    fn get_available_count(&self) -> usize;
}

// Catalog handle shared by commands; the mutex serializes checkout and return
// across callers.
pub type SharedCatalog = Arc<Mutex<dyn CatalogService>>;

pub fn lock_catalog(catalog: &SharedCatalog) -> LibraryResult<MutexGuard<'_, dyn CatalogService + 'static>> {
    catalog.lock()
        .map_err(|err| LibraryError::runtime(format!("catalog lock poisoned {:?}", err).as_str(), None))
}
