use std::sync::{Arc, Mutex};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::service::Library;

pub fn create_catalog_service() -> SharedCatalog {
    Arc::new(Mutex::new(Library::new()))
}

pub fn create_catalog_service_with(books: Vec<BookEntity>) -> SharedCatalog {
    let mut library = Library::new();
    for book in books {
        let _ = library.add_book(book);
    }
    Arc::new(Mutex::new(library))
}
