use serde::{Deserialize, Serialize};
use crate::catalog::domain::{lock_catalog, SharedCatalog};
use crate::core::command::{Command, CommandError};

pub struct CountBooksCommand {
    catalog: SharedCatalog,
}

impl CountBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CountBooksCommandRequest {}

#[derive(Debug, PartialEq, Serialize)]
pub struct CountBooksCommandResponse {
    pub book_count: usize,
    pub available_count: usize,
}

impl Command<CountBooksCommandRequest, CountBooksCommandResponse> for CountBooksCommand {
    fn execute(&self, _req: CountBooksCommandRequest) -> Result<CountBooksCommandResponse, CommandError> {
        let catalog = lock_catalog(&self.catalog)?;
        Ok(CountBooksCommandResponse {
            book_count: catalog.get_book_count(),
            available_count: catalog.get_available_count(),
        })
    }
}
