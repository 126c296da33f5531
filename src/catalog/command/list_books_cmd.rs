use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::catalog::domain::{lock_catalog, SharedCatalog};
use crate::catalog::dto::{CatalogListing, ListingKind};
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog: SharedCatalog,
}

impl ListBooksCommand {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub kind: ListingKind,
}

impl ListBooksCommandRequest {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub listing: CatalogListing,
    pub empty: bool,
    pub message: String,
}

impl ListBooksCommandResponse {
    pub fn new(listing: CatalogListing) -> Self {
        Self {
            empty: listing.is_empty(),
            message: listing.to_string(),
            listing,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let catalog = lock_catalog(&self.catalog)?;
        let listing = match req.kind {
            ListingKind::Available => catalog.list_available_books(),
            ListingKind::All => catalog.list_all_books(),
        };
        debug!(kind = ?req.kind, size = listing.len(), "listed books");
        Ok(ListBooksCommandResponse::new(listing))
    }
}
