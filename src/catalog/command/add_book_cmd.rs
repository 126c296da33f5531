use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::{lock_catalog, SharedCatalog};
use crate::catalog::dto::messages;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::{EventPublisher, publish_after_change};

pub struct AddBookCommand {
    branch_id: String,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl AddBookCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog, events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog,
            events_publisher,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("book title must not be blank", Some("title".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("book author must not be blank", Some("author".to_string())));
        }
        Ok(BookEntity::new(self.title.as_str(), self.author.as_str()))
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = messages::added(book.title.as_str());
        Self {
            book,
            message,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let entity = req.build_book()?;
        let book = lock_catalog(&self.catalog)?.add_book(entity);
        publish_after_change(self.events_publisher.as_ref(), &DomainEvent::added(self.branch_id.as_str(), &book));
        let res = AddBookCommandResponse::new(book);
        info!(branch = self.branch_id.as_str(), "{}", res.message);
        Ok(res)
    }
}
