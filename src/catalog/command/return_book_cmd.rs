use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::{lock_catalog, SharedCatalog};
use crate::catalog::dto::messages;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::gateway::events::{EventPublisher, publish_after_change};

pub struct ReturnBookCommand {
    branch_id: String,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl ReturnBookCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog, events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog,
            events_publisher,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = messages::returned(book.title.as_str());
        Self {
            book,
            message,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let book = lock_catalog(&self.catalog)?.return_book(req.title.as_str())?;
        publish_after_change(self.events_publisher.as_ref(), &DomainEvent::returned(self.branch_id.as_str(), &book));
        let res = ReturnBookCommandResponse::new(book);
        info!(branch = self.branch_id.as_str(), "{}", res.message);
        Ok(res)
    }
}
