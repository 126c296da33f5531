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

pub struct CheckoutBookCommand {
    branch_id: String,
    catalog: SharedCatalog,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutBookCommand {
    pub fn new(config: &Configuration, catalog: SharedCatalog, events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog,
            events_publisher,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = messages::checked_out(book.title.as_str());
        Self {
            book,
            message,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let book = lock_catalog(&self.catalog)?.check_out_book(req.title.as_str())?;
        publish_after_change(self.events_publisher.as_ref(), &DomainEvent::checked_out(self.branch_id.as_str(), &book));
        let res = CheckoutBookCommandResponse::new(book);
        info!(branch = self.branch_id.as_str(), "{}", res.message);
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::BookStatus;
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::gateway::events::testing::UnavailablePublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_checkout_book() {
        let catalog = factory::create_catalog_service_with(vec![BookEntity::new("Dune", "Herbert")]);
        let publisher = create_publisher(GatewayPublisherVia::Memory);
        let cmd = CheckoutBookCommand::new(&Configuration::new("test"), catalog, publisher.clone());

        let res = cmd.execute(CheckoutBookCommandRequest::new("Dune")).expect("should checkout book");
        assert_eq!(BookStatus::CheckedOut, res.book.book_status);
        assert_eq!("'Dune' has been checked out.", res.message.as_str());

        let err = cmd.execute(CheckoutBookCommandRequest::new("Dune")).expect_err("should reject checkout");
        assert_eq!(CommandError::Conflict { message: "'Dune' is already checked out.".to_string() }, err);

        let events = publisher.published().expect("should list events");
        assert_eq!(1, events.len());
        assert_eq!(DomainEventType::CheckedOut, events[0].kind);
    }

    #[test]
    fn test_should_not_checkout_missing_book() {
        let catalog = factory::create_catalog_service();
        let publisher = create_publisher(GatewayPublisherVia::Memory);
        let cmd = CheckoutBookCommand::new(&Configuration::new("test"), catalog, publisher.clone());

        let err = cmd.execute(CheckoutBookCommandRequest::new("Nonexistent")).expect_err("should not find");
        assert_eq!("Book 'Nonexistent' not found in the library.", err.message());
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert!(publisher.published().expect("should list events").is_empty());
    }

    #[test]
    fn test_should_checkout_and_return_when_events_unavailable() {
        let config = Configuration::new("test");
        let catalog = factory::create_catalog_service_with(vec![BookEntity::new("Dune", "Herbert")]);
        let checkout_cmd = CheckoutBookCommand::new(&config, catalog.clone(), Arc::new(UnavailablePublisher {}));
        let return_cmd = ReturnBookCommand::new(&config, catalog, Arc::new(UnavailablePublisher {}));

        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new("Dune")).expect("should checkout book");
        assert_eq!(BookStatus::CheckedOut, res.book.book_status);
        let res = return_cmd.execute(ReturnBookCommandRequest::new("Dune")).expect("should return book");
        assert_eq!("'Dune' has been returned.", res.message.as_str());
    }
}
