use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// DomainEventType defines the catalog transition an event records
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    CheckedOut,
    Returned,
}

// DomainEvent abstracts a change to a book in the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub branch_id: String,
    pub key: String,
    pub kind: DomainEventType,
    pub book: BookDto,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added(branch_id: &str, book: &BookDto) -> Self {
        Self::build("book_added", branch_id, DomainEventType::Added, book)
    }

    pub fn checked_out(branch_id: &str, book: &BookDto) -> Self {
        Self::build("book_checkout", branch_id, DomainEventType::CheckedOut, book)
    }

    pub fn returned(branch_id: &str, book: &BookDto) -> Self {
        Self::build("book_returned", branch_id, DomainEventType::Returned, book)
    }

    fn build(name: &str, branch_id: &str, kind: DomainEventType, book: &BookDto) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            branch_id: branch_id.to_string(),
            key: book.id(),
            kind,
            book: book.clone(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
