use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookDto is a detached snapshot of a catalog record handed out by queries and events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, status: BookStatus) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            book_status: status,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.title(), other.author(), other.status())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
