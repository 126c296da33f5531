use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

// Status lines reported back to whoever drives the catalog.
pub mod messages {
    pub fn checked_out(title: &str) -> String {
        format!("'{}' has been checked out.", title)
    }

    pub fn already_checked_out(title: &str) -> String {
        format!("'{}' is already checked out.", title)
    }

    pub fn returned(title: &str) -> String {
        format!("'{}' has been returned.", title)
    }

    pub fn not_checked_out(title: &str) -> String {
        format!("'{}' was not checked out.", title)
    }

    pub fn not_found(title: &str) -> String {
        format!("Book '{}' not found in the library.", title)
    }

    pub fn added(title: &str) -> String {
        format!("'{}' has been added.", title)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ListingKind {
    Available,
    All,
}

// CatalogEntry pairs a book with the status label it is listed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub book: BookDto,
    pub status: String,
}

impl CatalogEntry {
    pub fn new(book: BookDto) -> Self {
        let status = book.book_status.label().to_string();
        Self { book, status }
    }
}

/// Ordered result of a catalog listing query.
///
/// An empty listing is a distinct outcome rather than an empty print-out: check
/// [`CatalogListing::is_empty`] or render it with `Display`, which yields the
/// "no books" line for the listing kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListing {
    pub kind: ListingKind,
    pub entries: Vec<CatalogEntry>,
}

impl CatalogListing {
    pub fn new(kind: ListingKind, books: Vec<BookDto>) -> Self {
        Self {
            kind,
            entries: books.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn books(&self) -> Vec<&BookDto> {
        self.entries.iter().map(|e| &e.book).collect()
    }

    pub fn empty_message(&self) -> &'static str {
        match self.kind {
            ListingKind::Available => "No books are currently available.",
            ListingKind::All => "The library has no books.",
        }
    }
}

impl Display for CatalogListing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", self.empty_message());
        }
        match self.kind {
            ListingKind::Available => {
                let lines: Vec<String> = self.entries.iter().map(|e| e.book.to_string()).collect();
                write!(f, "{}", lines.join("\n"))
            }
            ListingKind::All => {
                write!(f, "All books in the library:")?;
                for entry in &self.entries {
                    write!(f, "\n{} - {}", entry.book, entry.status)?;
                }
                Ok(())
            }
        }
    }
}
