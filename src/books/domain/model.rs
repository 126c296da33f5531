use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

/// A single copy of a book held by a library.
///
/// The checked-out flag is private: it only changes through [`BookEntity::check_out`]
/// and [`BookEntity::return_item`], and both report whether the transition happened.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BookEntity {
    title: String,
    author: String,
    checked_out: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            checked_out: false,
        }
    }

    /// Marks the book as checked out. Returns `false` and leaves the book untouched
    /// if it is already out.
    pub fn check_out(&mut self) -> bool {
        if self.checked_out {
            return false;
        }
        self.checked_out = true;
        true
    }

    /// Marks the book as returned. Returns `false` if it was not checked out.
    pub fn return_item(&mut self) -> bool {
        if !self.checked_out {
            return false;
        }
        self.checked_out = false;
        true
    }

    pub fn is_available(&self) -> bool {
        !self.checked_out
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_checked_out(self.checked_out)
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
