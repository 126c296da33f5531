use tracing::{debug, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{CatalogListing, ListingKind, messages};
use crate::core::library::{LibraryError, LibraryResult};

/// In-memory catalog of books kept in insertion order.
///
/// Titles are not unique. Every lookup by title resolves to the first matching
/// book that was added.
#[derive(Debug, Default, Clone)]
pub struct Library {
    books: Vec<BookEntity>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
        }
    }

    fn find_first(&mut self, title: &str) -> LibraryResult<&mut BookEntity> {
        self.books.iter_mut()
            .find(|book| book.title() == title)
            .ok_or_else(|| LibraryError::not_found(messages::not_found(title).as_str()))
    }

    fn snapshot<P>(&self, predicate: P) -> Vec<BookDto>
        where P: Fn(&BookEntity) -> bool {
        self.books.iter().filter(|b| predicate(*b)).map(BookDto::from).collect()
    }
}

impl CatalogService for Library {
    fn add_book(&mut self, book: BookEntity) -> BookDto {
        let dto = BookDto::from(&book);
        self.books.push(book);
        debug!(title = dto.title.as_str(), count = self.books.len(), "book added to catalog");
        dto
    }

    fn check_out_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let book = self.find_first(title)?;
        if !book.check_out() {
            warn!(title, "book is already checked out");
            return Err(LibraryError::already_checked_out(messages::already_checked_out(title).as_str()));
        }
        Ok(BookDto::from(&*book))
    }

    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let book = self.find_first(title)?;
        if !book.return_item() {
            warn!(title, "book was not checked out");
            return Err(LibraryError::not_checked_out(messages::not_checked_out(title).as_str()));
        }
        Ok(BookDto::from(&*book))
    }

    fn list_available_books(&self) -> CatalogListing {
        CatalogListing::new(ListingKind::Available, self.snapshot(BookEntity::is_available))
    }

    fn list_all_books(&self) -> CatalogListing {
        CatalogListing::new(ListingKind::All, self.snapshot(|_| true))
    }

    fn get_book_count(&self) -> usize {
        self.books.len()
    }

    fn get_available_count(&self) -> usize {
        self.books.iter().filter(|b| b.is_available()).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::Library;
    use crate::catalog::dto::ListingKind;
    use crate::core::library::{BookStatus, LibraryError};

    fn library_with(books: &[(&str, &str)]) -> Library {
        let mut library = Library::new();
        for (title, author) in books {
            let _ = library.add_book(BookEntity::new(title, author));
        }
        library
    }

    #[test]
    fn test_should_add_books_in_order() {
        let library = library_with(&[("Dune", "Herbert"), ("Emma", "Austen")]);
        assert_eq!(2, library.get_book_count());
        let titles: Vec<String> = library.list_all_books().books().iter().map(|b| b.title.to_string()).collect();
        assert_eq!(vec!["Dune".to_string(), "Emma".to_string()], titles);
    }

    #[test]
    fn test_should_checkout_return_dune() {
        let mut library = library_with(&[("Dune", "Herbert")]);

        let book = library.check_out_book("Dune").expect("should checkout");
        assert_eq!(BookStatus::CheckedOut, book.book_status);
        assert_eq!(0, library.get_available_count());

        let err = library.check_out_book("Dune").expect_err("should reject second checkout");
        assert_eq!(LibraryError::already_checked_out("'Dune' is already checked out."), err);

        let book = library.return_book("Dune").expect("should return");
        assert_eq!(BookStatus::Available, book.book_status);

        let available = library.list_available_books();
        assert_eq!(vec![&BookDto::new("Dune", "Herbert", BookStatus::Available)], available.books());
    }

    #[test]
    fn test_should_not_find_in_empty_library() {
        let mut library = Library::new();
        let err = library.check_out_book("Nonexistent").expect_err("should not find");
        assert_eq!(LibraryError::not_found("Book 'Nonexistent' not found in the library."), err);
        let err = library.return_book("Nonexistent").expect_err("should not find");
        assert!(matches!(err, LibraryError::NotFound { .. }));
    }

    #[test]
    fn test_should_not_return_available_book() {
        let mut library = library_with(&[("Dune", "Herbert")]);
        let err = library.return_book("Dune").expect_err("should reject return");
        assert_eq!(LibraryError::not_checked_out("'Dune' was not checked out."), err);
        assert_eq!(1, library.get_available_count());
    }

    #[test]
    fn test_should_pick_first_duplicate_title() {
        let mut library = library_with(&[("X", "First"), ("X", "Second")]);
        let book = library.check_out_book("X").expect("should checkout");
        assert_eq!("First", book.author.as_str());

        let all = library.list_all_books();
        assert_eq!(BookStatus::CheckedOut, all.entries[0].book.book_status);
        assert_eq!(BookStatus::Available, all.entries[1].book.book_status);
        assert_eq!(1, library.get_available_count());

        // the first copy stays selected even though it is out
        let err = library.check_out_book("X").expect_err("should hit first copy");
        assert!(matches!(err, LibraryError::AlreadyCheckedOut { .. }));
    }

    #[test]
    fn test_should_keep_counts_equal_until_checkout() {
        let mut library = Library::new();
        for i in 0..5 {
            let _ = library.add_book(BookEntity::new(format!("title {}", i).as_str(), "author"));
            assert_eq!(library.get_book_count(), library.get_available_count());
        }
        let _ = library.check_out_book("title 3").expect("should checkout");
        assert_eq!(5, library.get_book_count());
        assert_eq!(4, library.get_available_count());
    }

    #[test]
    fn test_should_list_available_in_insertion_order() {
        let mut library = library_with(&[("A", "a"), ("B", "b"), ("C", "c")]);
        let _ = library.check_out_book("B").expect("should checkout");
        let available = library.list_available_books();
        assert_eq!(ListingKind::Available, available.kind);
        assert_eq!("A by a\nC by c", available.to_string());
    }

    #[test]
    fn test_should_signal_empty_listings() {
        let mut library = Library::new();
        assert!(library.list_all_books().is_empty());
        assert!(library.list_available_books().is_empty());

        let _ = library.add_book(BookEntity::new("Dune", "Herbert"));
        let _ = library.check_out_book("Dune").expect("should checkout");
        let available = library.list_available_books();
        assert!(available.is_empty());
        assert_eq!("No books are currently available.", available.to_string());
        assert_eq!("All books in the library:\nDune by Herbert - Checked Out", library.list_all_books().to_string());
    }
}
