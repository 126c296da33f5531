use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

// Book is the read-only view shared by catalog records and their snapshots; titles
// double as identifiers within a library.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }
}
