use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
    fn published(&self) -> Result<Vec<DomainEvent>, LibraryError>;
}

// Events trail a catalog change that is already kept, so a failed publish is only
// logged and never fails the change.
pub fn publish_after_change(publisher: &dyn EventPublisher, event: &DomainEvent) {
    if let Err(err) = publisher.publish(event) {
        warn!(event_id = event.event_id.as_str(), name = event.name.as_str(),
            key = event.key.as_str(), "failed to publish catalog event {}", err);
    }
}


#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::events::DomainEvent;
    use crate::core::library::BookStatus;
    use crate::gateway::events::{EventPublisher, publish_after_change};
    use crate::gateway::events::testing::UnavailablePublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_after_change() {
        let publisher = MemoryPublisher::new();
        let book = BookDto::new("Dune", "Herbert", BookStatus::Available);
        publish_after_change(&publisher, &DomainEvent::added("test", &book));
        assert_eq!(1, publisher.published().expect("should list").len());
    }

    #[test]
    fn test_should_swallow_publish_failure() {
        let book = BookDto::new("Dune", "Herbert", BookStatus::Available);
        publish_after_change(&UnavailablePublisher {}, &DomainEvent::added("test", &book));
    }
}
