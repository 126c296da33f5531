use std::sync::Mutex;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order so callers can inspect them
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(vec![]),
        }
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("events lock poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }

    fn published(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        self.events.lock()
            .map(|events| events.clone())
            .map_err(|err| LibraryError::runtime(format!("events lock poisoned {:?}", err).as_str(), None))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::BookStatus;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_in_order() {
        let publisher = MemoryPublisher::new();
        let book = BookDto::new("Dune", "Herbert", BookStatus::Available);
        let _ = publisher.publish(&DomainEvent::added("test", &book)).expect("should publish");
        let _ = publisher.publish(&DomainEvent::checked_out("test", &book)).expect("should publish");

        let events = publisher.published().expect("should list");
        assert_eq!(2, events.len());
        assert_eq!(DomainEventType::Added, events[0].kind);
        assert_eq!(DomainEventType::CheckedOut, events[1].kind);
    }
}
