use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every event to the tracing pipeline and keeps nothing
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(),
            key = event.key.as_str(), data = json.as_str(), "published catalog event");
        Ok(())
    }

    fn published(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(vec![])
    }
}
