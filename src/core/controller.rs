use std::sync::Arc;
use serde::Serialize;
use serde_json::error::Category;
use crate::catalog::domain::SharedCatalog;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: SharedCatalog,
    pub events_publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration, via: GatewayPublisherVia) -> AppState {
        AppState {
            config,
            catalog: create_catalog_service(),
            events_publisher: create_publisher(via),
        }
    }
}

// ServerError is the error half of every controller response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerError {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

impl ServerError {
    pub fn new(code: &'static str, message: &str, retryable: bool) -> Self {
        Self {
            code,
            message: message.to_string(),
            retryable,
        }
    }
}

// Request bodies that fail to parse or do not match a request shape are invalid
// arguments, tagged with the serde error category.
pub fn json_to_library_error(err: serde_json::Error) -> LibraryError {
    let category = match err.classify() {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    };
    LibraryError::invalid_argument(format!("{}", err).as_str(), Some(category.to_string()))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::from(CommandError::from(json_to_library_error(err)))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                ServerError::new("not_found", message.as_str(), false)
            }
            CommandError::Conflict { message } => {
                ServerError::new("conflict", message.as_str(), false)
            }
            CommandError::InvalidArgument { message, .. } => {
                ServerError::new("invalid_argument", message.as_str(), false)
            }
            CommandError::Validation { message, .. } => {
                ServerError::new("validation", message.as_str(), false)
            }
            CommandError::Serialization { message } => {
                ServerError::new("serialization", message.as_str(), false)
            }
            CommandError::Runtime { message, retryable, .. } => {
                ServerError::new("runtime", message.as_str(), retryable)
            }
        }
    }
}
