use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Conflict {
        message: String,
    },
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => message,
            CommandError::Conflict { message } => message,
            CommandError::InvalidArgument { message, .. } => message,
            CommandError::Validation { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Runtime { message, .. } => message,
        }
    }
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            // checkout and return are both rejected because the book is already
            // in the requested state
            LibraryError::AlreadyCheckedOut { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::NotCheckedOut { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::InvalidArgument { message, reason_code } => {
                CommandError::InvalidArgument { message, reason_code }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}
