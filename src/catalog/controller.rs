use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::catalog::command::count_books_cmd::{CountBooksCommand, CountBooksCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::dto::ListingKind;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_library_error, json_to_server_error, ServerError};
use crate::core::library::LibraryResult;

// A request names its action and carries that command's fields alongside it,
// e.g. {"action": "checkout", "title": "Dune"}.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum CatalogRequest {
    Add(AddBookCommandRequest),
    Checkout(CheckoutBookCommandRequest),
    Return(ReturnBookCommandRequest),
    Available,
    All,
    Count,
}

fn to_json<T: serde::Serialize>(res: T) -> Result<Value, ServerError> {
    serde_json::to_value(res).map_err(|err| ServerError::new("serialization", err.to_string().as_str(), false))
}

fn parse_request(json: Value) -> LibraryResult<CatalogRequest> {
    serde_json::from_value(json).map_err(json_to_library_error)
}

pub fn handle(state: &AppState, json: Value) -> Result<Value, ServerError> {
    let req = parse_request(json).map_err(CommandError::from)?;
    let catalog = state.catalog.clone();
    let publisher = state.events_publisher.clone();
    match req {
        CatalogRequest::Add(req) => {
            to_json(AddBookCommand::new(&state.config, catalog, publisher).execute(req)?)
        }
        CatalogRequest::Checkout(req) => {
            to_json(CheckoutBookCommand::new(&state.config, catalog, publisher).execute(req)?)
        }
        CatalogRequest::Return(req) => {
            to_json(ReturnBookCommand::new(&state.config, catalog, publisher).execute(req)?)
        }
        CatalogRequest::Available => {
            to_json(ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::new(ListingKind::Available))?)
        }
        CatalogRequest::All => {
            to_json(ListBooksCommand::new(catalog).execute(ListBooksCommandRequest::new(ListingKind::All))?)
        }
        CatalogRequest::Count => {
            to_json(CountBooksCommand::new(catalog).execute(CountBooksCommandRequest::default())?)
        }
    }
}

/// Handles one line of input and renders the outcome as a single JSON line.
pub fn handle_line(state: &AppState, line: &str) -> String {
    let res = serde_json::from_str::<Value>(line)
        .map_err(json_to_server_error)
        .and_then(|json| handle(state, json));
    let out = match res {
        Ok(data) => json!({ "status": "ok", "data": data }),
        Err(err) => {
            warn!(code = err.code, "{}", err.message);
            json!({ "status": "error", "error": err })
        }
    };
    out.to_string()
}
