//! Webhook message dispatch.

mod dispatcher;
mod query;

pub use dispatcher::{DispatchOutcome, DispatchStatus, Dispatcher, ReplyBody};
pub use query::{parse_query, ParsedQuery};
