//! Chat platform adapters.
//!
//! Each supported platform implements [`Messenger`]: it recognizes its own
//! webhook payload shape, extracts the query text, and renders results in
//! the platform's native response format. The dispatcher stays platform
//! agnostic and talks to whichever messenger claims the payload.

mod hipchat;
mod slack;
mod types;

pub use hipchat::HipChatMessenger;
pub use slack::SlackMessenger;
pub use types::{
    BotResponse, HipChatCard, HipChatCardAttribute, HipChatCardAttributeValue,
    HipChatCardDescription, HipChatCardIcon, HipChatColor, HipChatResponse, SlackAttachment,
    SlackField, SlackResponse, SlackResponseType,
};

use serde_json::Value;

use crate::restaurant::Restaurant;

/// The slash command every inbound message must carry.
pub const COMMAND: &str = "/10bis";

/// Reply for payloads no messenger recognizes.
pub const INVALID_MESSAGE: &str = "Invalid Message";

/// Reply when the upstream search cannot be reached.
pub const SEARCH_UNAVAILABLE: &str =
    "Failed to reach the restaurant search service, please try again later";

/// Base text for empty search results.
pub const NOT_FOUND: &str = "No Restaurants Found";

/// Reply for an empty pool totals listing.
pub const NO_POOL_ORDERS: &str = "No pool order restaurants found";

/// Usage text sent for bare commands, in both languages the office speaks.
pub const DEFAULT_USAGE: &str = "To search for a restaurant: /10bis <name>\n\
For an exact name match wrap it in quotes: /10bis \"<name>\"\n\
For accumulated pool orders: /10bis total\n\
לחיפוש מסעדה: /10bis <שם מסעדה>\n\
לחיפוש מדויק: /10bis \"<שם מסעדה>\"\n\
להזמנות פול שהצטברו: /10bis total";

/// A chat platform adapter: payload recognition plus response rendering.
pub trait Messenger: Send + Sync {
    /// Platform name for logging and metrics.
    fn name(&self) -> &str;

    /// Whether this payload is a well-formed command for this platform.
    fn is_valid_message(&self, payload: &Value) -> bool;

    /// Extract the raw query text following the command token.
    ///
    /// `None` means the expected field is missing or not a string;
    /// `Some("")` is a present-but-empty query. The distinction decides
    /// between an error reply and the usage reply.
    fn restaurant_name(&self, payload: &Value) -> Option<String>;

    /// The usage/help reply.
    fn default_response(&self) -> BotResponse;

    /// The no-results reply, optionally naming the query that found nothing.
    fn error_response(&self, name: Option<&str>) -> BotResponse;

    /// Render a post-processed search result list.
    fn search_response(&self, restaurants: &[Restaurant]) -> BotResponse;

    /// Render a pool totals listing. An empty slice renders the
    /// no-pool-orders reply.
    fn total_orders_response(&self, restaurants: &[Restaurant]) -> BotResponse;
}

pub(crate) fn found_headline(count: usize) -> String {
    format!("Found {} restaurants", count)
}

pub(crate) fn not_found_text(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} for: {}", NOT_FOUND, name),
        None => NOT_FOUND.to_string(),
    }
}

/// Cuisine and address joined for card and attachment descriptions.
pub(crate) fn describe(restaurant: &Restaurant) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(cuisine) = restaurant.restaurant_cuisine_list.as_deref() {
        if !cuisine.is_empty() {
            parts.push(cuisine);
        }
    }
    if let Some(address) = restaurant.restaurant_address.as_deref() {
        if !address.is_empty() {
            parts.push(address);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Numbered list line for multi-result text replies.
pub(crate) fn list_line(index: usize, restaurant: &Restaurant) -> String {
    match restaurant.restaurant_address.as_deref() {
        Some(address) if !address.is_empty() => {
            format!("{}. {} ({})", index, restaurant.restaurant_name, address)
        }
        _ => format!("{}. {}", index, restaurant.restaurant_name),
    }
}

/// Numbered list line for multi-result pool totals replies.
pub(crate) fn totals_line(index: usize, restaurant: &Restaurant) -> String {
    format!(
        "{}. {} - minimum order: {}, pool sum: {}",
        index,
        restaurant.restaurant_name,
        restaurant.minimum_order.as_deref().unwrap_or("-"),
        restaurant.pool_sum.as_deref().unwrap_or("-"),
    )
}
