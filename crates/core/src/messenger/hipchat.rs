//! HipChat webhook handling and response rendering.

use serde_json::Value;
use uuid::Uuid;

use crate::restaurant::Restaurant;

use super::types::{
    HipChatCard, HipChatCardAttribute, HipChatCardAttributeValue, HipChatCardDescription,
    HipChatCardIcon, HipChatColor, HipChatResponse,
};
use super::{
    describe, found_headline, list_line, not_found_text, totals_line, BotResponse, Messenger,
    COMMAND, DEFAULT_USAGE, NO_POOL_ORDERS,
};

/// Messenger for HipChat room webhooks.
///
/// Inbound `room_message` events carry the slash command at
/// `item.message.message`; replies use the room notification shape, with a
/// card attached when there is exactly one restaurant to show.
#[derive(Debug, Default)]
pub struct HipChatMessenger;

impl HipChatMessenger {
    pub fn new() -> Self {
        Self
    }

    fn response(color: HipChatColor, message: String, card: Option<HipChatCard>) -> BotResponse {
        BotResponse::HipChat(HipChatResponse {
            color,
            message,
            notify: false,
            message_format: "text".to_string(),
            card,
        })
    }

    fn card(restaurant: &Restaurant, attributes: Vec<HipChatCardAttribute>) -> HipChatCard {
        HipChatCard {
            style: "application".to_string(),
            format: "medium".to_string(),
            id: Uuid::new_v4().to_string(),
            title: restaurant.restaurant_name.clone(),
            description: HipChatCardDescription {
                value: describe(restaurant).unwrap_or_else(|| restaurant.restaurant_name.clone()),
                format: "text".to_string(),
            },
            icon: restaurant
                .restaurant_logo_url
                .clone()
                .map(|url| HipChatCardIcon { url }),
            url: restaurant.start_order_url.clone(),
            attributes,
        }
    }
}

fn attribute(label: &str, value: &str) -> HipChatCardAttribute {
    HipChatCardAttribute {
        label: label.to_string(),
        value: HipChatCardAttributeValue {
            label: value.to_string(),
        },
    }
}

fn search_attributes(restaurant: &Restaurant) -> Vec<HipChatCardAttribute> {
    let mut attributes = Vec::new();
    if let Some(distance) = restaurant.distance_from_user.as_deref() {
        attributes.push(attribute("Distance", distance));
    }
    if let Some(minimum) = restaurant.minimum_order.as_deref() {
        attributes.push(attribute("Minimum order", minimum));
    }
    if let Some(fee) = restaurant.delivery_price.as_deref() {
        attributes.push(attribute("Delivery fee", fee));
    }
    if let Some(eta) = restaurant.estimated_delivery_time.as_deref() {
        attributes.push(attribute("Delivery time", eta));
    }
    attributes
}

fn totals_attributes(restaurant: &Restaurant) -> Vec<HipChatCardAttribute> {
    let mut attributes = Vec::new();
    if let Some(minimum) = restaurant.minimum_order.as_deref() {
        attributes.push(attribute("Minimum order", minimum));
    }
    if let Some(pool) = restaurant.pool_sum.as_deref() {
        attributes.push(attribute("Pool sum", pool));
    }
    attributes
}

impl Messenger for HipChatMessenger {
    fn name(&self) -> &str {
        "hipchat"
    }

    fn is_valid_message(&self, payload: &Value) -> bool {
        payload
            .pointer("/item/message/message")
            .and_then(Value::as_str)
            .is_some_and(|message| !message.is_empty() && message.starts_with(COMMAND))
    }

    fn restaurant_name(&self, payload: &Value) -> Option<String> {
        let message = payload.pointer("/item/message/message")?.as_str()?;
        let rest = message.strip_prefix(COMMAND)?;
        // one separator character belongs to the command, the rest is query
        Some(rest.strip_prefix(' ').unwrap_or(rest).to_string())
    }

    fn default_response(&self) -> BotResponse {
        Self::response(HipChatColor::Gray, DEFAULT_USAGE.to_string(), None)
    }

    fn error_response(&self, name: Option<&str>) -> BotResponse {
        Self::response(HipChatColor::Red, not_found_text(name), None)
    }

    fn search_response(&self, restaurants: &[Restaurant]) -> BotResponse {
        let headline = found_headline(restaurants.len());
        match restaurants {
            [only] => Self::response(
                HipChatColor::Green,
                format!("{}: {}", headline, only.restaurant_name),
                Some(Self::card(only, search_attributes(only))),
            ),
            _ => {
                let lines: Vec<String> = restaurants
                    .iter()
                    .enumerate()
                    .map(|(i, r)| list_line(i + 1, r))
                    .collect();
                Self::response(
                    HipChatColor::Green,
                    format!("{}:\n{}", headline, lines.join("\n")),
                    None,
                )
            }
        }
    }

    fn total_orders_response(&self, restaurants: &[Restaurant]) -> BotResponse {
        match restaurants {
            [] => Self::response(HipChatColor::Yellow, NO_POOL_ORDERS.to_string(), None),
            [only] => Self::response(
                HipChatColor::Green,
                format!("{}: {}", found_headline(1), only.restaurant_name),
                Some(Self::card(only, totals_attributes(only))),
            ),
            _ => {
                let lines: Vec<String> = restaurants
                    .iter()
                    .enumerate()
                    .map(|(i, r)| totals_line(i + 1, r))
                    .collect();
                Self::response(
                    HipChatColor::Green,
                    format!("{}:\n{}", found_headline(restaurants.len()), lines.join("\n")),
                    None,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(message: &str) -> Value {
        json!({
            "event": "room_message",
            "item": {
                "message": {
                    "from": {"id": 42, "name": "Hungry Dev"},
                    "message": message,
                    "type": "message"
                },
                "room": {"id": 7, "name": "lunch"}
            },
            "webhook_id": 99
        })
    }

    fn unwrap_hipchat(response: BotResponse) -> HipChatResponse {
        match response {
            BotResponse::HipChat(r) => r,
            BotResponse::Slack(_) => panic!("expected a HipChat response"),
        }
    }

    #[test]
    fn test_valid_message() {
        let messenger = HipChatMessenger::new();
        assert!(messenger.is_valid_message(&payload("/10bis pizza")));
        assert!(messenger.is_valid_message(&payload("/10bis")));
    }

    #[test]
    fn test_invalid_when_not_a_command() {
        let messenger = HipChatMessenger::new();
        assert!(!messenger.is_valid_message(&payload("what's for lunch?")));
        assert!(!messenger.is_valid_message(&payload("")));
    }

    #[test]
    fn test_invalid_when_structure_is_wrong() {
        let messenger = HipChatMessenger::new();
        assert!(!messenger.is_valid_message(&json!({})));
        assert!(!messenger.is_valid_message(&json!({"item": {"message": {}}})));
        assert!(!messenger.is_valid_message(&json!({"item": {"message": {"message": 42}}})));
        // flat Slack-style payloads are not ours
        assert!(!messenger.is_valid_message(&json!({"command": "/10bis", "text": "pizza"})));
    }

    #[test]
    fn test_restaurant_name_extraction() {
        let messenger = HipChatMessenger::new();
        assert_eq!(
            messenger.restaurant_name(&payload("/10bis pizza")),
            Some("pizza".to_string())
        );
        assert_eq!(messenger.restaurant_name(&payload("/10bis")), Some(String::new()));
        // only one separator char is stripped
        assert_eq!(
            messenger.restaurant_name(&payload("/10bis  pizza")),
            Some(" pizza".to_string())
        );
    }

    #[test]
    fn test_restaurant_name_missing_field() {
        let messenger = HipChatMessenger::new();
        assert_eq!(messenger.restaurant_name(&json!({})), None);
        assert_eq!(
            messenger.restaurant_name(&json!({"item": {"message": {"message": 42}}})),
            None
        );
    }

    #[test]
    fn test_default_response_is_usage_text() {
        let response = unwrap_hipchat(HipChatMessenger::new().default_response());
        assert_eq!(response.color, HipChatColor::Gray);
        assert_eq!(response.message, DEFAULT_USAGE);
        assert_eq!(response.message_format, "text");
        assert!(!response.notify);
        assert!(response.card.is_none());
    }

    #[test]
    fn test_error_response() {
        let messenger = HipChatMessenger::new();

        let bare = unwrap_hipchat(messenger.error_response(None));
        assert_eq!(bare.color, HipChatColor::Red);
        assert_eq!(bare.message, "No Restaurants Found");

        let named = unwrap_hipchat(messenger.error_response(Some("pizza")));
        assert_eq!(named.message, "No Restaurants Found for: pizza");
    }

    #[test]
    fn test_search_response_single_result_has_card() {
        let restaurant = Restaurant::builder(1, "Pizza Place")
            .address("Dizengoff 99")
            .cuisine_list("פיצה")
            .logo_url("https://cdn.example.com/pizza.png")
            .start_order_url("https://www.10bis.co.il/Restaurants/Menu/1")
            .distance_from_user("0.42 ק\"מ")
            .minimum_order("₪60.00")
            .build();

        let response = unwrap_hipchat(HipChatMessenger::new().search_response(&[restaurant]));
        assert_eq!(response.color, HipChatColor::Green);
        assert_eq!(response.message, "Found 1 restaurants: Pizza Place");

        let card = response.card.unwrap();
        assert_eq!(card.title, "Pizza Place");
        assert_eq!(card.style, "application");
        assert!(!card.id.is_empty());
        assert_eq!(card.description.value, "פיצה | Dizengoff 99");
        assert_eq!(card.icon.unwrap().url, "https://cdn.example.com/pizza.png");
        assert_eq!(
            card.url.as_deref(),
            Some("https://www.10bis.co.il/Restaurants/Menu/1")
        );

        let labels: Vec<&str> = card.attributes.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Distance", "Minimum order"]);
    }

    #[test]
    fn test_search_response_multiple_results_numbered_list() {
        let restaurants = vec![
            Restaurant::builder(1, "Pizza Place").address("Dizengoff 99").build(),
            Restaurant::builder(2, "Burger Bar").build(),
        ];

        let response = unwrap_hipchat(HipChatMessenger::new().search_response(&restaurants));
        assert_eq!(response.color, HipChatColor::Green);
        assert!(response.card.is_none());
        assert_eq!(
            response.message,
            "Found 2 restaurants:\n1. Pizza Place (Dizengoff 99)\n2. Burger Bar"
        );
    }

    #[test]
    fn test_card_ids_are_unique_per_response() {
        let restaurant = Restaurant::builder(1, "Pizza Place").build();
        let messenger = HipChatMessenger::new();

        let first = unwrap_hipchat(messenger.search_response(std::slice::from_ref(&restaurant)));
        let second = unwrap_hipchat(messenger.search_response(std::slice::from_ref(&restaurant)));

        assert_ne!(first.card.unwrap().id, second.card.unwrap().id);
    }

    #[test]
    fn test_totals_response_empty() {
        let response = unwrap_hipchat(HipChatMessenger::new().total_orders_response(&[]));
        assert_eq!(response.color, HipChatColor::Yellow);
        assert_eq!(response.message, NO_POOL_ORDERS);
        assert!(response.card.is_none());
    }

    #[test]
    fn test_totals_response_single_result_card_attributes() {
        let restaurant = Restaurant::builder(1, "Pizza Place")
            .minimum_order("₪70.00")
            .pool_sum("₪ 150.00")
            .pool_sum_number(150.0)
            .build();

        let response = unwrap_hipchat(HipChatMessenger::new().total_orders_response(&[restaurant]));
        let card = response.card.unwrap();
        let labels: Vec<&str> = card.attributes.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Minimum order", "Pool sum"]);
    }

    #[test]
    fn test_totals_response_multiple_results() {
        let restaurants = vec![
            Restaurant::builder(1, "Pizza Place")
                .minimum_order("₪70.00")
                .pool_sum("₪ 150.00")
                .build(),
            Restaurant::builder(2, "Burger Bar")
                .minimum_order("₪50.00")
                .pool_sum("₪ 90.00")
                .build(),
        ];

        let response = unwrap_hipchat(HipChatMessenger::new().total_orders_response(&restaurants));
        assert!(response.message.starts_with("Found 2 restaurants:\n"));
        assert!(response.message.contains("1. Pizza Place - minimum order: ₪70.00"));
        assert!(response.message.contains("pool sum: ₪ 90.00"));
    }
}
