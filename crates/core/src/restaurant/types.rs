//! The restaurant record returned by the 10bis search API.

use serde::{Deserialize, Serialize};

/// A restaurant as reported by the 10bis search API.
///
/// The field names mirror the upstream PascalCase JSON keys, so values
/// deserialize straight off the wire. Only the id and name are guaranteed
/// to be present; every other attribute is optional and many are only
/// populated for restaurants that are currently open.
///
/// Several attributes come in pairs of a preformatted display string and a
/// numeric value (`distance_from_user` / `distance_from_user_in_meters`,
/// `pool_sum` / `pool_sum_number`). Formatting uses the display string when
/// available; post-processing always uses the numeric one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Restaurant {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_phone: Option<String>,
    /// Comma-separated cuisine labels, e.g. "פיצה, איטלקי".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_cuisine_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_logo_url: Option<String>,
    /// Kosher certification label, e.g. "כשר".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_kosher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_kosher: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_of_reviews: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews_rank: Option<f64>,
    /// Preformatted distance, e.g. "0.54 ק"מ".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_user_in_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_for_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_for_pickup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_for_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_for_pickup: Option<bool>,
    /// Preformatted minimum order, e.g. "₪70.00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_price_for_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_price_for_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time_in_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_end_time: Option<String>,
    /// Preformatted accumulated pool order sum, e.g. "₪ 150.00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_sum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_sum_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_terminal_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bookmarked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_coupon_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_has_restrictions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_logo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_express_res: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kosher_certificate_img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_order_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_activity_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happy_hour_discount_percent: Option<f64>,
}

impl Restaurant {
    /// Start building a restaurant. Id and name are the only required fields.
    pub fn builder(id: i64, name: impl Into<String>) -> RestaurantBuilder {
        RestaurantBuilder {
            restaurant: Restaurant {
                restaurant_id: id,
                restaurant_name: name.into(),
                ..Restaurant::default()
            },
        }
    }
}

/// Fluent builder for `Restaurant` values.
#[derive(Debug, Clone)]
pub struct RestaurantBuilder {
    restaurant: Restaurant,
}

impl RestaurantBuilder {
    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_address = Some(value.into());
        self
    }

    pub fn city_name(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_city_name = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_phone = Some(value.into());
        self
    }

    pub fn cuisine_list(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_cuisine_list = Some(value.into());
        self
    }

    pub fn logo_url(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_logo_url = Some(value.into());
        self
    }

    pub fn kosher(mut self, value: impl Into<String>) -> Self {
        self.restaurant.restaurant_kosher = Some(value.into());
        self
    }

    pub fn is_kosher(mut self, value: bool) -> Self {
        self.restaurant.is_kosher = Some(value);
        self
    }

    pub fn num_of_reviews(mut self, value: i64) -> Self {
        self.restaurant.num_of_reviews = Some(value);
        self
    }

    pub fn reviews_rank(mut self, value: f64) -> Self {
        self.restaurant.reviews_rank = Some(value);
        self
    }

    pub fn distance_from_user(mut self, value: impl Into<String>) -> Self {
        self.restaurant.distance_from_user = Some(value.into());
        self
    }

    pub fn distance_from_user_in_meters(mut self, value: f64) -> Self {
        self.restaurant.distance_from_user_in_meters = Some(value);
        self
    }

    pub fn is_open_for_delivery(mut self, value: bool) -> Self {
        self.restaurant.is_open_for_delivery = Some(value);
        self
    }

    pub fn is_open_for_pickup(mut self, value: bool) -> Self {
        self.restaurant.is_open_for_pickup = Some(value);
        self
    }

    pub fn is_active_for_delivery(mut self, value: bool) -> Self {
        self.restaurant.is_active_for_delivery = Some(value);
        self
    }

    pub fn is_active_for_pickup(mut self, value: bool) -> Self {
        self.restaurant.is_active_for_pickup = Some(value);
        self
    }

    pub fn minimum_order(mut self, value: impl Into<String>) -> Self {
        self.restaurant.minimum_order = Some(value.into());
        self
    }

    pub fn minimum_price_for_order(mut self, value: f64) -> Self {
        self.restaurant.minimum_price_for_order = Some(value);
        self
    }

    pub fn delivery_price(mut self, value: impl Into<String>) -> Self {
        self.restaurant.delivery_price = Some(value.into());
        self
    }

    pub fn delivery_price_for_order(mut self, value: f64) -> Self {
        self.restaurant.delivery_price_for_order = Some(value);
        self
    }

    pub fn delivery_remarks(mut self, value: impl Into<String>) -> Self {
        self.restaurant.delivery_remarks = Some(value.into());
        self
    }

    pub fn delivery_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.delivery_time = Some(value.into());
        self
    }

    pub fn delivery_time_in_minutes(mut self, value: f64) -> Self {
        self.restaurant.delivery_time_in_minutes = Some(value);
        self
    }

    pub fn estimated_delivery_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.estimated_delivery_time = Some(value.into());
        self
    }

    pub fn arrival_delivery_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.arrival_delivery_time = Some(value.into());
        self
    }

    pub fn delivery_start_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.delivery_start_time = Some(value.into());
        self
    }

    pub fn delivery_end_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.delivery_end_time = Some(value.into());
        self
    }

    pub fn pickup_start_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.pickup_start_time = Some(value.into());
        self
    }

    pub fn pickup_end_time(mut self, value: impl Into<String>) -> Self {
        self.restaurant.pickup_end_time = Some(value.into());
        self
    }

    pub fn pool_sum(mut self, value: impl Into<String>) -> Self {
        self.restaurant.pool_sum = Some(value.into());
        self
    }

    pub fn pool_sum_number(mut self, value: f64) -> Self {
        self.restaurant.pool_sum_number = Some(value);
        self
    }

    pub fn is_terminal_active(mut self, value: bool) -> Self {
        self.restaurant.is_terminal_active = Some(value);
        self
    }

    pub fn is_bookmarked(mut self, value: bool) -> Self {
        self.restaurant.is_bookmarked = Some(value);
        self
    }

    pub fn discount_coupon_percent(mut self, value: f64) -> Self {
        self.restaurant.discount_coupon_percent = Some(value);
        self
    }

    pub fn coupon_has_restrictions(mut self, value: bool) -> Self {
        self.restaurant.coupon_has_restrictions = Some(value);
        self
    }

    pub fn has_logo(mut self, value: bool) -> Self {
        self.restaurant.has_logo = Some(value);
        self
    }

    pub fn is_express_res(mut self, value: bool) -> Self {
        self.restaurant.is_express_res = Some(value);
        self
    }

    pub fn priority(mut self, value: i64) -> Self {
        self.restaurant.priority = Some(value);
        self
    }

    pub fn kosher_certificate_img_url(mut self, value: impl Into<String>) -> Self {
        self.restaurant.kosher_certificate_img_url = Some(value.into());
        self
    }

    pub fn start_order_url(mut self, value: impl Into<String>) -> Self {
        self.restaurant.start_order_url = Some(value.into());
        self
    }

    pub fn activity_hours(mut self, value: impl Into<String>) -> Self {
        self.restaurant.activity_hours = Some(value.into());
        self
    }

    pub fn pickup_activity_hours(mut self, value: impl Into<String>) -> Self {
        self.restaurant.pickup_activity_hours = Some(value.into());
        self
    }

    pub fn happy_hour_discount_percent(mut self, value: f64) -> Self {
        self.restaurant.happy_hour_discount_percent = Some(value);
        self
    }

    pub fn build(self) -> Restaurant {
        self.restaurant
    }
}
