//! Deterministic construction of 10bis search requests.

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Jerusalem;

use crate::config::LocationConfig;

/// Results per page requested from the API.
const PAGE_SIZE: u32 = 50;

/// Upstream result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    /// Relevance ordering, used for phrase searches.
    Default,
    /// Accumulated pool sum ordering, used for the totals flow.
    PoolSum,
}

impl OrderBy {
    pub fn as_param(&self) -> &'static str {
        match self {
            OrderBy::Default => "Default",
            OrderBy::PoolSum => "pool_sum",
        }
    }
}

/// A fully resolved upstream query.
///
/// Every parameter, including the clock-derived ones, is fixed at
/// construction time, so a given `SearchRequest` always renders the same
/// URL.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub order_by: OrderBy,
    pub search_phrase: String,
    pub user_id: String,
    pub city_id: String,
    pub street_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_number: String,
    /// Jerusalem wall-clock time in the `DD/MM/YYYY+HH:mm:ss` form the API
    /// expects.
    pub desired_date_time: String,
    pub timestamp_millis: i64,
}

impl SearchRequest {
    /// Build a phrase search request (relevance ordered).
    pub fn for_phrase(location: &LocationConfig, phrase: &str, now: DateTime<Utc>) -> Self {
        Self::build(location, OrderBy::Default, phrase, now)
    }

    /// Build a pool totals request (empty phrase, pool sum ordered).
    pub fn for_pool_totals(location: &LocationConfig, now: DateTime<Utc>) -> Self {
        Self::build(location, OrderBy::PoolSum, "", now)
    }

    fn build(
        location: &LocationConfig,
        order_by: OrderBy,
        phrase: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_by,
            search_phrase: phrase.to_string(),
            user_id: location.user_id.clone(),
            city_id: location.city_id.clone(),
            street_id: location.street_id.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            house_number: location.house_number.clone(),
            desired_date_time: now
                .with_timezone(&Jerusalem)
                .format("%d/%m/%Y+%H:%M:%S")
                .to_string(),
            timestamp_millis: now.timestamp_millis(),
        }
    }

    /// The query parameters in the fixed order the API is called with.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("deliveryMethod", "Delivery".to_string()),
            ("ShowOnlyOpenForDelivery", "false".to_string()),
            ("id", self.user_id.clone()),
            ("pageNum", "0".to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("OrderBy", self.order_by.as_param().to_string()),
            ("cuisineType", String::new()),
            ("CityId", self.city_id.clone()),
            ("StreetId", self.street_id.clone()),
            ("FilterByKosher", "false".to_string()),
            ("FilterByBookmark", "false".to_string()),
            ("FilterByCoupon", "false".to_string()),
            ("searchPhrase", self.search_phrase.clone()),
            ("Latitude", self.latitude.to_string()),
            ("Longitude", self.longitude.to_string()),
            ("HouseNumber", self.house_number.clone()),
            ("desiredDateTime", self.desired_date_time.clone()),
            ("timestamp", self.timestamp_millis.to_string()),
        ]
    }

    /// Render the full request URL against a base endpoint.
    pub fn url(&self, base: &str) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| {
                if needs_encoding(key) {
                    format!("{}={}", key, urlencoding::encode(&value))
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", base.trim_end_matches('/'), query)
    }
}

/// Parameters carrying free-form or account-supplied text. The remaining
/// parameters only ever hold URL-safe characters; in particular
/// `desiredDateTime` uses `+` as its date/time separator and must not be
/// percent-encoded.
fn needs_encoding(key: &str) -> bool {
    matches!(
        key,
        "id" | "CityId" | "StreetId" | "searchPhrase" | "HouseNumber"
    )
}
