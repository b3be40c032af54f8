//! Testing utilities and mock implementations.
//!
//! Mock implementations of the searcher and cache traits, allowing full
//! dispatch and webhook testing without a live 10bis endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use lunchbot_core::testing::{fixtures, MockSearcher};
//!
//! let searcher = MockSearcher::new();
//! searcher.set_results(vec![
//!     fixtures::restaurant(1, "Pizza Hut"),
//!     fixtures::restaurant(2, "Japanika"),
//! ]).await;
//!
//! // Use in a Dispatcher...
//! ```

mod flaky_cache;
mod mock_searcher;

pub use flaky_cache::FlakyCache;
pub use mock_searcher::MockSearcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::restaurant::Restaurant;

    /// Create a test restaurant with reasonable defaults.
    pub fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant::builder(id, name)
            .address("Dizengoff 99, Tel Aviv")
            .cuisine_list("Pizza, Italian")
            .distance_from_user("450 m")
            .distance_from_user_in_meters(450.0)
            .minimum_order("₪50.00")
            .minimum_price_for_order(50.0)
            .delivery_price("₪10.00")
            .delivery_price_for_order(10.0)
            .delivery_time("up to 45 min.")
            .delivery_time_in_minutes(45.0)
            .is_open_for_delivery(true)
            .is_active_for_delivery(true)
            .logo_url(format!("https://cdn.10bis.example/logos/{}.png", id))
            .start_order_url(format!("https://www.10bis.example/order/{}", id))
            .build()
    }

    /// Create a test restaurant at a given distance in meters.
    pub fn restaurant_at(id: i64, name: &str, meters: f64) -> Restaurant {
        let mut restaurant = restaurant(id, name);
        restaurant.distance_from_user = Some(format!("{} m", meters));
        restaurant.distance_from_user_in_meters = Some(meters);
        restaurant
    }

    /// Create a test restaurant with an accumulated pool sum.
    pub fn pooled_restaurant(id: i64, name: &str, pool_sum: f64) -> Restaurant {
        let mut restaurant = restaurant(id, name);
        restaurant.pool_sum = Some(format!("₪{:.2}", pool_sum));
        restaurant.pool_sum_number = Some(pool_sum);
        restaurant
    }
}
