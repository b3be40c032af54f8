mod postprocess;
mod types;

pub use postprocess::{dedupe_by_name, filter_positive_pool, sort_by_distance};
pub use types::{Restaurant, RestaurantBuilder};
