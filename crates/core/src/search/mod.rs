mod request;
mod tenbis;
mod types;

pub use request::{OrderBy, SearchRequest};
pub use tenbis::TenbisSearcher;
pub use types::{RestaurantSearcher, SearchError};
