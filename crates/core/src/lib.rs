pub mod cache;
pub mod config;
pub mod dispatch;
pub mod messenger;
pub mod metrics;
pub mod restaurant;
pub mod search;
pub mod testing;

pub use cache::{CacheError, MemoryCache, RestaurantCache};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use dispatch::{
    parse_query, DispatchOutcome, DispatchStatus, Dispatcher, ParsedQuery, ReplyBody,
};
pub use messenger::{BotResponse, HipChatMessenger, Messenger, SlackMessenger};
pub use restaurant::{
    dedupe_by_name, filter_positive_pool, sort_by_distance, Restaurant, RestaurantBuilder,
};
pub use search::{OrderBy, RestaurantSearcher, SearchError, SearchRequest, TenbisSearcher};
