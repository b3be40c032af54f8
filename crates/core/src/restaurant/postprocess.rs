//! Post-processing of raw 10bis search results.
//!
//! The upstream API pages by relevance and repeats a restaurant once per
//! branch, so results are cleaned up before rendering: sorted by distance,
//! deduplicated by name, and for pool-order queries filtered down to
//! restaurants with money already accumulated.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::Restaurant;

/// Deduplicate restaurants by exact name, keeping the first occurrence.
///
/// Input order is preserved, so sort before deduplicating to control which
/// branch survives. When `exact_name` is given, entries whose name differs
/// from it are dropped after the dedup pass.
pub fn dedupe_by_name(restaurants: Vec<Restaurant>, exact_name: Option<&str>) -> Vec<Restaurant> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut deduped: Vec<Restaurant> = restaurants
        .into_iter()
        .filter(|r| seen.insert(r.restaurant_name.clone()))
        .collect();

    if let Some(name) = exact_name {
        deduped.retain(|r| r.restaurant_name == name);
    }

    deduped
}

/// Sort restaurants by distance from the configured address, closest first.
///
/// Entries with no reported distance sort before all measured ones. The
/// sort is stable, so equal keys keep their upstream order and re-sorting
/// an already sorted list is a no-op.
pub fn sort_by_distance(mut restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants.sort_by(|a, b| {
        match (a.distance_from_user_in_meters, b.distance_from_user_in_meters) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    });
    restaurants
}

/// Keep only restaurants with a strictly positive accumulated pool sum.
///
/// Zero, negative and missing pool sums are all dropped.
pub fn filter_positive_pool(restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants
        .into_iter()
        .filter(|r| r.pool_sum_number.is_some_and(|sum| sum > 0.0))
        .collect()
}
