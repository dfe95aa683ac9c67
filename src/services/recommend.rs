use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::models::{Rating, RestaurantResult};

/// Places at or above this rating are preferred for a pick.
pub const GOOD_RATING: f64 = 4.0;

fn is_well_rated(restaurant: &RestaurantResult) -> bool {
    matches!(restaurant.rating, Rating::Stars(stars) if stars >= GOOD_RATING)
}

/// Picks one restaurant at random, drawing from the well-rated places when any exist.
pub fn recommend<'a, R>(
    restaurants: &'a [RestaurantResult],
    rng: &mut R,
) -> Option<&'a RestaurantResult>
where
    R: Rng + ?Sized,
{
    let well_rated: Vec<&RestaurantResult> =
        restaurants.iter().filter(|r| is_well_rated(r)).collect();
    debug!(
        total = restaurants.len(),
        well_rated = well_rated.len(),
        "Choosing a recommendation"
    );

    if well_rated.is_empty() {
        return restaurants.choose(rng);
    }
    well_rated.choose(rng).copied()
}

/// Picks a different restaurant than `current_place_id`, from the whole list.
pub fn recommend_another<'a, R>(
    restaurants: &'a [RestaurantResult],
    current_place_id: &str,
    rng: &mut R,
) -> Option<&'a RestaurantResult>
where
    R: Rng + ?Sized,
{
    let others: Vec<&RestaurantResult> = restaurants
        .iter()
        .filter(|r| r.place_id != current_place_id)
        .collect();
    others.choose(rng).copied()
}
