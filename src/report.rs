use std::fmt::Write;

use crate::models::RestaurantResult;

const RULE_WIDTH: usize = 80;
const PREVIEW_CATEGORIES: usize = 3;

/// Console preview of the nearest `limit` restaurants.
pub fn format_preview(restaurants: &[RestaurantResult], limit: usize) -> String {
    let shown = limit.min(restaurants.len());
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\nShowing {} of {} restaurants found:", shown, restaurants.len());
    let _ = writeln!(out, "{rule}");

    for (i, restaurant) in restaurants.iter().take(shown).enumerate() {
        let categories: Vec<&str> = restaurant
            .types
            .iter()
            .take(PREVIEW_CATEGORIES)
            .map(String::as_str)
            .collect();

        let _ = writeln!(out, "{}. {}", i + 1, restaurant.name);
        let _ = writeln!(out, "   Address: {}", restaurant.address);
        let _ = writeln!(out, "   Distance: {} miles", restaurant.distance_miles);
        let _ = writeln!(
            out,
            "   Rating: {}/5.0 ({} reviews)",
            restaurant.rating, restaurant.user_ratings_total
        );
        let _ = writeln!(out, "   Price: {}", restaurant.price_level);
        let _ = writeln!(out, "   Categories: {}", categories.join(", "));
        let _ = writeln!(out, "{rule}");
    }

    out
}
