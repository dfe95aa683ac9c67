use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::models::SearchQuery;
use crate::report::format_preview;
use crate::services::{PlacesApi, RestaurantFinder, recommend};
use crate::storage::JsonExporter;
use crate::utils::Delay;

/// Process exit status when the API credential is missing (sysexits EX_CONFIG).
pub const EXIT_NO_CREDENTIAL: u8 = 78;

#[derive(Debug)]
pub struct RunOutcome {
    pub total_restaurants: usize,
    /// Output file, when one was written.
    pub exported: Option<PathBuf>,
    /// `place_id` of the restaurant suggested on the console.
    pub recommended: Option<String>,
}

/// One end-to-end search: find, export, and print the console summary to `out`.
pub async fn run<A, D, W>(
    finder: &RestaurantFinder<A, D>,
    query: SearchQuery,
    output: &OutputConfig,
    out: &mut W,
) -> Result<RunOutcome>
where
    A: PlacesApi,
    D: Delay,
    W: Write,
{
    writeln!(out, "Searching for open restaurants in {}", query.postal_code)?;
    writeln!(out, "Radius: {} miles", query.radius_miles)?;
    if let Some(keyword) = &query.keyword {
        writeln!(out, "Cuisine/Type: {keyword}")?;
    }
    if let Some(level) = query.price_level {
        writeln!(out, "Price level: {} ({})", level, level.dollar_signs())?;
    }

    let postal_code = query.postal_code.clone();
    let report = finder.find_open_restaurants(query, Utc::now()).await;

    if let Some(e) = &report.geocode_error {
        writeln!(out, "Error: Could not convert zipcode {postal_code} to coordinates ({e}).")?;
    }
    if let Some(local_time) = &report.local_time {
        writeln!(out, "Local time at {postal_code}: {}", local_time.value())?;
    }
    if let Some(e) = &report.search_error {
        writeln!(out, "Error: {e}")?;
    }

    if report.is_empty() {
        writeln!(out, "No open restaurants found matching your criteria.")?;
        return Ok(RunOutcome {
            total_restaurants: 0,
            exported: None,
            recommended: None,
        });
    }

    let total_restaurants = report.restaurants.len();
    writeln!(out, "Found {total_restaurants} open restaurants.")?;

    let pick = recommend(&report.restaurants, &mut rand::rng()).cloned();
    if let Some(pick) = &pick {
        writeln!(
            out,
            "Recommended: {} ({} miles, rating {})",
            pick.name, pick.distance_miles, pick.rating
        )?;
    }
    let recommended = pick.map(|p| p.place_id);

    let document = report.into_document(Utc::now());
    let exporter = JsonExporter::new(&output.path);
    if !exporter.export(&document).await {
        writeln!(out, "Error: could not write {}", exporter.path().display())?;
        return Ok(RunOutcome {
            total_restaurants,
            exported: None,
            recommended,
        });
    }

    writeln!(out, "Restaurant data exported to {}", exporter.path().display())?;
    write!(out, "{}", format_preview(&document.restaurants, output.preview_limit))?;
    writeln!(out, "Full results available in {}", exporter.path().display())?;

    Ok(RunOutcome {
        total_restaurants,
        exported: Some(exporter.path().to_path_buf()),
        recommended,
    })
}
