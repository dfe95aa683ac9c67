use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use restaurant_finder::app::EXIT_NO_CREDENTIAL;
use restaurant_finder::cli::SearchArgs;
use restaurant_finder::{ApiKey, GoogleMapsClient, RestaurantFinder, Settings, TokioDelay, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = SearchArgs::parse();

    let api_key = match ApiKey::from_env() {
        Ok(key) => key,
        Err(e) => {
            println!("Error: {e}");
            return Ok(ExitCode::from(EXIT_NO_CREDENTIAL));
        }
    };

    let settings = Settings::new()?;

    let price_filter = args.price_filter();
    let query = args.to_query(&price_filter);

    let client = GoogleMapsClient::new(&settings.api, api_key)?;
    let delay = TokioDelay::new(
        settings.search.page_token_delay_ms,
        settings.search.page_token_jitter_ms,
    );
    let finder = RestaurantFinder::new(client, delay, settings.search.clone());

    let mut stdout = std::io::stdout();
    run(&finder, query, &settings.output, &mut stdout).await?;

    Ok(ExitCode::SUCCESS)
}
