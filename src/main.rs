mod client;
mod codec;
mod constants;
mod error;
mod print_help;
mod utils;
mod vision;

use crate::client::MealClient;
use crate::print_help::print_help;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    // A missing key is not a startup error: the request still goes out, with
    // an empty bearer token, and the endpoint rejects it.
    let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
    let client = MealClient::new(http, api_key);

    utils::analyze_meal(&client, &args[1]).await;
    Ok(())
}
