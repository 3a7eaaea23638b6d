//! Fetch the current electricity price.
//!
//! Run with: cargo run --example fetch_price
//!
//! Requires FLICK_USERNAME and FLICK_PASSWORD environment variables.

use flick_rs::FlickClient;

#[tokio::main]
async fn main() -> flick_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("FLICK_USERNAME")
        .expect("FLICK_USERNAME environment variable required");
    let password = std::env::var("FLICK_PASSWORD")
        .expect("FLICK_PASSWORD environment variable required");

    let client = FlickClient::login(&username, &password).await?;

    let price = client.price().current().await?;
    println!("{price}");

    Ok(())
}
