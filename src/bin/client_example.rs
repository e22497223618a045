//! Example client for the profile API

use galeria::{ClientConfig, HttpClientImpl, ProfileApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Uses URL_API when set, otherwise localhost:8080
    let config = ClientConfig::from_env().unwrap_or_default();
    let client = HttpClientImpl::with_config(config);
    println!("Galeria API Client Example");
    println!("--------------------------");

    println!("\nFetching profiles...");
    let profiles = client.get_profiles().await?;
    println!("Found {} profiles", profiles.len());

    // Show the latest image of each profile, if any
    for profile in &profiles {
        match client.get_latest_image_url_by_profile(profile.id).await {
            Ok(url) => println!("  {} -> {}", profile.nombre, url),
            Err(e) => println!("  {} -> ({})", profile.nombre, e),
        }
    }

    Ok(())
}
