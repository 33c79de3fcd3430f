use plivo::{Auth, NumberSearchParams, PlivoClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let country = std::env::var("PLIVO_COUNTRY_ISO").unwrap_or_else(|_| "US".to_owned());
    let client = PlivoClient::new(Auth::from_env()?);

    let params = NumberSearchParams {
        prefix: std::env::var("PLIVO_PREFIX").ok(),
        limit: 5,
        ..NumberSearchParams::new(country)
    };
    let groups = client.number().search(&params).await?;
    for group in &groups.data {
        println!(
            "group {} prefix {} stock {} rental {}",
            group.group_id, group.prefix, group.stock, group.rental_rate
        );
    }

    Ok(())
}
