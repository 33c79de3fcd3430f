use plivo::{Auth, PlivoClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = PlivoClient::new(Auth::from_env()?);
    let account = client.account().get().await?;

    println!(
        "name: {:?}, account_type: {:?}, cash_credits: {:?}, status: {}",
        account.data.name,
        account.data.account_type,
        account.data.cash_credits,
        account.status()
    );

    Ok(())
}
