use plivo::{Auth, CallListParams, PlivoClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = PlivoClient::new(Auth::from_env()?);

    let params = CallListParams {
        limit: 10,
        ..Default::default()
    };
    let page = client.call().list(&params).await?;
    if let Some(meta) = &page.meta {
        println!("total: {}, next: {:?}", meta.total_count, meta.next);
    }
    for call in &page.data {
        println!(
            "{} {} -> {} ({:?}s)",
            call.call_uuid, call.from_number, call.to_number, call.bill_duration
        );
    }

    let live = client.call().list_live().await?;
    println!("live calls: {:?}", live.data.calls);

    Ok(())
}
