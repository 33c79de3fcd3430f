use std::io;

use plivo::{Auth, MessageSendParams, PlivoClient};
use tracing_subscriber::EnvFilter;

fn required(var: &str) -> Result<String, io::Error> {
    std::env::var(var).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{var} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let src = required("PLIVO_SRC")?;
    let dst = required("PLIVO_DST")?;
    let text = std::env::var("PLIVO_TEXT").unwrap_or_else(|_| "hello from plivo-rs".to_owned());

    let client = PlivoClient::new(Auth::from_env()?);
    let response = client
        .message()
        .send(&MessageSendParams::new(src, dst, text))
        .await?;

    println!(
        "message: {:?}, message_uuid: {:?}",
        response.data.message, response.data.message_uuid
    );

    Ok(())
}
