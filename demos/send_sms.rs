use std::io;

use clicksend::{ClickSendClient, PhoneNumber, Sms};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = required_env("CLICKSEND_USERNAME")?;
    let api_key = required_env("CLICKSEND_API_KEY")?;
    let phone_raw = required_env("CLICKSEND_PHONE")?;
    let message = std::env::var("CLICKSEND_MESSAGE")
        .unwrap_or_else(|_| "Hello from the clicksend example.".to_owned());

    let mut builder = ClickSendClient::builder(username, api_key);
    if let Ok(base_url) = std::env::var("CLICKSEND_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let phone = PhoneNumber::parse(None, &phone_raw)?;
    let sms = Sms::to_phone(&phone, message);

    let response = client.send_sms(Some(&sms)).await?;
    println!(
        "http_code: {}, response_code: {:?}, queued: {}",
        response.http_code, response.response_code, response.data.queued_count
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
