//! Examples for using the Textfix Server API
//!
//! Start the server first: `cargo run -p textfix-server`

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Normalize a fragment
    println!("2. Normalize Text:");
    let resp = client
        .post(format!("{SERVER_URL}/handler/text"))
        .json(&json!({ "text": "hello , world !! this is   fine" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Inspect every stage
    println!("3. Inspect Stages:");
    let resp = client
        .post(format!("{SERVER_URL}/handler/text/inspect"))
        .json(&json!({ "text": "Wow!!! Really??" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Degenerate input is rejected
    println!("4. Whitespace-only Text:");
    let resp = client
        .post(format!("{SERVER_URL}/handler/text"))
        .json(&json!({ "text": "   " }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
