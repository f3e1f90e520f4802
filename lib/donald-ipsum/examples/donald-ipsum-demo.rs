use anyhow::Result;
use donald_ipsum::{ApiClient, Endpoint, Error};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = ApiClient::new();
    println!("Requesting from: {}\n", client.base_url());

    for (endpoint, count) in [
        (Endpoint::Paragraphs, None),
        (Endpoint::Sentences, Some(5)),
        (Endpoint::Words, Some(5)),
    ] {
        match client.get(endpoint, count).await {
            Ok(res) => {
                println!("✓ {endpoint} (status {}):", res.status);
                for item in res.content {
                    println!("  {item}");
                }
            }
            Err(Error::Api(e)) => {
                println!("✗ {endpoint} failed with status {}: {}", e.status, e.content);
            }
            Err(e) => {
                log::warn!("{endpoint} request error: {e:?}");
                return Err(e.into());
            }
        }
        println!();
    }

    Ok(())
}
