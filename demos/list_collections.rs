use anyhow::Result;
use tcia_client::{ClientConfig, OutputFormat, TciaClient};

/// Fetch the list of collections from the archive and print it.
///
/// Expects a config.yaml in the working directory; see config.sample.yaml.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ClientConfig::from_file("config.yaml")?;
    let client = TciaClient::new(&config)?;

    let collections = client
        .metadata()
        .get_collection_values(OutputFormat::Json)
        .await?;
    println!("{collections}");

    Ok(())
}
