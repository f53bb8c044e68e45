use anyhow::Result;
use std::env;
use tcia_client::{save_to, ClientConfig, TciaClient};

/// Download a series as a zip into the working directory.
///
/// Usage: download_series [SeriesInstanceUID]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let series_uid = env::args().nth(1).unwrap_or_else(|| {
        "1.3.6.1.4.1.14519.5.2.1.7695.4001.306204232344341694648035234440".to_string()
    });

    let config = ClientConfig::from_file("config.yaml")?;
    let client = TciaClient::new(&config)?;

    let image = client.images().get_image(Some(&series_uid)).await?;
    println!("downloading {} images for series {series_uid}", image.image_count());

    let written = save_to(image, &format!("{series_uid}.zip"), ".").await?;
    println!("wrote {written} bytes");

    Ok(())
}
