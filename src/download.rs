use crate::error::{TciaError, TciaResult};
use crate::models::ImageResult;
use futures_util::StreamExt;
use log::info;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Average compressed size of a DICOM file; informational only, used to
/// estimate the total download size from the declared image count.
const AVERAGE_DICOM_FILE_SIZE: f64 = 200.0 * 1024.0;
const COMPRESSION_RATIO: f64 = 0.75;

/// Log progress roughly every this many bytes written.
const PROGRESS_INTERVAL: u64 = 4 * 1024 * 1024;

/// Save an image result as a file, streaming it to disk in chunks.
///
/// Progress is logged against an estimated total derived from the archive's
/// declared image count. Returns the number of bytes actually written.
pub async fn save_to(
    image: ImageResult,
    name: &str,
    directory: impl AsRef<Path>,
) -> TciaResult<u64> {
    let path = directory.as_ref().join(name);
    let estimated =
        (AVERAGE_DICOM_FILE_SIZE * COMPRESSION_RATIO * image.image_count() as f64) as u64;
    let url = image.url().to_owned();

    let mut file = File::create(&path).await.map_err(|e| TciaError::Io {
        path: path.clone(),
        source: e,
    })?;

    let mut written: u64 = 0;
    let mut last_report: u64 = 0;
    let mut stream = image.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| TciaError::transport(url.as_str(), e))?;
        file.write_all(&chunk).await.map_err(|e| TciaError::Io {
            path: path.clone(),
            source: e,
        })?;
        written += chunk.len() as u64;

        if written - last_report >= PROGRESS_INTERVAL {
            info!("bytes written {written} out of estimated {estimated}");
            last_report = written;
        }
    }

    file.flush().await.map_err(|e| TciaError::Io {
        path: path.clone(),
        source: e,
    })?;

    info!("wrote {written} bytes to {}", path.display());
    Ok(written)
}
