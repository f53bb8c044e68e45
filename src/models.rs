use crate::endpoints::IMAGE_COUNT_HEADER;
use crate::error::{TciaError, TciaResult};
use bytes::Bytes;
use futures_util::Stream;
use reqwest::Response;
use std::fmt;

/// Textual serialization requested for non-binary responses.
///
/// Selects the literal value of the `format` query parameter; it has no
/// effect on routing or error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter attributes for a series query. All attributes are optional;
/// unset ones are left out of the request entirely.
#[derive(Debug, Clone, Default)]
pub struct SeriesFilter {
    pub collection: Option<String>,
    pub study_instance_uid: Option<String>,
    pub modality: Option<String>,
    pub patient_id: Option<String>,
    pub series_instance_uid: Option<String>,
    pub body_part_examined: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_model_name: Option<String>,
}

/// A binary image archive streaming off the wire, plus the number of images
/// the archive declared for it in the `imageCount` response header.
///
/// The body is not buffered: the caller owns the live stream and must drain
/// it (or drop the result) on every exit path to release the underlying
/// connection.
#[derive(Debug)]
pub struct ImageResult {
    url: String,
    image_count: u64,
    response: Response,
}

impl ImageResult {
    /// Wrap a successful image response, requiring the `imageCount` header.
    pub(crate) fn from_response(url: &str, response: Response) -> TciaResult<Self> {
        if response.content_length() == Some(0) {
            return Err(TciaError::EmptyBody {
                url: url.to_owned(),
            });
        }

        let image_count = response
            .headers()
            .get(IMAGE_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .ok_or_else(|| TciaError::MissingImageCount {
                url: url.to_owned(),
            })?;

        Ok(Self {
            url: url.to_owned(),
            image_count,
            response,
        })
    }

    /// The URL the archive served this result from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Number of images in the archive, as declared by the server.
    pub fn image_count(&self) -> u64 {
        self.image_count
    }

    /// Consume the result and stream the raw bytes of the archive.
    pub fn bytes_stream(self) -> impl Stream<Item = reqwest::Result<Bytes>> {
        self.response.bytes_stream()
    }
}
