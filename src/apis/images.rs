use crate::{
    client::TciaClient,
    endpoints::{attributes, segments},
    error::TciaResult,
    models::ImageResult,
};
use log::info;

/// Image API operations
///
/// Both methods return an [`ImageResult`] wrapping the live response stream
/// together with the image count the archive declared for it. The caller
/// owns the stream; see [`crate::save_to`] for streaming it to disk.
pub struct ImageApi<'a> {
    client: &'a TciaClient,
}

impl<'a> ImageApi<'a> {
    pub fn new(client: &'a TciaClient) -> Self {
        Self { client }
    }

    /// Get a zip of the images in a series
    ///
    /// # Arguments
    /// * `series_instance_uid` - the UID of the series instance, optional
    pub async fn get_image(&self, series_instance_uid: Option<&str>) -> TciaResult<ImageResult> {
        info!("getting image archive for series");
        self.client
            .fetch_image(
                segments::GET_IMAGE,
                &[(attributes::SERIES_INSTANCE_UID, series_instance_uid)],
            )
            .await
    }

    /// Get a single image of a series
    ///
    /// The archive declares an `imageCount` header here too; it is passed
    /// through as-is rather than assumed to be 1.
    ///
    /// # Arguments
    /// * `series_instance_uid` - the UID of the series instance, optional
    /// * `sop_instance_uid` - the UID of the Service-Object Pair (SOP), optional
    pub async fn get_single_image(
        &self,
        series_instance_uid: Option<&str>,
        sop_instance_uid: Option<&str>,
    ) -> TciaResult<ImageResult> {
        info!("getting single image");
        self.client
            .fetch_image(
                segments::GET_SINGLE_IMAGE,
                &[
                    (attributes::SERIES_INSTANCE_UID, series_instance_uid),
                    (attributes::SOP_INSTANCE_UID, sop_instance_uid),
                ],
            )
            .await
    }
}
