use crate::{
    client::TciaClient,
    endpoints::{attributes, segments},
    error::TciaResult,
    models::{OutputFormat, SeriesFilter},
};
use log::info;

/// Metadata API operations
///
/// Every method issues one GET and returns the archive's response body as
/// text in the requested output format. Optional parameters left as `None`
/// are omitted from the request entirely; mandatory parameters are plain
/// string slices, so a call cannot be issued without them.
pub struct MetadataApi<'a> {
    client: &'a TciaClient,
}

impl<'a> MetadataApi<'a> {
    pub fn new(client: &'a TciaClient) -> Self {
        Self { client }
    }

    /// Get the modality values
    ///
    /// # Arguments
    /// * `collection` - the collection name, optional
    /// * `body_part_examined` - the body part examined, optional
    pub async fn get_modality_values(
        &self,
        collection: Option<&str>,
        body_part_examined: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_MODALITY_VALUES,
                &[
                    (attributes::COLLECTION, collection),
                    (attributes::BODY_PART_EXAMINED, body_part_examined),
                ],
                format,
            )
            .await
    }

    /// Get the manufacturer values
    ///
    /// # Arguments
    /// * `collection` - the collection name, optional
    /// * `body_part_examined` - the examined body part, optional
    /// * `modality` - the modality, optional
    pub async fn get_manufacturer_values(
        &self,
        collection: Option<&str>,
        body_part_examined: Option<&str>,
        modality: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_MANUFACTURER_VALUES,
                &[
                    (attributes::COLLECTION, collection),
                    (attributes::BODY_PART_EXAMINED, body_part_examined),
                    (attributes::MODALITY, modality),
                ],
                format,
            )
            .await
    }

    /// Get the set of all collection values
    pub async fn get_collection_values(&self, format: OutputFormat) -> TciaResult<String> {
        self.client
            .fetch_text(segments::GET_COLLECTION_VALUES, &[], format)
            .await
    }

    /// Get the body part values
    pub async fn get_body_part_values(
        &self,
        collection: Option<&str>,
        modality: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_BODY_PART_VALUES,
                &[
                    (attributes::COLLECTION, collection),
                    (attributes::MODALITY, modality),
                ],
                format,
            )
            .await
    }

    /// Get the matching patient studies
    ///
    /// # Arguments
    /// * `collection` - the collection name, optional
    /// * `patient_id` - the ID of the patient, optional
    /// * `study_instance_uid` - the UID of the study instance, optional
    pub async fn get_patient_study(
        &self,
        collection: Option<&str>,
        patient_id: Option<&str>,
        study_instance_uid: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_PATIENT_STUDY,
                &[
                    (attributes::COLLECTION, collection),
                    (attributes::PATIENT_ID, patient_id),
                    (attributes::STUDY_INSTANCE_UID, study_instance_uid),
                ],
                format,
            )
            .await
    }

    /// Get the series matching the given filter attributes
    pub async fn get_series(
        &self,
        filter: &SeriesFilter,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_SERIES,
                &[
                    (attributes::COLLECTION, filter.collection.as_deref()),
                    (
                        attributes::STUDY_INSTANCE_UID,
                        filter.study_instance_uid.as_deref(),
                    ),
                    (attributes::MODALITY, filter.modality.as_deref()),
                    (attributes::PATIENT_ID, filter.patient_id.as_deref()),
                    (
                        attributes::SERIES_INSTANCE_UID,
                        filter.series_instance_uid.as_deref(),
                    ),
                    (
                        attributes::BODY_PART_EXAMINED,
                        filter.body_part_examined.as_deref(),
                    ),
                    (attributes::MANUFACTURER, filter.manufacturer.as_deref()),
                    (
                        attributes::MANUFACTURER_MODEL_NAME,
                        filter.manufacturer_model_name.as_deref(),
                    ),
                ],
                format,
            )
            .await
    }

    /// Get the patients
    pub async fn get_patient(
        &self,
        collection: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_PATIENT,
                &[(attributes::COLLECTION, collection)],
                format,
            )
            .await
    }

    /// Get the total size of the given series
    pub async fn get_series_size(
        &self,
        series_instance_uid: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_SERIES_SIZE,
                &[(attributes::SERIES_INSTANCE_UID, series_instance_uid)],
                format,
            )
            .await
    }

    /// Get the SOP (Service Object Pair) instance UIDs of a series
    pub async fn get_sop_instance_uids(
        &self,
        series_instance_uid: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_SOP_INSTANCE_UIDS,
                &[(attributes::SERIES_INSTANCE_UID, series_instance_uid)],
                format,
            )
            .await
    }

    /// Get the patients imaged with the given modality
    pub async fn patients_by_modality(
        &self,
        collection: Option<&str>,
        modality: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::PATIENTS_BY_MODALITY,
                &[
                    (attributes::COLLECTION, collection),
                    (attributes::MODALITY, modality),
                ],
                format,
            )
            .await
    }

    /// Get the patients added to a collection since the given date
    ///
    /// # Arguments
    /// * `date` - the cut-off date, mandatory
    /// * `collection` - the collection name, mandatory
    pub async fn new_patients_in_collection(
        &self,
        date: &str,
        collection: &str,
        format: OutputFormat,
    ) -> TciaResult<String> {
        info!("getting new patients in collection {collection} since {date}");
        self.client
            .fetch_text(
                segments::NEW_PATIENTS_IN_COLLECTION,
                &[
                    (attributes::DATE, Some(date)),
                    (attributes::COLLECTION, Some(collection)),
                ],
                format,
            )
            .await
    }

    /// Get the studies added to a patient collection since the given date
    ///
    /// # Arguments
    /// * `date` - the cut-off date, mandatory
    /// * `collection` - the collection name, mandatory
    /// * `patient_id` - the ID of the patient, optional
    pub async fn new_studies_in_patient_collection(
        &self,
        date: &str,
        collection: &str,
        patient_id: Option<&str>,
        format: OutputFormat,
    ) -> TciaResult<String> {
        info!("getting new studies in collection {collection} since {date}");
        self.client
            .fetch_text(
                segments::NEW_STUDIES_IN_PATIENT_COLLECTION,
                &[
                    (attributes::DATE, Some(date)),
                    (attributes::COLLECTION, Some(collection)),
                    (attributes::PATIENT_ID, patient_id),
                ],
                format,
            )
            .await
    }

    /// Get the contents of a shared list
    ///
    /// # Arguments
    /// * `name` - the name of the shared list, mandatory
    pub async fn get_shared_list(&self, name: &str, format: OutputFormat) -> TciaResult<String> {
        self.client
            .fetch_text(
                segments::GET_SHARED_LIST,
                &[(attributes::NAME, Some(name))],
                format,
            )
            .await
    }
}
