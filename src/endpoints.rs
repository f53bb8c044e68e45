//! The archive's endpoint catalog: URL path segments for every logical
//! operation and the query-attribute names they accept. These are literal
//! wire-level names, supplied as data only; nothing here validates which
//! attributes a given operation accepts.

/// URL path segments, one per logical operation.
pub mod segments {
    pub const GET_IMAGE: &str = "getImage";
    pub const GET_SINGLE_IMAGE: &str = "getSingleImage";
    pub const GET_MANUFACTURER_VALUES: &str = "getManufacturerValues";
    pub const GET_MODALITY_VALUES: &str = "getModalityValues";
    pub const GET_COLLECTION_VALUES: &str = "getCollectionValues";
    pub const GET_BODY_PART_VALUES: &str = "getBodyPartValues";
    pub const GET_PATIENT_STUDY: &str = "getPatientStudy";
    pub const GET_SERIES: &str = "getSeries";
    pub const GET_SERIES_SIZE: &str = "getSeriesSize";
    pub const GET_PATIENT: &str = "getPatient";
    pub const GET_SOP_INSTANCE_UIDS: &str = "getSOPInstanceUIDs";
    pub const NEW_STUDIES_IN_PATIENT_COLLECTION: &str = "NewStudiesInPatientCollection";
    pub const NEW_PATIENTS_IN_COLLECTION: &str = "NewPatientsInCollection";
    pub const PATIENTS_BY_MODALITY: &str = "PatientsByModality";
    pub const GET_SHARED_LIST: &str = "getSharedList";
}

/// Query attribute names. Most originate from the DICOM data dictionary;
/// `name` (shared lists) and `format` are the archive's own.
pub mod attributes {
    pub const COLLECTION: &str = "Collection";
    pub const PATIENT_ID: &str = "PatientID";
    pub const STUDY_INSTANCE_UID: &str = "StudyInstanceUID";
    pub const SERIES_INSTANCE_UID: &str = "SeriesInstanceUID";
    pub const SOP_INSTANCE_UID: &str = "SOPInstanceUID";
    pub const MODALITY: &str = "Modality";
    pub const BODY_PART_EXAMINED: &str = "BodyPartExamined";
    pub const MANUFACTURER: &str = "Manufacturer";
    pub const MANUFACTURER_MODEL_NAME: &str = "ManufacturerModelName";
    pub const DATE: &str = "Date";
    pub const NAME: &str = "name";
    pub const FORMAT: &str = "format";
}

/// Response header carrying the number of images in a binary result.
pub const IMAGE_COUNT_HEADER: &str = "imageCount";
