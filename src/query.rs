use crate::endpoints::attributes;
use crate::error::TciaResult;
use crate::models::OutputFormat;
use url::Url;

/// Build a fully qualified request URL for one operation.
///
/// Parameters are appended in caller-declared order, and only when a value
/// is present; an absent optional is omitted entirely, never sent empty.
/// The `format` selector, when given, always goes last. Percent-encoding is
/// handled by the query serializer.
pub(crate) fn build_url(
    resource_url: &str,
    segment: &str,
    params: &[(&'static str, Option<&str>)],
    format: Option<OutputFormat>,
) -> TciaResult<Url> {
    let mut url = Url::parse(&format!("{resource_url}/{segment}"))?;

    {
        let mut query = url.query_pairs_mut();
        for (name, value) in params {
            if let Some(value) = value {
                query.append_pair(name, value);
            }
        }
        if let Some(format) = format {
            query.append_pair(attributes::FORMAT, format.as_str());
        }
    }

    // an image request with no parameters must not end in a bare "?"
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{attributes, segments};
    use crate::error::TciaError;

    const BASE: &str = "https://services.cancerimagingarchive.net/services/v3/TCIA/query";

    #[test]
    fn absent_values_are_omitted() {
        let url = build_url(
            BASE,
            segments::GET_MODALITY_VALUES,
            &[
                (attributes::COLLECTION, None),
                (attributes::BODY_PART_EXAMINED, None),
            ],
            Some(OutputFormat::Json),
        )
        .unwrap();

        assert_eq!(url.query(), Some("format=json"));
        assert!(url.path().ends_with("/getModalityValues"));
    }

    #[test]
    fn present_values_keep_declaration_order_with_format_last() {
        let url = build_url(
            BASE,
            segments::GET_MANUFACTURER_VALUES,
            &[
                (attributes::COLLECTION, Some("TCGA-GBM")),
                (attributes::BODY_PART_EXAMINED, None),
                (attributes::MODALITY, Some("MR")),
            ],
            Some(OutputFormat::Csv),
        )
        .unwrap();

        assert_eq!(url.query(), Some("Collection=TCGA-GBM&Modality=MR&format=csv"));
    }

    #[test]
    fn values_are_url_encoded() {
        let url = build_url(
            BASE,
            segments::GET_SERIES,
            &[(attributes::MANUFACTURER, Some("GE MEDICAL SYSTEMS"))],
            Some(OutputFormat::Json),
        )
        .unwrap();

        assert_eq!(
            url.query(),
            Some("Manufacturer=GE+MEDICAL+SYSTEMS&format=json")
        );
    }

    #[test]
    fn image_request_without_parameters_has_no_query() {
        let url = build_url(
            BASE,
            segments::GET_IMAGE,
            &[(attributes::SERIES_INSTANCE_UID, None)],
            None,
        )
        .unwrap();

        assert_eq!(url.query(), None);
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn unparseable_base_url_is_a_malformed_request() {
        let err = build_url("not a url", segments::GET_PATIENT, &[], Some(OutputFormat::Json))
            .unwrap_err();
        assert!(matches!(err, TciaError::MalformedRequest(_)));
    }
}
