use crate::config::ClientConfig;
use crate::error::{TciaError, TciaResult};
use base64::{engine::general_purpose, Engine};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::RequestBuilder;

/// The static authorization header attached to every request.
///
/// The value is `<authflag> <base64(username:password)>`, computed once at
/// client construction and reused unchanged for the client's lifetime. The
/// header name and scheme both come from the configuration, so the same code
/// serves `Authorization: Basic ...` and the archive's legacy `ldap` scheme.
#[derive(Debug, Clone)]
pub struct AuthHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl AuthHeader {
    pub(crate) fn from_config(config: &ClientConfig) -> TciaResult<Self> {
        let name = config.auth_header.parse::<HeaderName>().map_err(|e| {
            TciaError::Config(format!(
                "invalid auth header name {:?}: {e}",
                config.auth_header
            ))
        })?;

        let credentials = format!("{}:{}", config.username, config.password);
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        let mut value = HeaderValue::from_str(&format!("{} {}", config.auth_flag, encoded))
            .map_err(|e| TciaError::Config(format!("invalid auth header value: {e}")))?;
        // keep credentials out of debug output
        value.set_sensitive(true);

        Ok(Self { name, value })
    }

    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(self.name.clone(), self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_config() -> ClientConfig {
        ClientConfig {
            auth_header: "Authorization".into(),
            auth_flag: "Basic".into(),
            username: "user".into(),
            password: "pass".into(),
            base_url: "https://services.cancerimagingarchive.net".into(),
            resource: "/services/v3/TCIA/query".into(),
        }
    }

    #[test]
    fn header_value_is_scheme_plus_encoded_credentials() {
        let header = AuthHeader::from_config(&basic_config()).unwrap();
        assert_eq!(header.name.as_str(), "authorization");
        // base64("user:pass")
        assert_eq!(header.value.to_str().unwrap(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn header_value_is_stable_across_constructions() {
        let first = AuthHeader::from_config(&basic_config()).unwrap();
        let second = AuthHeader::from_config(&basic_config()).unwrap();
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn invalid_header_name_fails_at_construction() {
        let mut config = basic_config();
        config.auth_header = "not a header\n".into();
        let err = AuthHeader::from_config(&config).unwrap_err();
        assert!(matches!(err, TciaError::Config(_)));
    }
}
