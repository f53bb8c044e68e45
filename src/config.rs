use crate::error::{TciaError, TciaResult};
use serde::Deserialize;
use std::path::Path;

/// Client configuration, read once at construction and immutable afterwards.
///
/// The field names in the YAML file are the archive's traditional lowercase
/// keys (`authheader`, `authflag`, `baseurl`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name of the authorization header, e.g. "Authorization"
    #[serde(rename = "authheader")]
    pub auth_header: String,
    /// Scheme prepended to the encoded credentials, e.g. "Basic" or "ldap"
    #[serde(rename = "authflag")]
    pub auth_flag: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "baseurl")]
    pub base_url: String,
    /// Resource path appended to the base URL, e.g. "/services/v3/TCIA/query"
    pub resource: String,
}

impl ClientConfig {
    /// Load the configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> TciaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TciaError::Config(format!("reading {}: {e}", path.display())))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| TciaError::Config(format!("parsing {}: {e}", path.display())))
    }

    /// The complete URL of the resource every operation is addressed under.
    pub fn resource_url(&self) -> String {
        format!("{}{}", self.base_url, self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
authheader: \"Authorization\"
authflag: \"ldap\"
username: \"user\"
password: \"pass\"
baseurl: \"https://services.cancerimagingarchive.net\"
resource: \"/services/v3/TCIA/query\"
";

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = ClientConfig::from_file(file.path()).expect("failed to load config");
        assert_eq!(config.auth_header, "Authorization");
        assert_eq!(config.auth_flag, "ldap");
        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
        assert_eq!(
            config.resource_url(),
            "https://services.cancerimagingarchive.net/services/v3/TCIA/query"
        );
    }

    #[test]
    fn missing_field_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"username: user\n").unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TciaError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ClientConfig::from_file("/nonexistent/tcia.yaml").unwrap_err();
        assert!(matches!(err, TciaError::Config(_)));
    }
}
