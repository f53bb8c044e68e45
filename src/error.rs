use std::path::PathBuf;
use thiserror::Error;

/// TCIA client error types
///
/// Every failure raised after a request URL has been built carries that
/// exact URL, so callers can log or retry the call manually.
#[derive(Error, Debug)]
pub enum TciaError {
    #[error("invalid request URL: {0}")]
    MalformedRequest(#[from] url::ParseError),

    #[error("Unauthorized access: {url}")]
    Unauthorized { url: String },

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Server Error : {reason} ({url})")]
    Server { url: String, reason: String },

    #[error("No Content: {url}")]
    EmptyBody { url: String },

    #[error("missing or unparseable imageCount header: {url}")]
    MissingImageCount { url: String },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("writing {} failed", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for TCIA operations
pub type TciaResult<T> = Result<T, TciaError>;

impl TciaError {
    /// Wrap a lower-level reqwest failure, keeping the attempted URL.
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// The URL of the attempted request, where one was built.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { url }
            | Self::NotFound { url }
            | Self::Server { url, .. }
            | Self::EmptyBody { url }
            | Self::MissingImageCount { url }
            | Self::Transport { url, .. } => Some(url),
            _ => None,
        }
    }

    /// The human-readable failure reason, matching the archive's wording.
    pub fn reason(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "Unauthorized access".into(),
            Self::NotFound { .. } => "Resource not found".into(),
            Self::Server { reason, .. } => format!("Server Error : {reason}"),
            Self::EmptyBody { .. } => "No Content".into(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_matches_archive_wording() {
        let unauthorized = TciaError::Unauthorized {
            url: "http://example.org/getPatient".into(),
        };
        assert_eq!(unauthorized.reason(), "Unauthorized access");

        let not_found = TciaError::NotFound {
            url: "http://example.org/getPatient".into(),
        };
        assert_eq!(not_found.reason(), "Resource not found");

        let server = TciaError::Server {
            url: "http://example.org/getPatient".into(),
            reason: "Internal Server Error".into(),
        };
        assert_eq!(server.reason(), "Server Error : Internal Server Error");
    }

    #[test]
    fn url_is_carried_for_classified_failures() {
        let err = TciaError::NotFound {
            url: "http://example.org/getSeries?format=json".into(),
        };
        assert_eq!(err.url(), Some("http://example.org/getSeries?format=json"));

        let err = TciaError::Config("bad header".into());
        assert_eq!(err.url(), None);
    }
}
