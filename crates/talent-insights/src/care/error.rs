use super::transport::TransportError;

/// Failure taxonomy for CaRe API calls.
#[derive(Debug, thiserror::Error)]
pub enum CareClientError {
    /// A required system setting is missing or unusable. Nothing was sent.
    #[error("{message}")]
    Configuration {
        setting: &'static str,
        message: String,
    },
    /// The remote side rejected the query as semantically invalid.
    #[error("[{field}] - {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{service}: resource not found ({context})")]
    NotFound {
        service: &'static str,
        context: String,
    },
    /// Remote or transport failure; the caller may retry.
    #[error("{service} unavailable: {context}")]
    ServiceUnavailable {
        service: &'static str,
        context: String,
        #[source]
        source: Option<TransportError>,
    },
    #[error("unable to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CareClientError {
    pub(crate) fn missing_setting(setting: &'static str, description: &str) -> Self {
        Self::Configuration {
            setting,
            message: format!(
                "Care API {description} must be specified. Check the setting - {setting} in system configuration"
            ),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_names_the_key() {
        let err = CareClientError::missing_setting("url.care.base", "base address");
        assert_eq!(
            err.to_string(),
            "Care API base address must be specified. Check the setting - url.care.base in system configuration"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn validation_display_prefixes_field() {
        let err = CareClientError::Validation {
            field: "CountryCode",
            message: "Country not supported".to_string(),
        };
        assert_eq!(err.to_string(), "[CountryCode] - Country not supported");
    }
}
