use reqwest::StatusCode;

use super::error::CareClientError;

/// How a CaRe endpoint's HTTP status is turned into an error.
///
/// Only the distribution endpoint uses 422 to report an unsupported country;
/// on the progression endpoint a 422 body goes to the decoder like any other
/// unmapped status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    Distribution,
    Progression,
}

impl StatusPolicy {
    pub fn check(
        self,
        service: &'static str,
        status: StatusCode,
        body: &str,
    ) -> Result<(), CareClientError> {
        if status == StatusCode::UNPROCESSABLE_ENTITY && self == Self::Distribution {
            return Err(CareClientError::Validation {
                field: "CountryCode",
                message: "Country not supported".to_string(),
            });
        }

        match status {
            StatusCode::NOT_FOUND => Err(CareClientError::NotFound {
                service,
                context: body.to_string(),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => Err(CareClientError::ServiceUnavailable {
                service,
                context: body.to_string(),
                source: None,
            }),
            _ => Ok(()),
        }
    }
}
