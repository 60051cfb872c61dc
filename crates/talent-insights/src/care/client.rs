use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::error::CareClientError;
use super::query::{DistributionQuery, DistributionRequest, ProgressionQuery, ProgressionRequest};
use super::stats::{DistributionStats, ProgressionStats};
use super::status::StatusPolicy;
use super::transport::HttpTransport;
use crate::config::{
    SystemConfiguration, CARE_BASE_URL_KEY, CARE_DISTRIBUTION_PATH_KEY, CARE_PROGRESSION_PATH_KEY,
};

/// Service name reported in error context.
pub const CARE_SERVICE: &str = "CareHttpClient";

/// Invokes the CaRe analytics endpoints.
///
/// The base address is fixed at construction; relative paths are looked up on
/// every call so they can change without a restart.
pub struct CareHttpClient<S, T> {
    base_url: Option<Url>,
    settings: Arc<S>,
    transport: T,
}

struct Endpoint {
    operation: &'static str,
    path_key: &'static str,
    path_description: &'static str,
    policy: StatusPolicy,
}

const DISTRIBUTION: Endpoint = Endpoint {
    operation: "get_stats",
    path_key: CARE_DISTRIBUTION_PATH_KEY,
    path_description: "distribution relative path",
    policy: StatusPolicy::Distribution,
};

const PROGRESSION: Endpoint = Endpoint {
    operation: "get_progression",
    path_key: CARE_PROGRESSION_PATH_KEY,
    path_description: "progression relative path",
    policy: StatusPolicy::Progression,
};

impl<S, T> CareHttpClient<S, T>
where
    S: SystemConfiguration,
    T: HttpTransport,
{
    pub fn new(base_url: Option<Url>, settings: Arc<S>, transport: T) -> Self {
        Self {
            base_url,
            settings,
            transport,
        }
    }

    /// Builds a client whose base address comes from `url.care.base`.
    ///
    /// An unset base address is accepted here and reported on the first call;
    /// a value that is not an absolute URL is rejected immediately.
    pub async fn from_settings(settings: Arc<S>, transport: T) -> Result<Self, CareClientError> {
        let base_url = match settings.get_value(CARE_BASE_URL_KEY).await {
            Some(raw) => Some(Url::parse(raw.trim()).map_err(|err| {
                error!(setting = CARE_BASE_URL_KEY, value = %raw, %err, "invalid Care API base address");
                CareClientError::Configuration {
                    setting: CARE_BASE_URL_KEY,
                    message: format!("Care API base address '{raw}' is not a valid URL: {err}"),
                }
            })?),
            None => None,
        };
        Ok(Self::new(base_url, settings, transport))
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Fetch candidate distribution stats for global insight.
    pub async fn get_stats(
        &self,
        query: &DistributionQuery,
    ) -> Result<DistributionStats, CareClientError> {
        let request = DistributionRequest::from(query);
        self.post(&DISTRIBUTION, &request).await
    }

    /// Fetch career progression predictions for a career profile.
    pub async fn get_progression(
        &self,
        criteria: &ProgressionQuery,
    ) -> Result<ProgressionStats, CareClientError> {
        let request = ProgressionRequest::from(criteria);
        self.post(&PROGRESSION, &request).await
    }

    async fn post<P, R>(&self, endpoint: &Endpoint, request: &P) -> Result<R, CareClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let Some(base_url) = self.base_url.as_ref() else {
            error!(
                setting = CARE_BASE_URL_KEY,
                "Care API base address must be specified in system configuration"
            );
            return Err(CareClientError::missing_setting(
                CARE_BASE_URL_KEY,
                "base address",
            ));
        };

        let payload =
            serde_json::to_string(request).map_err(|source| CareClientError::Encode {
                operation: endpoint.operation,
                source,
            })?;
        info!(operation = endpoint.operation, %payload, "sending Care API request");

        let Some(relative_path) = self.settings.get_value(endpoint.path_key).await else {
            error!(
                setting = endpoint.path_key,
                "Care API {} must be specified in system configuration", endpoint.path_description
            );
            return Err(CareClientError::missing_setting(
                endpoint.path_key,
                endpoint.path_description,
            ));
        };

        let url = base_url.join(relative_path.trim()).map_err(|err| {
            error!(setting = endpoint.path_key, value = %relative_path, %err, "invalid Care API relative path");
            CareClientError::Configuration {
                setting: endpoint.path_key,
                message: format!(
                    "Care API {} '{relative_path}' cannot be joined to {base_url}: {err}",
                    endpoint.path_description
                ),
            }
        })?;

        let response = self
            .transport
            .post_json(&url, payload)
            .await
            .map_err(|err| {
                error!(operation = endpoint.operation, %url, error = %err, "Care API request failed");
                CareClientError::ServiceUnavailable {
                    service: CARE_SERVICE,
                    context: format!("error occurred while calling {}", endpoint.operation),
                    source: Some(err),
                }
            })?;

        endpoint
            .policy
            .check(CARE_SERVICE, response.status, &response.body)?;

        decode(endpoint.operation, &response.body)
    }
}

fn decode<R: DeserializeOwned>(operation: &'static str, body: &str) -> Result<R, CareClientError> {
    // An empty success body is a null document rather than a decode failure.
    let result = if body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body)
    };
    result.map_err(|source| CareClientError::Decode { operation, source })
}

impl<S, T> std::fmt::Debug for CareHttpClient<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareHttpClient")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}
