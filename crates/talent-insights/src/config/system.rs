use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

pub const CARE_BASE_URL_KEY: &str = "url.care.base";
pub const CARE_DISTRIBUTION_PATH_KEY: &str = "url.care.distribution.relativepath";
pub const CARE_PROGRESSION_PATH_KEY: &str = "url.care.progression.relativepath";

/// Key/value lookup for runtime system settings such as remote endpoint URLs.
pub trait SystemConfiguration: Send + Sync {
    fn get_value(&self, key: &str) -> impl Future<Output = Option<String>> + Send;
}

impl<S> SystemConfiguration for Arc<S>
where
    S: SystemConfiguration,
{
    fn get_value(&self, key: &str) -> impl Future<Output = Option<String>> + Send {
        (**self).get_value(key)
    }
}

/// Resolves settings from process environment variables.
///
/// `url.care.base` is read from `URL_CARE_BASE`: dots become underscores and the
/// key is upper-cased. Blank values are treated as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvSystemConfiguration;

impl EnvSystemConfiguration {
    pub fn env_key(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect()
    }
}

impl SystemConfiguration for EnvSystemConfiguration {
    fn get_value(&self, key: &str) -> impl Future<Output = Option<String>> + Send {
        let value = std::env::var(Self::env_key(key))
            .ok()
            .filter(|value| !value.trim().is_empty());
        std::future::ready(value)
    }
}

/// Fixed in-memory settings, used for overrides and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSystemConfiguration {
    values: HashMap<String, String>,
}

impl StaticSystemConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SystemConfiguration for StaticSystemConfiguration {
    fn get_value(&self, key: &str) -> impl Future<Output = Option<String>> + Send {
        std::future::ready(self.values.get(key).cloned())
    }
}
