use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_insights::care::{CareHttpClient, ReqwestTransport};
use talent_insights::config::{AppConfig, EnvSystemConfiguration};
use talent_insights::error::AppError;
use talent_insights::interviews::InterviewCreateCommand;
use tracing::warn;

pub(crate) type CareClient = CareHttpClient<EnvSystemConfiguration, ReqwestTransport>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) async fn build_care_client(config: &AppConfig) -> Result<CareClient, AppError> {
    let transport = ReqwestTransport::with_timeout(config.care.timeout())?;
    let client =
        CareHttpClient::from_settings(Arc::new(EnvSystemConfiguration), transport).await?;
    if client.base_url().is_none() {
        warn!("URL_CARE_BASE is not set; insight requests will fail until it is configured");
    }
    Ok(client)
}

pub(crate) fn read_interview_command(path: &Path) -> Result<InterviewCreateCommand, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let command = serde_json::from_str(&raw)?;
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_command_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "talent-insights-command-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"code":"INT-9","status":"Draft","rounds":[]}"#,
        )
        .expect("write fixture");

        let command = read_interview_command(&path).expect("command parses");
        std::fs::remove_file(&path).ok();

        assert_eq!(command.code.as_deref(), Some("INT-9"));
        assert_eq!(command.rounds.map(|rounds| rounds.len()), Some(0));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_interview_command(Path::new("/nonexistent/talent-insights.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
