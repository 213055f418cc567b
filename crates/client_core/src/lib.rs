use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ErrorBody,
    protocol::{DiagnoseRequest, DiagnosisResult},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;

pub use error::DiagnoseError;

/// Path of the diagnosis endpoint, joined onto the configured server URL.
pub const DIAGNOSE_PATH: &str = "/diagnose";

/// Remote diagnosis collaborator. The form controller only ever talks to this seam.
#[async_trait]
pub trait DiagnosisService: Send + Sync {
    async fn diagnose(&self, request: &DiagnoseRequest) -> Result<DiagnosisResult, DiagnoseError>;
}

/// HTTP implementation of [`DiagnosisService`]. No timeout is configured; a request runs
/// until the transport completes or fails.
pub struct DiagnosisClient {
    http: Client,
    endpoint: Url,
}

impl DiagnosisClient {
    pub fn new(server_url: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(server_url)?.join(DIAGNOSE_PATH)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DiagnosisService for DiagnosisClient {
    async fn diagnose(&self, request: &DiagnoseRequest) -> Result<DiagnosisResult, DiagnoseError> {
        debug!(
            endpoint = %self.endpoint,
            active_symptoms = request.active_symptoms().count(),
            "posting diagnosis request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "diagnosis request failed to send");
                DiagnoseError::transport(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.map_err(|err| {
                warn!(
                    status = status.as_u16(),
                    error = %err,
                    "diagnosis error body could not be decoded"
                );
                DiagnoseError::transport(err)
            })?;
            let message = body.message_or_fallback().to_string();
            warn!(status = status.as_u16(), %message, "diagnosis rejected by server");
            return Err(DiagnoseError::ServerReported {
                status: status.as_u16(),
                message,
            });
        }

        let result: DiagnosisResult = response.json().await.map_err(|err| {
            warn!(error = %err, "diagnosis response body could not be decoded");
            DiagnoseError::transport(err)
        })?;
        info!(
            diagnoses = result.diagnoses.len(),
            overall_severity = result.overall_severity,
            critical = result.critical_warning,
            "diagnosis received"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
