use std::{fmt::Debug, time::Duration};

use anyhow::Context;
use reqwest::StatusCode;

use crate::{config::ContactClientConfig, domain::SubmissionPayload, util::error_chain_fmt};

const FALLBACK_REJECTED_MESSAGE: &str = "Error al enviar el formulario";

#[derive(Debug)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ContactClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build contact client.")?;
        let mut endpoint = reqwest::Url::parse(base_url)
            .with_context(|| format!("`{base_url}` is not a valid contact base url."))?;
        // 保留 base_url 中的路径前缀
        if !endpoint.path().ends_with('/') {
            endpoint.set_path(&format!("{}/", endpoint.path()));
        }
        let endpoint = endpoint
            .join("api/contact")
            .context("failed to build contact endpoint.")?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ContactClientConfig) -> Result<Self, anyhow::Error> {
        let timeout = config.timeout_milliseconds.map(Duration::from_millis);
        Self::new(&config.base_url, timeout)
    }

    /// 只发送一次，不重试
    #[tracing::instrument(name = "submitting contact form", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<serde_json::Value, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // 错误响应体不一定是 JSON
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .as_ref()
                .and_then(|body| body.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| FALLBACK_REJECTED_MESSAGE.to_owned());
            return Err(SubmissionError::Rejected { status, message });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(SubmissionError::InvalidResponse)
    }
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("No se pudo conectar con el servidor.")]
    Transport(#[source] reqwest::Error),
    #[error("La respuesta del servidor no es válida.")]
    InvalidResponse(#[source] reqwest::Error),
}

impl Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
