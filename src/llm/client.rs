use super::types::*;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use std::sync::Arc;
use tracing::debug;

/// One synchronous round trip to a multimodal model.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn generate(&self, request: InferenceRequest) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    system_instruction: Arc<str>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, system_instruction: Arc<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            system_instruction,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl VisionClient for GeminiClient {
    async fn generate(&self, request: InferenceRequest) -> Result<String> {
        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: &self.system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: &request.image.mime_type,
                            data: general_purpose::STANDARD.encode(&request.image.data),
                        },
                    },
                    Part::Text {
                        text: &request.directive,
                    },
                ],
            }],
        };

        debug!(
            "Sending {} byte {} image to model {}",
            request.image.data.len(),
            request.image.mime_type,
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        debug!("Received {} response from model {}", status, self.model);

        if !status.is_success() {
            let detail = match serde_json::from_str::<ApiErrorEnvelope>(&response_text) {
                Ok(envelope) => {
                    let ApiError {
                        code,
                        message,
                        status: api_status,
                    } = envelope.error;
                    match (api_status, code) {
                        (Some(api_status), Some(code)) => {
                            format!("{} ({}, code {})", message, api_status, code)
                        }
                        (Some(api_status), None) => format!("{} ({})", message, api_status),
                        (None, Some(code)) => format!("{} (code {})", message, code),
                        (None, None) => message,
                    }
                }
                Err(_) => response_text.chars().take(500).collect(),
            };
            return Err(Error::inference(format!("API error {}: {}", status, detail)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)?;
        parsed.into_text()
    }
}
