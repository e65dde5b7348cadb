use super::{
    fsm::{AnalysisEvent, AnalysisStateMachine},
    upload::{self, Upload},
};
use crate::{
    Result,
    llm::{ImagePart, InferenceRequest, VisionClient},
    prompt,
};
use axum::body::Bytes;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Successful result of one request cycle.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub text: String,
    pub image: Bytes,
    pub mime_type: String,
}

pub struct Analyzer {
    client: Arc<dyn VisionClient>,
}

impl Analyzer {
    pub fn new(client: Arc<dyn VisionClient>) -> Self {
        Self { client }
    }

    /// Validates, dispatches, and returns the text to render. No state survives the call.
    pub async fn analyze(&self, upload: Option<Upload>) -> Result<Analysis> {
        let request_id = Uuid::new_v4();
        self.run(upload)
            .instrument(info_span!("analysis", %request_id))
            .await
    }

    async fn run(&self, upload: Option<Upload>) -> Result<Analysis> {
        let mut fsm = AnalysisStateMachine::new();
        fsm.transition(AnalysisEvent::UploadReceived)?;

        let upload = match Self::validate(upload).await {
            Ok(upload) => upload,
            Err(e) => {
                warn!("Upload rejected: {}", e);
                fsm.transition(AnalysisEvent::UploadRejected)?;
                return Err(e);
            }
        };
        fsm.transition(AnalysisEvent::UploadAccepted)?;

        info!(
            "Dispatching {} ({}, {} bytes)",
            upload.file_name,
            upload.content_type,
            upload.bytes.len()
        );

        let request = InferenceRequest {
            image: ImagePart {
                mime_type: upload.content_type.clone(),
                data: upload.bytes.clone(),
            },
            directive: prompt::DIRECTIVE.to_string(),
        };

        match self.client.generate(request).await {
            Ok(text) => {
                let state = fsm.transition(AnalysisEvent::ResultReceived)?;
                info!("Received {} characters of analysis, now {:?}", text.len(), state);
                Ok(Analysis {
                    text,
                    image: upload.bytes,
                    mime_type: upload.content_type,
                })
            }
            Err(e) => {
                error!("Inference call failed: {}", e);
                fsm.transition(AnalysisEvent::DispatchFailed)?;
                Err(e)
            }
        }
    }

    async fn validate(upload: Option<Upload>) -> Result<Upload> {
        let upload = upload::check_selection(upload)?;
        upload::check_decodable(upload.bytes.clone()).await?;
        Ok(upload)
    }
}
