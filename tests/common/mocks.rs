use async_trait::async_trait;
use breed_lens::{
    Error, Result,
    llm::{InferenceRequest, VisionClient},
};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    SafetyBlock(String),
    Failure(String),
}

/// Stub inference service that records every request it receives
#[derive(Debug)]
pub struct StubVisionClient {
    reply: StubReply,
    requests: Mutex<Vec<InferenceRequest>>,
}

impl StubVisionClient {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn safety_block(reason: &str) -> Self {
        Self::new(StubReply::SafetyBlock(reason.to_string()))
    }

    pub fn failure(message: &str) -> Self {
        Self::new(StubReply::Failure(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisionClient for StubVisionClient {
    async fn generate(&self, request: InferenceRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::SafetyBlock(reason) => Err(Error::SafetyBlocked {
                reason: reason.clone(),
            }),
            StubReply::Failure(message) => Err(Error::inference(message.clone())),
        }
    }
}
