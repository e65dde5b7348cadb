use crate::{
    ErrorKind,
    analysis::{Analyzer, Upload, upload::DEFAULT_MIME_TYPE},
    render::IndexPage,
};
use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Name of the multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

pub async fn index() -> Response {
    IndexPage::form().into_response_with(StatusCode::OK)
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!("Rejected analyze request: {}", rejection.body_text());
            return rejection.into_response();
        }
    };

    let upload = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            warn!("Failed to read multipart body: {}", e.body_text());
            return (e.status(), e.body_text()).into_response();
        }
    };

    match state.analyzer.analyze(upload).await {
        Ok(analysis) => {
            info!("Rendering analysis result");
            IndexPage::success(&analysis).into_response_with(StatusCode::OK)
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::Processing => error!("Analysis failed: {}", e),
                kind => warn!("Analysis refused ({:?}): {}", kind, e),
            }
            IndexPage::failure(&e).into_response_with(e.status_code())
        }
    }
}

/// Pulls the `file` part out of the form. Parts without a filename are not files.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) || upload.is_some() {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let bytes = field.bytes().await?;

        upload = Some(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Ok(upload)
}
