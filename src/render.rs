use crate::{Error, analysis::Analysis};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose};
use tracing::error;

/// The single page: upload form plus an optional error or result block.
#[derive(Template, Debug, Default)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub error: Option<String>,
    pub view: Option<ResultView>,
}

#[derive(Debug)]
pub struct ResultView {
    /// HTML rendered from the service text. Trusted: emitted without escaping.
    pub result_html: String,
    pub image_b64: String,
    /// Client-declared, so still escaped on output.
    pub image_mime: String,
}

impl IndexPage {
    pub fn form() -> Self {
        Self::default()
    }

    pub fn failure(err: &Error) -> Self {
        Self {
            error: Some(err.user_message()),
            view: None,
        }
    }

    pub fn success(analysis: &Analysis) -> Self {
        Self {
            error: None,
            view: Some(ResultView {
                result_html: markdown_to_html(&normalize_line_breaks(&analysis.text)),
                image_b64: encode_image(&analysis.image),
                image_mime: analysis.mime_type.clone(),
            }),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        match self.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

/// Turns every newline into a Markdown hard break so the model's line layout survives.
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "  \n")
}

/// Renders trusted service Markdown. Raw HTML in the text is kept as-is.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = comrak::Options::default();
    options.render.unsafe_ = true;
    options.render.escape = false;
    comrak::markdown_to_html(markdown, &options)
}

pub fn encode_image(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
