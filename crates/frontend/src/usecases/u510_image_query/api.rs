use crate::shared::api_utils::api_url;
use contracts::usecases::u510_image_query::{
    AnalysisResult, ErrorBody, UPLOAD_ENDPOINT, UPLOAD_FIELD,
};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// What the server answered
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// 2xx with a parsed analysis
    Analysed(AnalysisResult),
    /// Non-2xx; carries the server message or the default one
    Rejected(String),
}

/// The request did not produce a usable answer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadFailure {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("fetch failed: {0}")]
    Transport(String),
    #[error("unreadable response body: {0}")]
    Body(String),
}

/// POST the file as `multipart/form-data` to the upload endpoint.
pub async fn upload_image(file: &File) -> Result<UploadOutcome, UploadFailure> {
    let form_data = FormData::new().map_err(|e| UploadFailure::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UploadFailure::Request(format!("{e:?}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = api_url(UPLOAD_ENDPOINT);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| UploadFailure::Request(format!("{e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| UploadFailure::Request(format!("{e:?}")))?;

    let window = web_sys::window().ok_or_else(|| UploadFailure::Request("no window".into()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UploadFailure::Transport(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| UploadFailure::Transport(format!("{e:?}")))?;

    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| UploadFailure::Body(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| UploadFailure::Body(format!("{e:?}")))?;
    let text = text
        .as_string()
        .ok_or_else(|| UploadFailure::Body("body is not text".into()))?;

    if resp.ok() {
        parse_success_body(&text).map(UploadOutcome::Analysed)
    } else {
        log::warn!("upload rejected: HTTP {}", resp.status());
        parse_error_body(&text).map(UploadOutcome::Rejected)
    }
}

pub fn parse_success_body(text: &str) -> Result<AnalysisResult, UploadFailure> {
    serde_json::from_str(text).map_err(|e| UploadFailure::Body(e.to_string()))
}

/// Message to show for a non-2xx answer. A body that is not JSON counts as
/// an unreadable response, like on the success path.
pub fn parse_error_body(text: &str) -> Result<String, UploadFailure> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| UploadFailure::Body(e.to_string()))?;
    Ok(ErrorBody::from_json(&value).message_or_default())
}
