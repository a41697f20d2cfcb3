//! HTTP transport posting staged images to the gallery server.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::dispatch::UploadTransport;
use crate::types::{AppError, AppResult, PendingFile, UploadReply};
use crate::{UPLOAD_ENDPOINT, UPLOAD_FIELD};

/// Sends each file as its own `multipart/form-data` POST.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

/// Builds the multipart body: one `file` part carrying the original filename.
fn build_form(file: &File, filename: &str) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Dom(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, filename)
        .map_err(|e| AppError::Dom(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

impl UploadTransport<File> for FetchTransport {
    async fn send(&self, file: &PendingFile<File>) -> AppResult<UploadReply> {
        let form_data = build_form(&file.handle, &file.name)?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        // an unreadable body leaves the status text as the failure detail
        let body = response.text().await.unwrap_or_default();

        log::debug!("POST {} {} -> {} {}", self.endpoint(), file.name, status, status_text);

        Ok(UploadReply {
            status,
            status_text,
            body,
        })
    }
}
