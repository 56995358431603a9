//! File Endpoints

use gloo_net::http::Method;
use serde::Deserialize;

use super::{request, Ack, Body};
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::CardFile;

/// Multipart field name the upload endpoint reads
const UPLOAD_FIELD: &str = "files";

#[derive(Debug, Deserialize)]
struct UploadReply {
    #[serde(default)]
    files: Vec<CardFile>,
}

/// Upload every file of a picker or drop into one multipart request
pub async fn upload_files(config: &BoardConfig, card_id: &str, files: &[web_sys::File]) -> Result<Vec<CardFile>, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    }
    let path = format!("/api/cards/{}/files", card_id);
    let reply: UploadReply = request(config, Method::POST, &path, Body::Multipart(form)).await?;
    Ok(reply.files)
}

pub async fn delete_file(config: &BoardConfig, file_id: &str) -> Result<Ack, ApiError> {
    request(config, Method::DELETE, &format!("/api/files/{}", file_id), Body::Empty).await
}

/// Collect the files of a `FileList` (drop payload or file input)
pub fn files_from_list(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
