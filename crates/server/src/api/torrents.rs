//! Torrent metadata endpoint.

use axum::{extract::Multipart, http::StatusCode, Json};
use gatekeeper_core::{extract, TorrentMeta};

use super::analyses::UploadForm;
use super::handlers::{reject, ErrorResponse};

/// POST /api/v1/torrents/inspect
///
/// Extract metadata from an uploaded `torrent_file` without analyzing it.
/// Undecodable files yield empty metadata rather than an error.
pub async fn inspect(
    mut multipart: Multipart,
) -> Result<Json<TorrentMeta>, (StatusCode, Json<ErrorResponse>)> {
    let form = UploadForm::read(&mut multipart).await?;

    match form.torrent_file {
        Some(bytes) => Ok(Json(extract(&bytes))),
        None => Err(reject(
            StatusCode::BAD_REQUEST,
            "missing_file",
            "Upload a torrent_file",
        )),
    }
}
