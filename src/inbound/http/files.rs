//! File registry handlers.
//!
//! ```text
//! GET  /api/v1/files                 List all files with uploader identity
//! POST /api/v1/files                 Create metadata for pre-hosted content
//! POST /api/v1/files/{id}/download   Acknowledge a download
//! ```
//!
//! Identity arrives as a caller-supplied `owner_id` field; there is no
//! session layer in front of these routes.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::CreateFileRequest;
use crate::domain::{Error, FileId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Metadata-only file creation body; content already hosted elsewhere.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateFileBody {
    /// Owning user; must hold the `special` role.
    #[schema(example = 42)]
    pub owner_id: i64,
    pub filename: String,
    /// Location of the already-hosted content.
    pub file_url: String,
    /// Caller-asserted size; trusted here because no content passes through.
    #[serde(default)]
    pub byte_size: i64,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "application/octet-stream".to_owned()
}

/// Download acknowledgement response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DownloadResponse {
    /// Location of the downloaded content.
    pub file_url: String,
}

/// List all files, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/files",
    responses(
        (status = 200, description = "All files with uploader identity", body = [crate::domain::FileListing]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["files"],
    operation_id = "listFiles"
)]
#[get("/files")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let listings = state.files.list().await?;
    Ok(HttpResponse::Ok().json(listings))
}

/// Create file metadata for content hosted elsewhere.
///
/// # Errors
///
/// - `403 Forbidden`: the owner is missing or holds the `regular` role.
/// - `503 Service Unavailable`: file store unreachable.
#[utoipa::path(
    post,
    path = "/api/v1/files",
    request_body = CreateFileBody,
    responses(
        (status = 201, description = "File created", body = crate::domain::FileRecord),
        (status = 403, description = "Owner may not upload", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["files"],
    operation_id = "createFile"
)]
#[post("/files")]
pub async fn create(
    state: web::Data<HttpState>,
    payload: web::Json<CreateFileBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = CreateFileRequest {
        owner_id: UserId::new(body.owner_id),
        filename: body.filename,
        file_url: body.file_url,
        byte_size: body.byte_size,
        mime_type: body.mime_type,
    };

    let record = state.files.create(request).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Acknowledge a download: bump the counter, return the location.
///
/// # Errors
///
/// - `404 Not Found`: no file with this identity; the counter is unchanged.
/// - `503 Service Unavailable`: file store unreachable.
#[utoipa::path(
    post,
    path = "/api/v1/files/{id}/download",
    params(("id" = i64, Path, description = "File identity")),
    responses(
        (status = 200, description = "Download recorded", body = DownloadResponse),
        (status = 404, description = "File not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["files"],
    operation_id = "recordDownload"
)]
#[post("/files/{id}/download")]
pub async fn record_download(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = FileId::new(path.into_inner());
    let file_url = state.files.record_download(id).await?;
    Ok(HttpResponse::Ok().json(DownloadResponse { file_url }))
}
