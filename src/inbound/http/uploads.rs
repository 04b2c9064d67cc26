//! Raw-content upload handler.
//!
//! ```text
//! POST /api/v1/uploads  Decode base64 content, store it, persist metadata
//! ```
//!
//! The persisted byte size is the decoded content length, never a
//! caller-supplied claim.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UploadRequest;
use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw-content upload body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UploadBody {
    /// Owning user; must hold the `special` role.
    #[schema(example = 42)]
    pub owner_id: i64,
    pub filename: String,
    /// Base64-encoded file content.
    pub content_base64: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "application/octet-stream".to_owned()
}

/// Upload raw content and register its metadata.
///
/// # Errors
///
/// - `400 Bad Request`: content is not valid base64; nothing is persisted.
/// - `403 Forbidden`: the owner is missing or holds the `regular` role.
/// - `503 Service Unavailable`: file store or storage host unreachable.
#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    request_body = UploadBody,
    responses(
        (status = 201, description = "Content stored and file created", body = crate::domain::FileRecord),
        (status = 400, description = "Content not decodable", body = Error),
        (status = 403, description = "Owner may not upload", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["uploads"],
    operation_id = "uploadFile"
)]
#[post("/uploads")]
pub async fn upload(
    state: web::Data<HttpState>,
    payload: web::Json<UploadBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = UploadRequest {
        owner_id: UserId::new(body.owner_id),
        filename: body.filename,
        content_base64: body.content_base64,
        mime_type: body.mime_type,
    };

    let record = state.files.upload(request).await?;
    Ok(HttpResponse::Created().json(record))
}
