//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API. The generated specification is served by Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{
    Account, Error, ErrorCode, FileListing, FileRecord, OwnerStats, ProfileRecord, ProfileUpdate,
    ProfileView, UploaderSummary,
};
use crate::inbound::http::auth::{LoginBody, RegisterBody};
use crate::inbound::http::files::{CreateFileBody, DownloadResponse};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::uploads::UploadBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filehub API",
        description = "File-sharing community backend: accounts, uploads, downloads, profiles."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::files::list,
        crate::inbound::http::files::create,
        crate::inbound::http::files::record_download,
        crate::inbound::http::uploads::upload,
        crate::inbound::http::profiles::get_profile,
        crate::inbound::http::profiles::update_profile,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        Account,
        Error,
        ErrorCode,
        FileRecord,
        FileListing,
        UploaderSummary,
        OwnerStats,
        ProfileRecord,
        ProfileUpdate,
        ProfileView,
        RegisterBody,
        LoginBody,
        CreateFileBody,
        DownloadResponse,
        UploadBody,
        HealthStatus,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "files", description = "File listing, creation, and downloads"),
        (name = "uploads", description = "Raw-content uploads"),
        (name = "profiles", description = "Profiles with file aggregates"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
