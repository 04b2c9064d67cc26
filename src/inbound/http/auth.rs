//! Registration and login handlers.
//!
//! ```text
//! POST /api/v1/auth/register  Create an account
//! POST /api/v1/auth/login     Authenticate by email and password
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{Credentials, RegisterRequest};
use crate::domain::{Email, Error, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterBody {
    /// Unique email address.
    #[schema(example = "ada@example.org")]
    pub email: String,
    /// Raw password; digested before it reaches any store.
    pub password: String,
    /// Requested role; defaults to `regular`.
    #[serde(default)]
    pub user_type: Option<Role>,
    /// Privileged code; required when requesting the `special` role.
    #[serde(default)]
    pub code: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginBody {
    #[schema(example = "ada@example.org")]
    pub email: String,
    pub password: String,
}

fn parse_email(raw: String) -> ApiResult<Email> {
    Email::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Register a new account.
///
/// # Errors
///
/// - `400 Bad Request`: malformed email, or wrong privileged code for a
///   `special` registration.
/// - `409 Conflict`: the email is already registered.
/// - `503 Service Unavailable`: user store unreachable.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterBody,
    responses(
        (status = 201, description = "Account created", body = crate::domain::Account),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = RegisterRequest {
        email: parse_email(body.email)?,
        password: Zeroizing::new(body.password),
        requested_role: body.user_type.unwrap_or(Role::Regular),
        privileged_code: body.code,
    };

    let account = state.accounts.register(request).await?;
    Ok(HttpResponse::Created().json(account))
}

/// Authenticate an existing account.
///
/// # Errors
///
/// - `400 Bad Request`: malformed email.
/// - `401 Unauthorized`: no account matches the email and password.
/// - `503 Service Unavailable`: user store unreachable.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Authenticated", body = crate::domain::Account),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let credentials = Credentials {
        email: parse_email(body.email)?,
        password: Zeroizing::new(body.password),
    };

    let account = state.accounts.authenticate(credentials).await?;
    Ok(HttpResponse::Ok().json(account))
}
