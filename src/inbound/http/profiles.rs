//! Profile handlers.
//!
//! ```text
//! GET /api/v1/profiles/{id}  Profile with freshly computed file aggregates
//! PUT /api/v1/profiles/{id}  Overwrite the profile fields as a whole
//! ```

use actix_web::{HttpResponse, get, put, web};

use crate::domain::{Error, ProfileUpdate, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Fetch a profile with file aggregates.
///
/// # Errors
///
/// - `404 Not Found`: no user with this identity.
/// - `503 Service Unavailable`: store unreachable.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    params(("id" = i64, Path, description = "User identity")),
    responses(
        (status = 200, description = "Profile with aggregates", body = crate::domain::ProfileView),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["profiles"],
    operation_id = "getProfile"
)]
#[get("/profiles/{id}")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let view = state.profiles.profile(id).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Overwrite the profile fields as a whole.
///
/// An omitted field clears the stored value; there is no partial merge.
///
/// # Errors
///
/// - `404 Not Found`: no user with this identity.
/// - `503 Service Unavailable`: store unreachable.
#[utoipa::path(
    put,
    path = "/api/v1/profiles/{id}",
    params(("id" = i64, Path, description = "User identity")),
    request_body = ProfileUpdate,
    responses(
        (status = 204, description = "Profile overwritten"),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["profiles"],
    operation_id = "updateProfile"
)]
#[put("/profiles/{id}")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ProfileUpdate>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    state.profiles.update_profile(id, payload.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_support::{CannedProfiles, state_with_profiles};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    async fn app(
        state: HttpState,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api/v1")
                    .service(get_profile)
                    .service(update_profile),
            ),
        )
        .await
    }

    #[actix_web::test]
    async fn get_profile_reports_aggregates() {
        let app = app(state_with_profiles(CannedProfiles::default())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/profiles/1")
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["display_name"], "Ada");
        assert_eq!(body["stats"]["files_count"], 1);
        assert_eq!(body["stats"]["total_downloads"], 3);
    }

    #[actix_web::test]
    async fn get_profile_of_unknown_user_is_404() {
        let app = app(state_with_profiles(CannedProfiles {
            profile: Err(Error::user_not_found("user does not exist")),
            ..CannedProfiles::default()
        }))
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/profiles/999")
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "user_not_found");
    }

    #[actix_web::test]
    async fn update_profile_returns_no_content() {
        let app = app(state_with_profiles(CannedProfiles::default())).await;
        let req = actix_test::TestRequest::put()
            .uri("/api/v1/profiles/1")
            .set_json(json!({ "display_name": "Ada", "bio": "mathematician" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn update_profile_of_unknown_user_is_404() {
        let app = app(state_with_profiles(CannedProfiles {
            update: Err(Error::user_not_found("user does not exist")),
            ..CannedProfiles::default()
        }))
        .await;
        let req = actix_test::TestRequest::put()
            .uri("/api/v1/profiles/999")
            .set_json(json!({}))
            .to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
