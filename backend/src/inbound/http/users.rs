//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users {"firstName":"Ada","lastName":"Lovelace"}
//! GET    /users/search?name=ada
//! GET    /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::locale::RequestLocale;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
///
/// Fields are optional at the wire level so that absent values surface as
/// field violations rather than a malformed body.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

/// Query parameters for `GET /users/search`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive name fragment; blank matches everyone.
    pub name: String,
}

/// List every user in creation order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user.
///
/// Validation failures answer 400 with a `{field: message}` map in the
/// negotiated locale.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Field violations or malformed body"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    locale: RequestLocale,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users
        .create_user(payload.into_inner().into())
        .await
        .map_err(|err| err.with_locale(locale.0))?;
    Ok(HttpResponse::Created().json(user))
}

/// Search users by name, most recently created first.
#[utoipa::path(
    get,
    path = "/users/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 400, description = "Missing name parameter", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "searchUsers"
)]
#[get("/users/search")]
pub async fn search_users(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<User>>> {
    debug!(name = %params.name, "searching users");
    let users = state.users_query.search_users(&params.name).await?;
    Ok(web::Json(users))
}

/// Fetch one user with their contacts.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Non-numeric identifier", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users_query.get_user(UserId::new(path.into_inner())).await?;
    Ok(web::Json(user))
}

/// Delete a user and their contacts, echoing the removed record.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 202, description = "User deleted", body = User),
        (status = 400, description = "Non-numeric identifier", body = Error),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let user = state.users.delete_user(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::Accepted().json(user))
}
