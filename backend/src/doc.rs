//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every directory endpoint and health probe together
//! with the request and domain schemas. Swagger UI serves it at `/docs` in
//! debug builds.

use utoipa::OpenApi;

use crate::domain::{Contact, Error, ErrorCode, User};
use crate::inbound::http::contacts::CreateContactRequest;
use crate::inbound::http::health::{ProbeBody, ProbeStatus};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "User directory with per-user contacts and localized validation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::search_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Contact,
        Error,
        ErrorCode,
        CreateUserRequest,
        CreateContactRequest,
        ProbeBody,
        ProbeStatus
    )),
    tags(
        (name = "users", description = "Directory users"),
        (name = "contacts", description = "Contacts owned by a user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
