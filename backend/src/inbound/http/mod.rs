//! HTTP inbound adapter exposing the directory REST endpoints.

pub mod contacts;
pub mod error;
pub mod extractors;
pub mod health;
pub mod locale;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Paths served by the directory handlers.
const DIRECTORY_PATHS: [&str; 4] = [
    "/users",
    "/users/search",
    "/users/{id}",
    "/users/{id}/contacts",
];

/// Register extractor configs, directory routes and the JSON fallbacks.
///
/// `/users/search` is registered ahead of `/users/{id}` so the literal
/// segment wins. A directory path hit with an unsupported method answers
/// 405; anything else unmatched answers 404. Callers supply
/// `web::Data<HttpState>`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use phonebook::domain::Locale;
/// use phonebook::inbound::http::{configure, state::HttpState};
/// use phonebook::outbound::memory::MemoryDirectoryRepository;
///
/// let state = HttpState::from_repository(Arc::new(MemoryDirectoryRepository::new()), Locale::En);
/// let _app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::path_config())
        .app_data(extractors::query_config())
        .service(users::list_users)
        .service(users::create_user)
        .service(users::search_users)
        .service(users::get_user)
        .service(users::delete_user)
        .service(contacts::create_contact)
        .service(contacts::list_contacts)
        .service(web::resource(DIRECTORY_PATHS).to(extractors::method_not_allowed))
        .default_service(web::to(extractors::route_not_found));
}
