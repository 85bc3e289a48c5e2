//! Extractor configuration for inbound HTTP adapters.
//!
//! Actix answers malformed bodies, paths and query strings with plain-text
//! errors by default. These configs route them through the domain [`Error`]
//! so every failure is a JSON envelope with a trace id.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

fn reject(kind: &'static str, req: &HttpRequest, reason: String) -> actix_web::Error {
    debug!(path = %req.path(), kind, %reason, "request rejected by extractor");
    Error::invalid_request(format!("malformed {kind}"))
        .with_details(json!({ "reason": reason }))
        .into()
}

/// JSON body configuration.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req| {
        reject("request body", req, err.to_string())
    })
}

/// Path segment configuration.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, req| reject("path", req, err.to_string()))
}

/// Query string configuration.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, req| reject("query string", req, err.to_string()))
}

/// Fallback for unmatched routes.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for a known path requested with a method it does not serve.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::method_not_allowed(format!(
        "method {} not allowed on {}",
        req.method(),
        req.path()
    )))
}
