//! Request locale extractor.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::ACCEPT_LANGUAGE;
use actix_web::{FromRequest, HttpRequest, web};

use crate::domain::Locale;
use crate::inbound::http::state::HttpState;

/// Locale negotiated from `Accept-Language`, falling back to the configured
/// default. Extraction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    fn resolve(req: &HttpRequest) -> Locale {
        let fallback = req
            .app_data::<web::Data<HttpState>>()
            .map(|state| state.default_locale)
            .unwrap_or_default();
        req.headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(Locale::negotiate)
            .unwrap_or(fallback)
    }
}

impl FromRequest for RequestLocale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self(Self::resolve(req))))
    }
}
