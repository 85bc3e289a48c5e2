//! Contact sub-resource handlers.
//!
//! ```text
//! POST /users/{id}/contacts {"firstName":"Art","lastName":"Vandelay","phone":"5555555555","email":"art@gmail.com"}
//! GET  /users/{id}/contacts
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactDraft, Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::locale::RequestLocale;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users/{id}/contacts`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[schema(example = "Art")]
    pub first_name: Option<String>,
    #[schema(example = "Vandelay")]
    pub last_name: Option<String>,
    /// Exactly ten ASCII digits.
    #[schema(example = "5555555555")]
    pub phone: Option<String>,
    #[schema(example = "art@gmail.com")]
    pub email: Option<String>,
}

impl From<CreateContactRequest> for ContactDraft {
    fn from(value: CreateContactRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            email: value.email,
        }
    }
}

/// Attach a contact to a user.
///
/// Fields are validated before the owner is looked up, so an invalid body
/// against an unknown user still answers 400.
#[utoipa::path(
    post,
    path = "/users/{id}/contacts",
    params(("id" = u64, Path, description = "Owning user identifier")),
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Field violations or malformed request"),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/users/{id}/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    locale: RequestLocale,
    path: web::Path<u64>,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let owner = UserId::new(path.into_inner());
    let contact = state
        .contacts
        .create_contact(owner, payload.into_inner().into())
        .await
        .map_err(|err| err.with_locale(locale.0))?;
    Ok(HttpResponse::Created().json(contact))
}

/// List a user's contacts in insertion order.
#[utoipa::path(
    get,
    path = "/users/{id}/contacts",
    params(("id" = u64, Path, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Contacts", body = [Contact]),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/users/{id}/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Contact>>> {
    let contacts = state
        .contacts_query
        .list_contacts(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;
    use crate::domain::ports::{MockContactsCommand, MockContactsQuery};
    use crate::inbound::http::configure;
    use crate::inbound::http::test_utils::memory_state;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ACCEPT_LANGUAGE;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn valid_contact() -> Value {
        json!({
            "firstName": "Art",
            "lastName": "Vandelay",
            "phone": "5555555555",
            "email": "art@gmail.com",
        })
    }

    async fn seeded_user(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> u64 {
        let req = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "firstName": "Jerry", "lastName": "Seinfeld" }))
            .to_request();
        let user: Value = actix_test::call_and_read_body_json(app, req).await;
        user.get("id").and_then(Value::as_u64).expect("id assigned")
    }

    #[rstest]
    #[actix_web::test]
    async fn create_contact_echoes_fields() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state(Locale::En)))
                .configure(configure),
        )
        .await;
        let id = seeded_user(&app).await;

        let req = actix_test::TestRequest::post()
            .uri(&format!("/users/{id}/contacts"))
            .set_json(valid_contact())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("phone"), Some(&json!("5555555555")));
        assert_eq!(body.get("email"), Some(&json!("art@gmail.com")));
        assert_eq!(body.get("firstName"), Some(&json!("Art")));
        assert_eq!(body.get("lastName"), Some(&json!("Vandelay")));

        let req = actix_test::TestRequest::get()
            .uri(&format!("/users/{id}/contacts"))
            .to_request();
        let listed: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[case(Locale::En, "must be a well-formed email address")]
    #[case(Locale::Ru, "email определен в неверном формате")]
    #[actix_web::test]
    async fn invalid_contact_reports_every_field(
        #[case] locale: Locale,
        #[case] email_message: &str,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state(Locale::En)))
                .configure(configure),
        )
        .await;
        let id = seeded_user(&app).await;

        let req = actix_test::TestRequest::post()
            .uri(&format!("/users/{id}/contacts"))
            .insert_header((ACCEPT_LANGUAGE, locale.as_str()))
            .set_json(json!({
                "firstName": "Art",
                "lastName": "Vandelay",
                "phone": "777777777",
                "email": "art@gmail.",
            }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        let fields = body.as_object().expect("violation map");
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("phone"));
        assert_eq!(
            fields.get("email").and_then(Value::as_str),
            Some(email_message)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_owner_is_not_found() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(memory_state(Locale::En)))
                .configure(configure),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/users/404/contacts")
            .set_json(valid_contact())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("code"), Some(&json!("not_found")));
    }

    #[rstest]
    #[actix_web::test]
    async fn handlers_delegate_to_ports() {
        let mut command = MockContactsCommand::new();
        command
            .expect_create_contact()
            .withf(|owner, draft| {
                owner.get() == 7 && draft.phone.as_deref() == Some("5555555555")
            })
            .times(1)
            .return_once(|_, _| Err(Error::internal("store offline")));
        let mut query = MockContactsQuery::new();
        query.expect_list_contacts().never();

        let mut state = memory_state(Locale::En);
        state.contacts = Arc::new(command);
        state.contacts_query = Arc::new(query);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/users/7/contacts")
            .set_json(valid_contact())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("message"), Some(&json!("Internal server error")));
    }
}
