//! Unit tests for the user aggregate.

use super::*;
use crate::domain::contact::{ContactDraft, ContactId, NewContact};
use crate::domain::validation::ViolationKind;
use rstest::rstest;
use serde_json::json;

fn new_user(first: &str, last: Option<&str>) -> NewUser {
    NewUser::try_from(UserDraft {
        first_name: Some(first.to_owned()),
        last_name: last.map(str::to_owned),
    })
    .expect("valid user")
}

#[rstest]
#[case(None, ViolationKind::NotNull)]
#[case(Some(""), ViolationKind::NotBlank)]
#[case(Some("   "), ViolationKind::NotBlank)]
fn rejects_missing_or_blank_first_name(
    #[case] first_name: Option<&str>,
    #[case] expected: ViolationKind,
) {
    let draft = UserDraft {
        first_name: first_name.map(str::to_owned),
        last_name: Some("Smith".to_owned()),
    };
    let violations = NewUser::try_from(draft).expect_err("invalid first name");
    assert_eq!(violations.get(FieldName::FIRST_NAME), Some(expected));
    assert_eq!(violations.len(), 1);
}

#[rstest]
fn last_name_is_optional() {
    let input = new_user("Alex", None);
    assert_eq!(input.first_name(), "Alex");
    assert!(input.last_name().is_none());
}

#[rstest]
fn new_user_starts_without_contacts() {
    let user = User::new(UserId::new(9), new_user("Alex", Some("Smith")));
    assert_eq!(user.id(), UserId::new(9));
    assert!(user.contacts().is_empty());
}

#[rstest]
fn serialises_camel_case_with_numeric_id() {
    let user = User::new(UserId::new(4), new_user("Alex", Some("Smith")));
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 4, "firstName": "Alex", "lastName": "Smith", "contacts": [] })
    );
}

#[rstest]
fn contacts_keep_insertion_order() {
    let mut user = User::new(UserId::new(1), new_user("Jordan", Some("Smith")));
    for (raw_id, name) in [(7, "Arthur"), (3, "Lee")] {
        let input = NewContact::try_from(ContactDraft {
            first_name: Some(name.to_owned()),
            last_name: Some("Harper".to_owned()),
            phone: Some("5555555555".to_owned()),
            email: Some("art@gmail.com".to_owned()),
        })
        .expect("valid contact");
        user.push_contact(Contact::new(ContactId::new(raw_id), input));
    }
    let names: Vec<_> = user.contacts().iter().map(Contact::first_name).collect();
    assert_eq!(names, ["Arthur", "Lee"]);
}

#[rstest]
#[case("max", true)]
#[case("MA", true)]
#[case("smith", true)]
#[case("max smith", true)]
#[case("", true)]
#[case("maxim", false)]
#[case("jones", false)]
fn matches_name_case_insensitively(#[case] needle: &str, #[case] expected: bool) {
    let user = User::new(UserId::new(1), new_user("Max", Some("Smith")));
    assert_eq!(user.matches_name(&needle.to_lowercase()), expected);
}

#[rstest]
fn user_id_parses_from_path_segment() {
    assert_eq!("42".parse::<UserId>().map(UserId::get), Ok(42));
    assert!("search".parse::<UserId>().is_err());
}
