use super::*;
use serde_json::json;

// =============================================================
// UserRecord decoding
// =============================================================

#[test]
fn user_record_accepts_numeric_id() {
    let user: UserRecord = serde_json::from_value(json!({"id": 42, "username": "jdoe", "role": "FARMER"})).unwrap();
    assert_eq!(user.id.as_deref(), Some("42"));
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.role.as_deref(), Some("FARMER"));
}

#[test]
fn user_record_reads_null_username_and_email_as_empty() {
    let user: UserRecord =
        serde_json::from_value(json!({"userId": 7, "username": null, "email": 12, "role": "VET"})).unwrap();
    assert_eq!(user.username, "");
    assert_eq!(user.email, "12");
    assert!(user.has_identity());
}

#[test]
fn user_record_accepts_user_id_alias() {
    let user: UserRecord = serde_json::from_value(json!({"userId": 7, "email": "a@b.com"})).unwrap();
    assert_eq!(user.id.as_deref(), Some("7"));
}

#[test]
fn user_record_reads_camel_case_profile_fields() {
    let user: UserRecord = serde_json::from_value(json!({
        "id": "u-1",
        "username": "vet1",
        "email": "vet@farm.test",
        "firstName": "Ada",
        "lastName": "Moss",
        "phoneNumber": "0712345678",
        "createdAt": "2025-01-02T03:04:05",
        "lastLoginDate": 1735787045000_i64,
    }))
    .unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.phone_number.as_deref(), Some("0712345678"));
    assert_eq!(user.created_at.as_deref(), Some("2025-01-02T03:04:05"));
    assert_eq!(user.last_login_date.as_deref(), Some("1735787045000"));
}

#[test]
fn user_record_tolerates_odd_timestamp_shapes() {
    let user: UserRecord =
        serde_json::from_value(json!({"username": "x", "createdAt": [2025, 1, 2, 3, 4], "role": null})).unwrap();
    assert_eq!(user.created_at, None);
    assert_eq!(user.role, None);
}

#[test]
fn has_identity_requires_some_identifier() {
    assert!(!UserRecord::default().has_identity());
    let user = UserRecord { email: "a@b.com".to_owned(), ..UserRecord::default() };
    assert!(user.has_identity());
}

#[test]
fn display_name_prefers_full_name() {
    let user = UserRecord {
        username: "jdoe".to_owned(),
        first_name: Some("Jane".to_owned()),
        last_name: Some("Doe".to_owned()),
        ..UserRecord::default()
    };
    assert_eq!(user.display_name(), "Jane Doe");
    let bare = UserRecord { username: "jdoe".to_owned(), ..UserRecord::default() };
    assert_eq!(bare.display_name(), "jdoe");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_omits_absent_optionals() {
    let body = RegisterRequest {
        username: "jdoe".to_owned(),
        email: "j@farm.test".to_owned(),
        password: "secret1".to_owned(),
        first_name: Some("Jane".to_owned()),
        last_name: None,
        phone_number: None,
        role: "FARMER".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["firstName"], "Jane");
    assert!(value.get("lastName").is_none());
    assert!(value.get("phoneNumber").is_none());
    assert_eq!(value["role"], "FARMER");
}
