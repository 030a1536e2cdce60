use chrono::NaiveDate;
use clientdir_model::{Client, ClientId, ClientPatch};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> Client {
    Client {
        id: ClientId::new(7),
        name: "John Doe".to_string(),
        phone: "123456789".to_string(),
        email: "john@example.com".to_string(),
        date_added: "01/01/2024".to_string(),
        shared_key: "jdoe".to_string(),
    }
}

#[test]
fn serializes_with_camel_case_field_names() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 7,
            "name": "John Doe",
            "phone": "123456789",
            "email": "john@example.com",
            "dateAdded": "01/01/2024",
            "sharedKey": "jdoe",
        })
    );
}

#[test]
fn deserializes_from_wire_shape() {
    let parsed: Client = serde_json::from_value(json!({
        "id": 7,
        "name": "John Doe",
        "phone": "123456789",
        "email": "john@example.com",
        "dateAdded": "01/01/2024",
        "sharedKey": "jdoe",
    }))
    .unwrap();
    assert_eq!(parsed, sample());
}

#[test]
fn patch_shared_key_is_optional_on_the_wire() {
    let patch: ClientPatch = serde_json::from_value(json!({
        "name": "New Name",
        "phone": "111111",
        "email": "new@example.com",
    }))
    .unwrap();
    assert_eq!(patch.shared_key, None);

    let patch: ClientPatch = serde_json::from_value(json!({
        "name": "New Name",
        "phone": "111111",
        "email": "new@example.com",
        "sharedKey": "newkey",
    }))
    .unwrap();
    assert_eq!(patch.shared_key.as_deref(), Some("newkey"));
}

#[test]
fn date_added_parses_as_calendar_date() {
    assert_eq!(
        sample().date_added_parsed(),
        NaiveDate::from_ymd_opt(2024, 1, 1)
    );
}

#[test]
fn bad_date_added_parses_as_none() {
    let mut client = sample();
    client.date_added = "2024-01-01".to_string(); // ISO, not dd/MM/yyyy
    assert_eq!(client.date_added_parsed(), None);
}

#[test]
fn client_id_displays_as_raw_number() {
    assert_eq!(ClientId::new(42).to_string(), "42");
}
