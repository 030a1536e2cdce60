use chrono::NaiveDate;
use clientdir_model::{Client, ClientFilter, ClientId, Matcher};

fn make_client(name: &str, phone: &str, email: &str, date_added: &str, shared_key: &str) -> Client {
    Client {
        id: ClientId::new(1),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        date_added: date_added.to_string(),
        shared_key: shared_key.to_string(),
    }
}

fn john_doe() -> Client {
    make_client("John Doe", "123456789", "john@example.com", "15/06/2024", "jdoe")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Individual matchers ──────────────────────────────────────────

#[test]
fn shared_key_equals_is_case_insensitive() {
    let client = john_doe();
    assert!(Matcher::SharedKeyEquals("jdoe".to_string()).matches(&client));
    assert!(Matcher::SharedKeyEquals("JDOE".to_string()).matches(&client));
    assert!(!Matcher::SharedKeyEquals("jdo".to_string()).matches(&client));
    assert!(!Matcher::SharedKeyEquals("jsmith".to_string()).matches(&client));
}

#[test]
fn name_contains_is_case_insensitive_substring() {
    let client = john_doe();
    assert!(Matcher::NameContains("doe".to_string()).matches(&client));
    assert!(Matcher::NameContains("OHN".to_string()).matches(&client));
    assert!(!Matcher::NameContains("smith".to_string()).matches(&client));
}

#[test]
fn name_filter_doe_excludes_jane_smith() {
    let jane = make_client("Jane Smith", "987", "jane@example.com", "01/01/2024", "jsmith");
    let matcher = Matcher::NameContains("doe".to_string());
    assert!(matcher.matches(&john_doe()));
    assert!(!matcher.matches(&jane));
}

#[test]
fn phone_contains_is_case_sensitive_and_raw() {
    let client = make_client("John Doe", "555-ABc-1234", "j@e.com", "01/01/2024", "jdoe");
    assert!(Matcher::PhoneContains("ABc".to_string()).matches(&client));
    assert!(!Matcher::PhoneContains("abc".to_string()).matches(&client));
    assert!(Matcher::PhoneContains("-1234".to_string()).matches(&client));
}

#[test]
fn email_contains_is_case_insensitive() {
    let client = john_doe();
    assert!(Matcher::EmailContains("EXAMPLE".to_string()).matches(&client));
    assert!(!Matcher::EmailContains("gmail".to_string()).matches(&client));
}

// ── Date range ───────────────────────────────────────────────────

#[test]
fn date_range_includes_stored_date_inside_bounds() {
    let inside = john_doe(); // 15/06/2024
    let after = Matcher::AddedOnOrAfter(date(2024, 1, 1));
    let before = Matcher::AddedOnOrBefore(date(2024, 12, 31));
    assert!(after.matches(&inside));
    assert!(before.matches(&inside));
}

#[test]
fn date_range_excludes_stored_date_outside_bounds() {
    let old = make_client("Old Client", "1", "old@example.com", "01/01/2023", "oclient");
    assert!(!Matcher::AddedOnOrAfter(date(2024, 1, 1)).matches(&old));
    assert!(Matcher::AddedOnOrBefore(date(2024, 12, 31)).matches(&old));
}

#[test]
fn date_bounds_are_inclusive() {
    let client = john_doe(); // 15/06/2024
    assert!(Matcher::AddedOnOrAfter(date(2024, 6, 15)).matches(&client));
    assert!(Matcher::AddedOnOrBefore(date(2024, 6, 15)).matches(&client));
    assert!(!Matcher::AddedOnOrAfter(date(2024, 6, 16)).matches(&client));
    assert!(!Matcher::AddedOnOrBefore(date(2024, 6, 14)).matches(&client));
}

#[test]
fn unparseable_stored_date_fails_date_matchers() {
    let broken = make_client("B C", "1", "b@c.com", "2024-06-15", "bc");
    assert!(!Matcher::AddedOnOrAfter(date(2000, 1, 1)).matches(&broken));
    assert!(!Matcher::AddedOnOrBefore(date(2100, 1, 1)).matches(&broken));
}

// ── Combination ──────────────────────────────────────────────────

#[test]
fn empty_filter_matches_everything() {
    assert!(ClientFilter::new().matches(&john_doe()));
    assert!(ClientFilter::new().is_empty());
}

#[test]
fn filter_is_logical_and() {
    let client = john_doe();

    let both = ClientFilter::from(vec![
        Matcher::NameContains("doe".to_string()),
        Matcher::PhoneContains("1234".to_string()),
    ]);
    assert!(both.matches(&client));

    let one_fails = ClientFilter::from(vec![
        Matcher::NameContains("doe".to_string()),
        Matcher::PhoneContains("0000".to_string()),
    ]);
    assert!(!one_fails.matches(&client));
}

#[test]
fn push_accumulates_matchers() {
    let mut filter = ClientFilter::new();
    filter.push(Matcher::SharedKeyEquals("jdoe".to_string()));
    filter.push(Matcher::EmailContains("example".to_string()));
    assert_eq!(filter.matchers().len(), 2);
    assert!(filter.matches(&john_doe()));
}
