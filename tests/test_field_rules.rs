//! Field rule evaluator and violation aggregation, evaluated against a fixed "today".

use chrono::NaiveDate;
use client_validation_service::domain::client::{self, rules, Outcome};
use client_validation_service::ClientRecord;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn adam() -> ClientRecord {
    ClientRecord {
        id: None,
        name: Some("Adam".to_string()),
        city: Some("Andrychow".to_string()),
        postal_code: Some("16-300".to_string()),
        email: Some("adam@andrychow.pl".to_string()),
        birth_date: NaiveDate::from_ymd_opt(2000, 11, 20),
        positive_number: Some(1),
    }
}

fn single_violation(record: &ClientRecord) -> (&'static str, &'static str) {
    let failure = client::check(record, today()).expect_err("record should be rejected");
    let entries: Vec<_> = failure.violations().iter().collect();
    assert_eq!(entries.len(), 1, "expected exactly one violation, got {:?}", entries);
    entries[0]
}

#[test]
fn valid_record_passes_every_rule() {
    let outcomes = client::evaluate(&adam(), today());
    assert_eq!(outcomes.len(), 6);
    assert!(outcomes.iter().all(|o| o.outcome.is_pass()));
    assert!(client::check(&adam(), today()).is_ok());
}

#[test]
fn rules_run_in_declaration_order() {
    let fields: Vec<_> = client::RULES.iter().map(|r| r.field).collect();
    assert_eq!(
        fields,
        vec!["name", "city", "postalCode", "email", "birthDate", "positiveNumber"]
    );
}

#[test]
fn blank_name_and_city_are_mandatory() {
    for blank in [None, Some(""), Some("   "), Some("\t\n")] {
        let mut record = adam();
        record.name = blank.map(str::to_string);
        assert_eq!(single_violation(&record), ("name", "name is mandatory"));

        let mut record = adam();
        record.city = blank.map(str::to_string);
        assert_eq!(single_violation(&record), ("city", "city is mandatory"));
    }
}

#[test]
fn postal_code_must_be_two_digits_hyphen_three_digits() {
    for good in ["16-300", "00-000", "99-999"] {
        assert!(rules::is_postal_code(good), "{good} should match");
    }
    for bad in ["161-300", "16-3000", "16300", "1-300", "ab-cde", " 16-300", "16-300 ", ""] {
        let mut record = adam();
        record.postal_code = Some(bad.to_string());
        assert_eq!(
            single_violation(&record),
            ("postalCode", "postal code must match format XX-XXX"),
            "{bad:?} should be rejected"
        );
    }

}

#[test]
fn absent_postal_code_passes() {
    let mut record = adam();
    record.postal_code = None;
    assert!(client::check(&record, today()).is_ok());
}

#[test]
fn only_ascii_space_and_control_characters_count_as_blank() {
    for blank in ["\u{0}", "\u{1f}", " \r\n\t "] {
        let mut record = adam();
        record.name = Some(blank.to_string());
        assert_eq!(single_violation(&record), ("name", "name is mandatory"));
    }
    for present in ["\u{2003}", "\u{a0}", " \u{3000} "] {
        let mut record = adam();
        record.city = Some(present.to_string());
        assert!(client::check(&record, today()).is_ok(), "{present:?} is not blank");
    }
}

#[test]
fn blank_email_short_circuits_format_check() {
    for blank in [None, Some(""), Some("  ")] {
        let mut record = adam();
        record.email = blank.map(str::to_string);
        assert_eq!(single_violation(&record), ("email", "must not be blank"));
    }
}

#[test]
fn malformed_email_is_rejected() {
    for bad in [
        "adam",
        "adam@",
        "@andrychow.pl",
        "adam@andrychow",
        "adam@andrychow.",
        "adam@.pl",
        "ad am@andrychow.pl",
        "adam@andry chow.pl",
        "adam..kowalski@andrychow.pl",
        ".adam@andrychow.pl",
        "adam@@andrychow.pl",
        "adam@-andrychow.pl",
    ] {
        let mut record = adam();
        record.email = Some(bad.to_string());
        assert_eq!(
            single_violation(&record),
            ("email", "must be a well-formed email address"),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn well_formed_emails_are_accepted() {
    for good in [
        "adam@andrychow.pl",
        "adam.kowalski@mail.andrychow.pl",
        "adam+news@andrychow.pl",
        "a_b-c@sub-domain.example.com",
        "ADAM@ANDRYCHOW.PL",
    ] {
        assert!(rules::is_well_formed_email(good), "{good} should be accepted");
    }
}

#[test]
fn birth_date_may_be_today_or_earlier() {
    let mut record = adam();
    record.birth_date = Some(today());
    assert!(client::check(&record, today()).is_ok());

    record.birth_date = today().pred_opt();
    assert!(client::check(&record, today()).is_ok());

    record.birth_date = None;
    assert!(client::check(&record, today()).is_ok());

    record.birth_date = today().succ_opt();
    assert_eq!(
        single_violation(&record),
        ("birthDate", "birth date must be past or present")
    );
}

#[test]
fn positive_number_must_be_greater_than_zero() {
    for bad in [None, Some(0), Some(-1), Some(i32::MIN)] {
        let mut record = adam();
        record.positive_number = bad;
        assert_eq!(
            single_violation(&record),
            ("positiveNumber", "must be greater than 0")
        );
    }

    let mut record = adam();
    record.positive_number = Some(i32::MAX);
    assert!(client::check(&record, today()).is_ok());
}

#[test]
fn every_failing_field_reported_once_in_order() {
    let record = ClientRecord {
        id: Some(7),
        name: Some(" ".to_string()),
        city: Some("Andrychow".to_string()),
        postal_code: Some("161-300".to_string()),
        email: Some("adam".to_string()),
        birth_date: today().succ_opt(),
        positive_number: Some(0),
    };
    let failure = client::check(&record, today()).unwrap_err();
    let violations = failure.violations();

    assert_eq!(violations.len(), 5);
    assert_eq!(violations.get("city"), None);
    assert_eq!(
        violations.fields(),
        vec!["name", "postalCode", "email", "birthDate", "positiveNumber"]
    );
    assert_eq!(
        serde_json::to_string(violations).unwrap(),
        concat!(
            r#"{"name":"name is mandatory","#,
            r#""postalCode":"postal code must match format XX-XXX","#,
            r#""email":"must be a well-formed email address","#,
            r#""birthDate":"birth date must be past or present","#,
            r#""positiveNumber":"must be greater than 0"}"#
        )
    );
    assert_eq!(
        failure.to_string(),
        "client record failed validation on: name, postalCode, email, birthDate, positiveNumber"
    );
}

#[test]
fn revalidation_is_stable() {
    let mut record = adam();
    record.email = Some("adam".to_string());
    let first = client::evaluate(&record, today());
    let second = client::evaluate(&record, today());
    assert_eq!(first, second);
    assert_eq!(
        first[3].outcome,
        Outcome::Fail("must be a well-formed email address")
    );
}

#[test]
fn validate_uses_the_current_date() {
    assert!(client::validate(&adam()).is_ok());

    let mut record = adam();
    record.birth_date = client::today().succ_opt();
    let failure = client::validate(&record).unwrap_err();
    assert_eq!(
        failure.violations().get("birthDate"),
        Some("birth date must be past or present")
    );
}
