//! Field rule evaluator.
//!
//! One rule per constrained field, held in an ordered table. Each rule yields
//! at most one message for its field.

use super::ClientRecord;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const NAME_MANDATORY: &str = "name is mandatory";
pub const CITY_MANDATORY: &str = "city is mandatory";
pub const POSTAL_CODE_FORMAT: &str = "postal code must match format XX-XXX";
pub const EMAIL_BLANK: &str = "must not be blank";
pub const EMAIL_MALFORMED: &str = "must be a well-formed email address";
pub const BIRTH_DATE_PAST_OR_PRESENT: &str = "birth date must be past or present";
pub const NOT_POSITIVE: &str = "must be greater than 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(&'static str),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// The outcome of one rule, tagged with the JSON field name it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOutcome {
    pub field: &'static str,
    pub outcome: Outcome,
}

type Check = fn(&ClientRecord, NaiveDate) -> Outcome;

pub struct FieldRule {
    /// Field name as it appears on the wire.
    pub field: &'static str,
    check: Check,
}

impl FieldRule {
    pub fn apply(&self, record: &ClientRecord, today: NaiveDate) -> FieldOutcome {
        FieldOutcome {
            field: self.field,
            outcome: (self.check)(record, today),
        }
    }
}

/// Rules in declaration order. Violations are reported in this order.
pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        check: check_name,
    },
    FieldRule {
        field: "city",
        check: check_city,
    },
    FieldRule {
        field: "postalCode",
        check: check_postal_code,
    },
    FieldRule {
        field: "email",
        check: check_email,
    },
    FieldRule {
        field: "birthDate",
        check: check_birth_date,
    },
    FieldRule {
        field: "positiveNumber",
        check: check_positive_number,
    },
];

/// Evaluates every rule against `record`, one outcome per constrained field.
pub fn evaluate(record: &ClientRecord, today: NaiveDate) -> Vec<FieldOutcome> {
    RULES.iter().map(|rule| rule.apply(record, today)).collect()
}

/// Absent and empty strings are blank, as are strings made only of
/// control characters and ASCII spaces (`<= U+0020`).
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim_matches(|c: char| c <= ' ').is_empty())
}

pub fn is_postal_code(value: &str) -> bool {
    postal_code_regex().is_match(value)
}

/// Dot-atom local part, `@`, then a domain of at least two DNS labels.
pub fn is_well_formed_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.len() > 64 || domain.len() > 255 {
        return false;
    }
    email_regex().is_match(value)
}

fn not_blank(value: Option<&str>, message: &'static str) -> Outcome {
    if is_blank(value) {
        Outcome::Fail(message)
    } else {
        Outcome::Pass
    }
}

fn check_name(record: &ClientRecord, _today: NaiveDate) -> Outcome {
    not_blank(record.name.as_deref(), NAME_MANDATORY)
}

fn check_city(record: &ClientRecord, _today: NaiveDate) -> Outcome {
    not_blank(record.city.as_deref(), CITY_MANDATORY)
}

fn check_postal_code(record: &ClientRecord, _today: NaiveDate) -> Outcome {
    // Only a present code is matched against the pattern.
    match record.postal_code.as_deref() {
        Some(code) if !is_postal_code(code) => Outcome::Fail(POSTAL_CODE_FORMAT),
        _ => Outcome::Pass,
    }
}

fn check_email(record: &ClientRecord, _today: NaiveDate) -> Outcome {
    match record.email.as_deref() {
        email if is_blank(email) => Outcome::Fail(EMAIL_BLANK),
        Some(email) if is_well_formed_email(email) => Outcome::Pass,
        _ => Outcome::Fail(EMAIL_MALFORMED),
    }
}

fn check_birth_date(record: &ClientRecord, today: NaiveDate) -> Outcome {
    match record.birth_date {
        Some(date) if date > today => Outcome::Fail(BIRTH_DATE_PAST_OR_PRESENT),
        _ => Outcome::Pass,
    }
}

fn check_positive_number(record: &ClientRecord, _today: NaiveDate) -> Outcome {
    match record.positive_number {
        Some(n) if n > 0 => Outcome::Pass,
        _ => Outcome::Fail(NOT_POSITIVE),
    }
}

static POSTAL_CODE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn postal_code_regex() -> &'static Regex {
    POSTAL_CODE_RE.get_or_init(|| {
        Regex::new(r"^[0-9]{2}-[0-9]{3}$")
            .unwrap_or_else(|error| panic!("postal code regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let atom = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}-]+";
        let label = r"[A-Za-z0-9\x{80}-\x{10FFFF}](?:[A-Za-z0-9\x{80}-\x{10FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{10FFFF}])?";
        let pattern = format!(r"^{atom}(?:\.{atom})*@{label}(?:\.{label})+$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}
