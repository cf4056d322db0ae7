//! The `Client` entity and its acceptance check.
//!
//! A record is accepted only when every rule in [`rules::RULES`] passes for it.
//! Evaluation is a pure function of the record and the current calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod rules;
pub mod violations;

pub use rules::{evaluate, FieldOutcome, FieldRule, Outcome, RULES};
pub use violations::{ValidationFailure, Violations};

/// A client as received from and returned to HTTP callers.
///
/// Every field is optional on input so that a missing value surfaces as a rule
/// violation instead of a body parsing failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Server-assigned identifier. Omitted from the output until assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[schema(example = "Adam")]
    pub name: Option<String>,
    #[schema(example = "Andrychow")]
    pub city: Option<String>,
    /// Polish-style postal code, `XX-XXX`.
    #[schema(example = "16-300")]
    pub postal_code: Option<String>,
    #[schema(example = "adam@andrychow.pl")]
    pub email: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), today or earlier.
    #[schema(value_type = Option<String>, format = Date, example = "2000-11-20")]
    pub birth_date: Option<NaiveDate>,
    #[schema(example = 1)]
    pub positive_number: Option<i32>,
}

/// Today's date in the host's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Runs every field rule against `record` as of `today`.
///
/// Returns the aggregated violations when at least one rule fails.
pub fn check(record: &ClientRecord, today: NaiveDate) -> Result<(), ValidationFailure> {
    let violations = Violations::from_outcomes(evaluate(record, today));
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(violations))
    }
}

/// Same as [`check`], evaluated against [`today`].
pub fn validate(record: &ClientRecord) -> Result<(), ValidationFailure> {
    check(record, today())
}
