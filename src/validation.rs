//! Ticket request validation
//!
//! Rules are grouped per field and evaluated in order. Evaluation stops at
//! the first group that fails, so a request is rejected with exactly one
//! failure.

use crate::models::TicketRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum description length in UTF-16 code units
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailure {
    /// Wire name of the offending field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl ValidationFailure {
    /// Failure on `field` with the given message
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// `true` when no rule failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in rule order
    pub fn errors(&self) -> &[ValidationFailure] {
        &self.errors
    }

    /// Whether a failure was reported for the wire field name
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Consume the result, keeping the failures
    pub fn into_errors(self) -> Vec<ValidationFailure> {
        self.errors
    }

    /// `Ok` when valid, otherwise the failures
    pub fn into_result(self) -> Result<(), Vec<ValidationFailure>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

type Check = fn(&TicketRequest) -> Option<String>;

struct Rule {
    field: &'static str,
    check: Check,
}

/// Ordered rule-list validator for [`TicketRequest`]
pub struct TicketRequestValidator {
    rules: Vec<Rule>,
}

impl Default for TicketRequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketRequestValidator {
    /// Field reported for an absent or unreadable body
    pub const MODEL_FIELD: &'static str = "model";
    /// Message reported for an absent or unreadable body
    pub const MODEL_INVALID: &'static str = "Supplied model is not valid!";

    /// Validator with the ticket rules in evaluation order
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule { field: "type", check: check_type },
                Rule { field: "customerEmail", check: check_email },
                Rule { field: "customerPhone", check: check_phone },
                Rule { field: "customerNumber", check: check_customer_number },
                Rule { field: "description", check: check_description },
            ],
        }
    }

    /// Validate a request. `None` stands for an absent or unreadable body.
    pub fn validate(&self, request: Option<&TicketRequest>) -> ValidationResult {
        let Some(request) = request else {
            return ValidationResult {
                errors: vec![ValidationFailure::new(Self::MODEL_FIELD, Self::MODEL_INVALID)],
            };
        };

        let errors = self
            .rules
            .iter()
            .find_map(|rule| (rule.check)(request).map(|msg| ValidationFailure::new(rule.field, msg)))
            .into_iter()
            .collect();

        ValidationResult { errors }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Exactly one `@`, with something on both sides
pub fn is_email_address(value: &str) -> bool {
    match value.find('@') {
        Some(at) => at > 0 && at < value.len() - 1 && value.rfind('@') == Some(at),
        None => false,
    }
}

fn check_type(request: &TicketRequest) -> Option<String> {
    let requested = &request.ticket_type;
    requested.known().is_none().then(|| {
        format!("'Type' has a range of values which does not include '{requested}'.")
    })
}

fn check_email(request: &TicketRequest) -> Option<String> {
    let email = request.customer_email.as_deref();
    if is_blank(email) {
        return Some("Email address is required!".into());
    }
    if !email.is_some_and(is_email_address) {
        return Some("A valid email address is required!".into());
    }
    None
}

fn check_phone(request: &TicketRequest) -> Option<String> {
    is_blank(request.customer_phone.as_deref()).then(|| "Phone number is required!".into())
}

fn check_customer_number(request: &TicketRequest) -> Option<String> {
    let number = request.customer_number.as_deref();
    if is_blank(number) {
        return None;
    }
    let raw = number.unwrap_or_default();
    match raw.trim().parse::<i32>() {
        Ok(value) if value >= 0 => None,
        _ => Some(format!("{raw} is not a valid number or less than 0!")),
    }
}

fn check_description(request: &TicketRequest) -> Option<String> {
    let description = request.description.as_deref();
    if is_blank(description) {
        return Some("'Description' must not be empty.".into());
    }
    let len = description.map_or(0, |d| d.encode_utf16().count());
    (len > DESCRIPTION_MAX_LEN).then(|| {
        format!(
            "The length of 'Description' must be {DESCRIPTION_MAX_LEN} characters or fewer. You entered {len} characters."
        )
    })
}
