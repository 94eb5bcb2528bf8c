use crate::domain::booking::{SessionDuration, digits_only, format_card_number, format_expiry_date};
use crate::domain::qualifications::Qualification;
use crate::shared::validation::FieldErrors;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const CVV_DIGITS: usize = 3;

static EXPIRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("expiry pattern compiles"));
static CVV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("cvv pattern compiles"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() == 16 && compact.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("card_number", "Valid card number is required"))
    }
}

fn validate_cardholder_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("cardholder_name", "Cardholder name is required"));
    }
    Ok(())
}

/// First step of the booking dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDetails {
    #[validate(length(min = 1, message = "Date is required"))]
    #[schema(example = "2026-11-03")]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required"))]
    #[schema(example = "14:00")]
    pub time: String,
    #[schema(value_type = u32, example = 60)]
    pub duration: SessionDuration,
    /// Group headcount; omitted keeps the current draft's count. Private
    /// bookings are always for one student.
    #[schema(example = 6)]
    pub student_count: Option<u32>,
    pub notes: String,
}

impl BookingDetails {
    pub fn for_qualification(qualification: &Qualification) -> Self {
        Self {
            student_count: Some(qualification.default_student_count()),
            ..Self::default()
        }
    }

    /// Settles the headcount of a submitted form against the draft it replaces
    pub fn resolve(self, qualification: &Qualification, draft: &BookingDetails) -> Self {
        let student_count = match qualification {
            Qualification::Private(_) => 1,
            Qualification::Group(_) => self
                .student_count
                .or(draft.student_count)
                .unwrap_or_else(|| qualification.default_student_count()),
        };
        Self {
            student_count: Some(student_count),
            ..self
        }
    }

    pub fn headcount(&self) -> u32 {
        self.student_count.unwrap_or(1)
    }

    /// Field rules plus the group headcount bounds of the booked qualification
    pub fn check(&self, qualification: &Qualification) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };

        if let Qualification::Group(group) = qualification {
            let (min, max) = group.student_bounds();
            if self.headcount() < min {
                errors.insert("studentCount", format!("Minimum {} students required", min));
            } else if self.headcount() > max {
                errors.insert("studentCount", format!("Maximum {} students allowed", max));
            }
        }

        errors.into_result()
    }
}

/// Card form of the payment step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentDetails {
    #[validate(custom(function = "validate_card_number"))]
    #[schema(example = "4111 1111 1111 1111")]
    pub card_number: String,
    #[validate(regex(path = *EXPIRY_PATTERN, message = "Valid expiry date is required (MM/YY)"))]
    #[schema(example = "12/27")]
    pub expiry_date: String,
    #[validate(regex(path = *CVV_PATTERN, message = "Valid CVV is required"))]
    #[schema(example = "123")]
    pub cvv: String,
    #[validate(custom(function = "validate_cardholder_name"))]
    #[schema(example = "Jordan Reyes")]
    pub cardholder_name: String,
    pub billing_address: String,
    pub city: String,
    pub zip_code: String,
}

impl PaymentDetails {
    /// Input masks applied as the user types
    pub fn normalized(self) -> Self {
        Self {
            card_number: format_card_number(&self.card_number),
            expiry_date: format_expiry_date(&self.expiry_date),
            cvv: digits_only(&self.cvv).chars().take(CVV_DIGITS).collect(),
            ..self
        }
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    /// "•••• 1111", never the full number
    pub fn masked_card(&self) -> String {
        let digits = digits_only(&self.card_number);
        if digits.len() < 4 {
            return String::new();
        }
        format!("•••• {}", &digits[digits.len() - 4..])
    }
}
