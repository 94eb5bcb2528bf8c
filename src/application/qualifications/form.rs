use crate::domain::qualifications::{Level, MAX_RATE, QualificationDraft, QualificationKind};
use crate::shared::validation::FieldErrors;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name").with_message(Cow::Borrowed("Name is required")));
    }
    Ok(())
}

fn validate_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate <= Decimal::ZERO {
        return Err(
            ValidationError::new("rate").with_message(Cow::Borrowed("Rate must be greater than 0"))
        );
    }
    if *rate > MAX_RATE {
        return Err(ValidationError::new("rate")
            .with_message(Cow::Owned(format!("Rate must be at most {}", MAX_RATE))));
    }
    Ok(())
}

/// Body of the add and edit qualification forms. Headcount fields only
/// apply to group qualifications, `level` only to private ones.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationRequest {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Music Theory Basics")]
    pub name: String,
    #[validate(custom(function = "validate_rate"))]
    #[schema(value_type = String, example = "45.00")]
    pub rate: Decimal,
    #[schema(example = "$")]
    pub currency: String,
    #[schema(example = "Fundamental music theory for beginners")]
    pub description: Option<String>,
    pub level: Level,
    #[schema(example = 5)]
    pub min_students: u32,
    #[schema(example = 12)]
    pub max_students: u32,
}

impl Default for QualificationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            rate: Decimal::ZERO,
            currency: "$".to_string(),
            description: None,
            level: Level::default(),
            min_students: 0,
            max_students: 0,
        }
    }
}

impl QualificationRequest {
    pub fn check(&self, kind: QualificationKind) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };

        if kind == QualificationKind::Group {
            if self.min_students == 0 {
                errors.insert("minStudents", "Minimum students must be greater than 0");
            }
            if self.max_students == 0 {
                errors.insert("maxStudents", "Maximum students must be greater than 0");
            } else if self.min_students >= self.max_students {
                errors.insert("maxStudents", "Maximum must be greater than minimum");
            }
        }

        errors.into_result()
    }

    pub fn into_draft(self) -> QualificationDraft {
        QualificationDraft {
            name: self.name.trim().to_string(),
            rate: self.rate,
            currency: self.currency,
            description: self.description.filter(|d| !d.trim().is_empty()),
            level: self.level,
            min_students: self.min_students,
            max_students: self.max_students,
        }
    }
}
