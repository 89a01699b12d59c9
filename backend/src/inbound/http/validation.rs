//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection is an `invalid_request` error whose `details` carry the
//! offending `field`, a stable `code` and, where useful, the raw `value`.

use serde_json::json;

use crate::domain::{Error, GenerationCount, PetNameText, PetNameValidationError, PetType};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidPetType,
    OutOfRange,
    Empty,
    TooLong,
    InvalidInteger,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidPetType => "invalid_pet_type",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::Empty => "empty",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_pet_type_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    let allowed = PetType::ALL
        .iter()
        .map(PetType::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    ValidationError::new(field, format!("{field} must be one of: {allowed}"))
        .with_value(ErrorCode::InvalidPetType, value)
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

pub(crate) fn out_of_range_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(
        field,
        format!(
            "{field} must be between {} and {}",
            GenerationCount::MIN,
            GenerationCount::MAX
        ),
    )
    .with_value(ErrorCode::OutOfRange, value)
}

pub(crate) fn malformed_body_error(field: FieldName, reason: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("malformed {field}: {reason}"))
        .with_code(ErrorCode::MalformedBody)
}

fn pet_name_error(field: FieldName, error: &PetNameValidationError) -> Error {
    let code = match error {
        PetNameValidationError::Empty => ErrorCode::Empty,
        PetNameValidationError::TooLong { .. } => ErrorCode::TooLong,
    };
    ValidationError::new(field.as_str(), error.to_string()).with_code(code)
}

/// Parse a required pet type.
pub(crate) fn parse_pet_type(value: Option<String>, field: FieldName) -> Result<PetType, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    value
        .parse::<PetType>()
        .map_err(|_| invalid_pet_type_error(field, &value))
}

/// Parse an optional pet type filter. A blank value means "no filter".
pub(crate) fn parse_optional_pet_type(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<PetType>, Error> {
    value
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_pet_type(Some(raw), field))
        .transpose()
}

/// Parse an optional generation count, defaulting to one.
pub(crate) fn parse_generation_count(
    value: Option<String>,
    field: FieldName,
) -> Result<GenerationCount, Error> {
    let Some(raw) = value else {
        return Ok(GenerationCount::default());
    };
    let parsed = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_integer_error(field, &raw))?;
    GenerationCount::new(parsed).map_err(|_| out_of_range_error(field, &raw))
}

/// Parse a required pet name.
pub(crate) fn parse_pet_name(value: Option<String>, field: FieldName) -> Result<PetNameText, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    PetNameText::new(value).map_err(|err| pet_name_error(field, &err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PET_NAME_MAX;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("field");

    fn detail_code(error: &Error) -> &str {
        error
            .details()
            .and_then(|details| details["code"].as_str())
            .expect("details carry a code")
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("1"), 1)]
    #[case(Some("10"), 10)]
    #[case(Some(" 4 "), 4)]
    fn generation_count_accepts_valid_values(#[case] raw: Option<&str>, #[case] expected: usize) {
        let count = parse_generation_count(raw.map(str::to_owned), FIELD).expect("valid count");
        assert_eq!(count.get(), expected);
    }

    #[rstest]
    #[case("0", "out_of_range")]
    #[case("11", "out_of_range")]
    #[case("-3", "out_of_range")]
    #[case("ten", "invalid_integer")]
    #[case("2.5", "invalid_integer")]
    #[case("", "invalid_integer")]
    fn generation_count_rejects_invalid_values(#[case] raw: &str, #[case] code: &str) {
        let err = parse_generation_count(Some(raw.to_owned()), FIELD).expect_err("invalid count");
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
        assert_eq!(detail_code(&err), code);
        assert_eq!(err.details().expect("details")["value"], raw);
    }

    #[rstest]
    fn pet_type_filter_treats_absent_and_blank_as_unfiltered() {
        assert_eq!(parse_optional_pet_type(None, FIELD).expect("ok"), None);
        assert_eq!(
            parse_optional_pet_type(Some(String::new()), FIELD).expect("ok"),
            None
        );
        assert_eq!(
            parse_optional_pet_type(Some("hamster".into()), FIELD).expect("ok"),
            Some(PetType::Hamster)
        );
    }

    #[rstest]
    #[case("dragon")]
    #[case("DOG")]
    fn pet_type_rejects_unknown_values(#[case] raw: &str) {
        let err = parse_pet_type(Some(raw.to_owned()), FIELD).expect_err("unknown type");
        assert_eq!(detail_code(&err), "invalid_pet_type");
        assert!(err.message().contains("dog, cat, bird"));
    }

    #[rstest]
    fn missing_values_report_missing_field() {
        let err = parse_pet_type(None, FieldName::new("type")).expect_err("missing");
        assert_eq!(detail_code(&err), "missing_field");
        assert_eq!(err.details().expect("details")["field"], "type");

        let err = parse_pet_name(None, FieldName::new("name")).expect_err("missing");
        assert_eq!(detail_code(&err), "missing_field");
    }

    #[rstest]
    #[case(String::new(), "empty")]
    #[case("x".repeat(PET_NAME_MAX + 1), "too_long")]
    fn pet_name_rejects_invalid_values(#[case] raw: String, #[case] code: &str) {
        let err = parse_pet_name(Some(raw), FIELD).expect_err("invalid name");
        assert_eq!(detail_code(&err), code);
    }

    #[rstest]
    #[case("Mr. Whiskers O'Malley")]
    #[case("   ")]
    fn pet_name_preserves_content(#[case] raw: &str) {
        let name = parse_pet_name(Some(raw.to_owned()), FIELD).expect("valid");
        assert_eq!(name.as_ref(), raw);
    }
}
