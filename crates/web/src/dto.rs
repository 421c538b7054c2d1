//! Request payload shared by the JSON API and the HTML forms.

use std::borrow::Cow;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::{AppError, AppResult, FieldError};
use domain::{User, UserDetails, DATE_FORMAT};

/// Digits, spaces and `+ - . ( )`, with at least one digit. Empty input is
/// left to the required check.
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9 +().\-]*[0-9][0-9 +().\-]*)?$").expect("valid regex"));

/// User fields as submitted by a client.
///
/// Every field is a string and a missing field reads as empty, so one
/// validation pass reports everything that is wrong. Values are trimmed on
/// the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    /// Unique business code
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 50, message = "Code is required and must not exceed 50 characters"))]
    #[schema(example = "U001")]
    pub code: String,

    /// Full name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 200,
        message = "Full name is required and must not exceed 200 characters"
    ))]
    #[schema(example = "Nguyen Van A")]
    pub full_name: String,

    /// Date of birth, `YYYY-MM-DD`
    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_date_of_birth"))]
    #[schema(example = "1990-05-17")]
    pub date_of_birth: String,

    /// Email address
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 200, message = "Email is required and must not exceed 200 characters"),
        email(message = "Email is not a valid email address")
    )]
    #[schema(example = "a.nguyen@example.com")]
    pub email: String,

    /// Phone number
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(
            min = 1,
            max = 20,
            message = "Phone number is required and must not exceed 20 characters"
        ),
        regex(path = *PHONE_NUMBER_REGEX, message = "Phone number is not a valid phone number")
    )]
    #[schema(example = "+84 912 345 678")]
    pub phone_number: String,

    /// Postal address
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 500,
        message = "Address is required and must not exceed 500 characters"
    ))]
    #[schema(example = "12 Ly Thai To, Hanoi")]
    pub address: String,
}

impl UserPayload {
    /// Convert a validated payload into store input.
    pub fn into_details(self) -> AppResult<UserDetails> {
        let date_of_birth = parse_date(&self.date_of_birth).ok_or_else(|| {
            AppError::validation(vec![FieldError::new("dateOfBirth", INVALID_DATE_MESSAGE)])
        })?;

        Ok(UserDetails {
            code: self.code,
            full_name: self.full_name,
            date_of_birth,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
        })
    }
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            code: user.code.clone(),
            full_name: user.full_name.clone(),
            date_of_birth: user.date_of_birth.format(DATE_FORMAT).to_string(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            address: user.address.clone(),
        }
    }
}

const INVALID_DATE_MESSAGE: &str = "Date of birth must be a valid date (YYYY-MM-DD)";

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(validation_error("required", "Date of birth is required"));
    }
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(validation_error("date", INVALID_DATE_MESSAGE)),
    }
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Accept a string or null, trimming surrounding whitespace.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::to_field_errors;
    use domain::{
        MAX_ADDRESS_LENGTH, MAX_CODE_LENGTH, MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH,
        MAX_PHONE_NUMBER_LENGTH,
    };

    fn valid_payload() -> UserPayload {
        UserPayload {
            code: "U1".to_string(),
            full_name: "Nguyen Van A".to_string(),
            date_of_birth: "1990-05-17".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "+84 (912) 345-678".to_string(),
            address: "12 Ly Thai To, Hanoi".to_string(),
        }
    }

    fn failing_fields(payload: &UserPayload) -> Vec<String> {
        let errors = payload.validate().unwrap_err();
        let mut fields: Vec<String> = to_field_errors(&errors)
            .into_iter()
            .map(|e| e.field)
            .collect();
        fields.dedup();
        fields
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_default_to_empty_and_fail() {
        let payload: UserPayload = serde_json::from_str(r#"{"code":"U1"}"#).unwrap();

        assert_eq!(payload.full_name, "");
        assert_eq!(
            failing_fields(&payload),
            vec!["address", "dateOfBirth", "email", "fullName", "phoneNumber"]
        );
    }

    #[test]
    fn test_values_are_trimmed_and_null_reads_as_empty() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"code":"  U1 ","fullName":null}"#).unwrap();

        assert_eq!(payload.code, "U1");
        assert_eq!(payload.full_name, "");
    }

    /// Well-formed email of exactly `len` characters, built from 60-character
    /// domain labels
    fn email_of_length(len: usize) -> String {
        let body = len - "user@".len() - ".com".len();
        let mut labels = String::with_capacity(body);
        while labels.len() < body {
            if labels.len() % 61 == 60 {
                labels.push('.');
            } else {
                labels.push('d');
            }
        }
        format!("user@{}.com", labels)
    }

    /// Phone number of exactly `len` digits
    fn phone_of_length(len: usize) -> String {
        "9".repeat(len)
    }

    #[test]
    fn test_max_lengths_are_enforced() {
        let mut payload = valid_payload();
        payload.code = "C".repeat(MAX_CODE_LENGTH);
        payload.full_name = "N".repeat(MAX_FULL_NAME_LENGTH);
        payload.email = email_of_length(MAX_EMAIL_LENGTH);
        payload.phone_number = phone_of_length(MAX_PHONE_NUMBER_LENGTH);
        payload.address = "A".repeat(MAX_ADDRESS_LENGTH);
        assert!(payload.validate().is_ok());

        payload.code = "C".repeat(MAX_CODE_LENGTH + 1);
        payload.full_name = "N".repeat(MAX_FULL_NAME_LENGTH + 1);
        payload.email = email_of_length(MAX_EMAIL_LENGTH + 1);
        payload.phone_number = phone_of_length(MAX_PHONE_NUMBER_LENGTH + 1);
        payload.address = "A".repeat(MAX_ADDRESS_LENGTH + 1);
        assert_eq!(
            failing_fields(&payload),
            vec!["address", "code", "email", "fullName", "phoneNumber"]
        );
    }

    #[test]
    fn test_email_shape_is_checked() {
        let mut payload = valid_payload();
        payload.email = "not-an-email".to_string();

        assert_eq!(failing_fields(&payload), vec!["email"]);
    }

    #[test]
    fn test_phone_number_shape_is_checked() {
        let mut payload = valid_payload();

        payload.phone_number = "0912.345.678".to_string();
        assert!(payload.validate().is_ok());

        payload.phone_number = "call me".to_string();
        assert_eq!(failing_fields(&payload), vec!["phoneNumber"]);

        payload.phone_number = "(+)".to_string();
        assert_eq!(failing_fields(&payload), vec!["phoneNumber"]);
    }

    #[test]
    fn test_date_of_birth_must_be_a_calendar_date() {
        let mut payload = valid_payload();

        payload.date_of_birth = "2000-02-30".to_string();
        assert_eq!(failing_fields(&payload), vec!["dateOfBirth"]);

        payload.date_of_birth = "17/05/1990".to_string();
        assert_eq!(failing_fields(&payload), vec!["dateOfBirth"]);
    }

    #[test]
    fn test_into_details_parses_date() {
        let details = valid_payload().into_details().unwrap();

        assert_eq!(
            details.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
        assert_eq!(details.code, "U1");
    }

    #[test]
    fn test_payload_from_user_formats_date() {
        let user = valid_payload().into_details().unwrap().with_id(7);

        let payload = UserPayload::from(&user);

        assert_eq!(payload, valid_payload());
    }
}
