use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use wasm_bindgen::prelude::*;

pub mod effects;
pub mod flow;

/// Fixed user-facing texts (Bulgarian).
pub mod messages {
    pub const MISSING_FIELD_PREFIX: &str = "Моля, попълнете полето: ";
    pub const INVALID_EMAIL: &str = "Моля, въведете валиден email адрес";
    pub const INVALID_PHONE: &str = "Моля, въведете валиден телефонен номер";

    pub const INVALID_PAYLOAD: &str = "Моля, попълнете формата отново";

    pub const SUCCESS_ICON: &str = "✅";
    pub const SUCCESS_HEADING: &str = "Успешна регистрация!";
    pub const SUCCESS_BODY: &str =
        "Вашата регистрация беше приета. Ще получите потвърждение на посочения email адрес.";
    pub const SUCCESS_DISMISS: &str = "Затвори";
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+359|0)[0-9]{9}$").unwrap());
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// A required registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    City,
    Tournament,
    Experience,
}

impl Field {
    /// All required fields, in evaluation order.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::City,
        Field::Tournament,
        Field::Experience,
    ];

    /// The form control name (`name="..."` attribute).
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::City => "city",
            Field::Tournament => "tournament",
            Field::Experience => "experience",
        }
    }

    /// Human-readable label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "Име",
            Field::LastName => "Фамилия",
            Field::Email => "Email",
            Field::Phone => "Телефон",
            Field::City => "Град",
            Field::Tournament => "Турнир",
            Field::Experience => "Опит",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw field values collected from the form at submit time.
///
/// Keys are form control names. Entries that are absent read as blank, so a
/// submission built from a partial form still validates deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationSubmission {
    values: HashMap<String, String>,
}

impl RegistrationSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a known field.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field.name().to_string(), value.into());
        self
    }

    /// Set a raw value by control name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of `field`, or `""` when the form did not provide it.
    pub fn get(&self, field: Field) -> &str {
        self.values
            .get(field.name())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl FromIterator<(String, String)> for RegistrationSubmission {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Reasons a submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(Field),
    InvalidEmailFormat,
    InvalidPhoneFormat,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "{}{}", messages::MISSING_FIELD_PREFIX, field.label())
            }
            ValidationError::InvalidEmailFormat => f.write_str(messages::INVALID_EMAIL),
            ValidationError::InvalidPhoneFormat => f.write_str(messages::INVALID_PHONE),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Whitespace as browsers define it for form text: Unicode `White_Space`
/// plus the byte-order mark U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Strip every whitespace run from a phone number ("0888 123 456" -> "0888123456").
pub fn normalize_phone(raw: &str) -> String {
    WHITESPACE_REGEX.replace_all(raw, "").into_owned()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Bulgarian national format: `+359` or `0`, then exactly nine digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(&normalize_phone(phone))
}

/// Validate a submission, stopping at the first failure.
///
/// Required fields are checked in [`Field::ALL`] order before the email
/// shape, and the email shape before the phone format.
pub fn validate_submission(submission: &RegistrationSubmission) -> Result<(), ValidationError> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|&f| submission.get(f).trim_matches(is_form_whitespace).is_empty())
    {
        debug!("Registration rejected: '{}' is blank", field);
        return Err(ValidationError::MissingField(field));
    }

    if !is_valid_email(submission.get(Field::Email)) {
        debug!("Registration rejected: malformed email");
        return Err(ValidationError::InvalidEmailFormat);
    }

    if !is_valid_phone(submission.get(Field::Phone)) {
        debug!("Registration rejected: phone not in national format");
        return Err(ValidationError::InvalidPhoneFormat);
    }

    Ok(())
}

/// User-facing message for a registration payload, or `None` when it is valid.
///
/// The payload is an object mapping field names to strings. Anything that
/// does not have that shape is logged and answered with a generic message.
pub fn registration_message(payload: serde_json::Value) -> Option<String> {
    let submission: RegistrationSubmission = match serde_json::from_value(payload) {
        Ok(s) => s,
        Err(e) => {
            warn!("Malformed registration payload: {}", e);
            return Some(messages::INVALID_PAYLOAD.to_string());
        }
    };

    validate_submission(&submission).err().map(|e| e.to_string())
}

/// Validation entry point for plain pages that do not mount the Yew app.
///
/// Returns `null` when the submission is valid, otherwise the user-facing
/// message.
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(fields_js: JsValue) -> JsValue {
    let payload: serde_json::Value = match serde_wasm_bindgen::from_value(fields_js) {
        Ok(v) => v,
        Err(e) => {
            warn!("Registration payload is not plain data: {}", e);
            return JsValue::from_str(messages::INVALID_PAYLOAD);
        }
    };

    match registration_message(payload) {
        Some(message) => JsValue::from_str(&message),
        None => JsValue::NULL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> RegistrationSubmission {
        RegistrationSubmission::new()
            .with(Field::FirstName, "Ivan")
            .with(Field::LastName, "Petrov")
            .with(Field::Email, "ivan@example.bg")
            .with(Field::Phone, "+359888123456")
            .with(Field::City, "Sofia")
            .with(Field::Tournament, "Open")
            .with(Field::Experience, "2 years")
    }

    #[test]
    fn accepts_complete_submission() {
        assert_eq!(validate_submission(&valid_submission()), Ok(()));
    }

    #[test]
    fn blank_first_name_is_reported_with_label() {
        let sub = valid_submission().with(Field::FirstName, "");
        let err = validate_submission(&sub).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::FirstName));
        assert_eq!(err.to_string(), "Моля, попълнете полето: Име");
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let sub = valid_submission().with(Field::City, " \t ");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::City))
        );
    }

    #[test]
    fn first_blank_field_in_order_wins() {
        let sub = valid_submission()
            .with(Field::Experience, "")
            .with(Field::Phone, "")
            .with(Field::LastName, "   ");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::LastName))
        );
    }

    #[test]
    fn absent_field_is_treated_as_blank() {
        let sub: RegistrationSubmission = Field::ALL
            .into_iter()
            .filter(|&f| f != Field::Tournament)
            .map(|f| (f.name().to_string(), valid_submission().get(f).to_string()))
            .collect();
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::Tournament))
        );
    }

    #[test]
    fn blank_fields_are_checked_before_email_shape() {
        let sub = valid_submission()
            .with(Field::Email, "not-an-email")
            .with(Field::Experience, "");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::Experience))
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "a@b", "a.b@", "@b.bg", "a b@c.bg", "a@@b.bg"] {
            let sub = valid_submission()
                .with(Field::Email, email)
                .with(Field::Phone, "0888123456");
            assert_eq!(
                validate_submission(&sub),
                Err(ValidationError::InvalidEmailFormat),
                "email {:?}",
                email
            );
        }
    }

    #[test]
    fn email_is_checked_before_phone() {
        let sub = valid_submission()
            .with(Field::Email, "nope")
            .with(Field::Phone, "123");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::InvalidEmailFormat)
        );
    }

    #[test]
    fn rejects_phone_outside_national_format() {
        for phone in ["123456", "0888 12345", "+3598881234567", "+44888123456", "08881234a6"] {
            let sub = valid_submission()
                .with(Field::Email, "a@b.bg")
                .with(Field::Phone, phone);
            assert_eq!(
                validate_submission(&sub),
                Err(ValidationError::InvalidPhoneFormat),
                "phone {:?}",
                phone
            );
        }
        assert_eq!(
            ValidationError::InvalidPhoneFormat.to_string(),
            "Моля, въведете валиден телефонен номер"
        );
    }

    #[test]
    fn phone_with_embedded_spaces_is_accepted() {
        assert_eq!(normalize_phone("0888 123 456"), "0888123456");
        let sub = valid_submission().with(Field::Phone, "0888 123 456");
        assert_eq!(validate_submission(&sub), Ok(()));
        assert!(is_valid_phone("+359 88 812 3456"));
    }

    #[test]
    fn submission_deserializes_from_form_json() {
        let sub: RegistrationSubmission = serde_json::from_str(
            r#"{"firstName":"Ivan","lastName":"Petrov","email":"ivan@example.bg",
                "phone":"0888123456","city":"Sofia","tournament":"Open",
                "experience":"2 years","newsletter":"on"}"#,
        )
        .unwrap();
        assert_eq!(sub.get(Field::City), "Sofia");
        assert_eq!(validate_submission(&sub), Ok(()));
    }

    #[test]
    fn byte_order_mark_alone_counts_as_blank() {
        let sub = valid_submission().with(Field::FirstName, "\u{feff}");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::FirstName))
        );
        let sub = valid_submission().with(Field::LastName, " \u{feff}\u{a0}");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::MissingField(Field::LastName))
        );
    }

    #[test]
    fn byte_order_mark_is_stripped_from_phone() {
        assert_eq!(normalize_phone("0888\u{feff}123456"), "0888123456");
        let sub = valid_submission().with(Field::Phone, "0888\u{feff}123456");
        assert_eq!(validate_submission(&sub), Ok(()));
    }

    #[test]
    fn email_with_byte_order_mark_is_rejected() {
        let sub = valid_submission().with(Field::Email, "ivan\u{feff}@example.bg");
        assert_eq!(
            validate_submission(&sub),
            Err(ValidationError::InvalidEmailFormat)
        );
    }

    #[test]
    fn set_overrides_value_by_control_name() {
        let mut sub = valid_submission();
        sub.set("city", "Plovdiv");
        sub.set("newsletter", "on");
        assert_eq!(sub.get(Field::City), "Plovdiv");
        assert_eq!(validate_submission(&sub), Ok(()));
    }

    #[test]
    fn registration_message_is_none_for_valid_payload() {
        let payload = serde_json::json!({
            "firstName": "Ivan", "lastName": "Petrov", "email": "ivan@example.bg",
            "phone": "0888 123 456", "city": "Sofia", "tournament": "Open",
            "experience": "2 years"
        });
        assert_eq!(registration_message(payload), None);
    }

    #[test]
    fn registration_message_reports_first_problem() {
        let payload = serde_json::json!({
            "firstName": "Ivan", "lastName": "Petrov", "email": "ivan@example.bg",
            "phone": "123456", "city": "Sofia", "tournament": "Open",
            "experience": "2 years"
        });
        assert_eq!(
            registration_message(payload),
            Some(messages::INVALID_PHONE.to_string())
        );
        assert_eq!(
            registration_message(serde_json::json!({})),
            Some("Моля, попълнете полето: Име".to_string())
        );
    }

    #[test]
    fn registration_message_rejects_malformed_payload() {
        for payload in [
            serde_json::json!("Ivan"),
            serde_json::json!(["Ivan", "Petrov"]),
            serde_json::json!({ "firstName": "Ivan", "phone": 888123456 }),
        ] {
            assert_eq!(
                registration_message(payload),
                Some(messages::INVALID_PAYLOAD.to_string())
            );
        }
    }
}
