use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::counter::message_len;
use crate::config::MESSAGE_MIN_CHARS;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("phone pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldKind {
    /// Value for the `type` attribute of an `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            _ => "text",
        }
    }
}

/// What the validator needs to know about a field: its name, its input type
/// and whether it carries the required marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("هذا الحقل مطلوب")]
    Required,
    #[error("يرجى إدخال بريد إلكتروني صحيح")]
    InvalidEmail,
    #[error("يرجى إدخال رقم هاتف صحيح")]
    InvalidPhone,
    #[error("الرسالة يجب أن تكون على الأقل {min} أحرف")]
    MessageTooShort { min: usize },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Checks one field value against the rules in priority order. The first
/// failing rule wins.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }
    if spec.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if spec.name == "phone" && !is_valid_phone(value) {
        return Err(FieldError::InvalidPhone);
    }
    if spec.name == "message" && message_len(value) < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort { min: MESSAGE_MIN_CHARS });
    }
    Ok(())
}
