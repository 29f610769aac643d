//! Field Validation Core
//!
//! Pure validation rules, kept free of DOM types so they are testable
//! without a browser. The form layer in `forms` snapshots each control
//! into `(kind, required, value)` and feeds it through `check_field`.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern"));

pub const REQUIRED_MSG: &str = "This field is required";
pub const EMAIL_MSG: &str = "Please enter a valid email address";
pub const PHONE_MSG: &str = "Please enter a valid phone number";

/// Field classifier derived from the control's tag and `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

impl FieldKind {
    /// Map an `<input type="...">` value; unknown types validate as text
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Text,
        }
    }
}

/// Outcome of checking one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(&'static str),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(message),
        }
    }
}

/// Check one field. Rules apply in order, first failure wins:
/// required-empty, then the type-specific pattern on non-empty values.
/// An empty optional field is always valid regardless of its kind.
pub fn check_field(kind: FieldKind, required: bool, value: &str) -> Verdict {
    let value = value.trim();

    if required && value.is_empty() {
        return Verdict::Invalid(REQUIRED_MSG);
    }
    if value.is_empty() {
        return Verdict::Valid;
    }

    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Verdict::Invalid(EMAIL_MSG),
        FieldKind::Tel if !PHONE_RE.is_match(value) => Verdict::Invalid(PHONE_MSG),
        _ => Verdict::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty_fails() {
        let verdict = check_field(FieldKind::Text, true, "");
        assert_eq!(verdict, Verdict::Invalid(REQUIRED_MSG));
        // Whitespace-only counts as empty
        assert_eq!(check_field(FieldKind::Email, true, "   "), Verdict::Invalid(REQUIRED_MSG));
    }

    #[test]
    fn test_optional_empty_passes_for_every_kind() {
        for kind in [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Select,
            FieldKind::TextArea,
        ] {
            assert!(check_field(kind, false, "").is_valid());
            assert!(check_field(kind, false, "  ").is_valid());
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(check_field(FieldKind::Email, true, "a@b.co").is_valid());
        assert!(check_field(FieldKind::Email, false, "jane.doe@example.org").is_valid());

        assert_eq!(check_field(FieldKind::Email, true, "a@b"), Verdict::Invalid(EMAIL_MSG));
        assert_eq!(check_field(FieldKind::Email, true, "noatsign.com"), Verdict::Invalid(EMAIL_MSG));
        assert_eq!(check_field(FieldKind::Email, false, "two@@signs.com"), Verdict::Invalid(EMAIL_MSG));
        assert_eq!(check_field(FieldKind::Email, false, "spa ce@mail.com"), Verdict::Invalid(EMAIL_MSG));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(check_field(FieldKind::Tel, true, "123-456-7890").is_valid());
        assert!(check_field(FieldKind::Tel, false, "+27 11 555 0199").is_valid());
        assert!(check_field(FieldKind::Tel, false, "(011) 555-0199").is_valid());

        assert_eq!(check_field(FieldKind::Tel, true, "12345"), Verdict::Invalid(PHONE_MSG));
        assert_eq!(check_field(FieldKind::Tel, false, "phone me maybe"), Verdict::Invalid(PHONE_MSG));
    }

    #[test]
    fn test_value_is_trimmed_before_matching() {
        assert!(check_field(FieldKind::Email, true, "  a@b.co  ").is_valid());
        assert!(check_field(FieldKind::Tel, true, " 123-456-7890 ").is_valid());
    }

    #[test]
    fn test_pattern_kinds_ignore_other_kinds() {
        // A free-text field never triggers the email or phone rules
        assert!(check_field(FieldKind::Text, true, "not an email").is_valid());
        assert!(check_field(FieldKind::TextArea, true, "12345").is_valid());
    }

    #[test]
    fn test_kind_from_input_type() {
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Tel);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("checkbox"), FieldKind::Text);
    }

    #[test]
    fn test_verdict_message() {
        assert_eq!(Verdict::Valid.message(), None);
        assert_eq!(Verdict::Invalid(PHONE_MSG).message(), Some(PHONE_MSG));
    }
}
