use once_cell::sync::Lazy;
use regex::Regex;

use crate::briefs::{Question, QuestionKind};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => REQUIRED_MESSAGE,
            FieldError::InvalidEmail => EMAIL_MESSAGE,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks one answer against its question. Only an empty string counts as
/// missing; optional email answers are still checked when present.
pub fn validate_answer(question: &Question, value: Option<&str>) -> Result<(), FieldError> {
    let value = value.unwrap_or_default();
    if value.is_empty() {
        return if question.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    if question.kind == QuestionKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefs::get_brief;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@studio.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn required_answers_must_be_present() {
        let brief = get_brief("branding").unwrap();
        let name = brief.question("name").unwrap();
        assert_eq!(validate_answer(name, None), Err(FieldError::Required));
        assert_eq!(validate_answer(name, Some("")), Err(FieldError::Required));
        assert_eq!(validate_answer(name, Some("Ada")), Ok(()));
    }

    #[test]
    fn email_questions_check_format() {
        let email = get_brief("ui-ux").unwrap().question("email").unwrap();
        assert_eq!(validate_answer(email, Some("not-an-email")), Err(FieldError::InvalidEmail));
        assert_eq!(validate_answer(email, Some("a@b.co")), Ok(()));
        assert_eq!(FieldError::InvalidEmail.message(), "Please enter a valid email address");
    }

    #[test]
    fn optional_answers_may_be_blank() {
        let competitors = get_brief("ui-ux").unwrap().question("competitors").unwrap();
        assert_eq!(validate_answer(competitors, None), Ok(()));
    }
}
