use crate::forms::submit::FormSubmission;
use crate::forms::validation::{is_valid_email, FieldError};

pub const CONTACT_FORM_NAME: &str = "contact";
pub const CONTACT_FAILED_MESSAGE: &str = "Submission failed. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl ContactField {
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::ProjectType => "project_type",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::ProjectType => self.project_type = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Same rules the form's `required` / `type="email"` attributes enforce.
    /// Project type may be left unselected.
    pub fn validate(&self) -> Result<(), (ContactField, FieldError)> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.is_empty() {
                return Err((field, FieldError::Required));
            }
        }
        if !is_valid_email(&self.email) {
            return Err((ContactField::Email, FieldError::InvalidEmail));
        }
        Ok(())
    }

    pub fn submission(&self) -> FormSubmission {
        FormSubmission::new(CONTACT_FORM_NAME)
            .field(ContactField::Name.key(), self.name.as_str())
            .field(ContactField::Email.key(), self.email.as_str())
            .field(ContactField::ProjectType.key(), self.project_type.as_str())
            .field(ContactField::Message.key(), self.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        let mut fields = ContactFields::default();
        fields.set(ContactField::Name, "Sara".into());
        fields.set(ContactField::Email, "sara@cafe.ir".into());
        fields.set(ContactField::ProjectType, "Branding".into());
        fields.set(ContactField::Message, "New logo & menu".into());
        fields
    }

    #[test]
    fn body_has_contact_discriminator_and_all_fields() {
        assert_eq!(
            filled().submission().encode(),
            "form-name=contact&name=Sara&email=sara%40cafe.ir&project_type=Branding&message=New%20logo%20%26%20menu"
        );
    }

    #[test]
    fn blank_required_field_is_reported_first() {
        let mut fields = filled();
        fields.set(ContactField::Message, String::new());
        assert_eq!(fields.validate(), Err((ContactField::Message, FieldError::Required)));

        fields.set(ContactField::Name, String::new());
        assert_eq!(fields.validate(), Err((ContactField::Name, FieldError::Required)));
    }

    #[test]
    fn whitespace_counts_as_filled_like_the_browser() {
        let mut fields = filled();
        fields.set(ContactField::Message, "   ".into());
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn email_must_be_well_formed() {
        let mut fields = filled();
        fields.set(ContactField::Email, "not-an-email".into());
        assert_eq!(fields.validate(), Err((ContactField::Email, FieldError::InvalidEmail)));
    }

    #[test]
    fn project_type_is_optional() {
        let mut fields = filled();
        fields.set(ContactField::ProjectType, String::new());
        assert_eq!(fields.validate(), Ok(()));
        assert_eq!(fields.submission().get("project_type"), Some(""));
    }
}
