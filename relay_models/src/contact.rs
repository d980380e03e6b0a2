use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

/// Addresses must have a local part, an `@` and a domain containing a dot.
/// Whitespace is not allowed anywhere.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact form submission as it was received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: ContactEmail,
    pub content: ContactMessageContent,
}

impl ContactMessage {
    pub fn full_name(&self) -> String {
        format!("{} {}", *self.first_name, *self.last_name)
    }
}

#[nutype(
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef)
)]
pub struct ContactFirstName(String);

#[nutype(
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef)
)]
pub struct ContactLastName(String);

#[nutype(
    validate(len_char_max = 254, regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef)
)]
pub struct ContactEmail(String);

#[nutype(
    validate(not_empty, len_char_max = 16384),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactSubmissionError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("{0} is too long")]
    TooLong(&'static str),
}

impl TryFrom<ContactSubmission> for ContactMessage {
    type Error = ContactSubmissionError;

    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let ContactSubmission {
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email),
            message: Some(message),
        } = submission.without_empty_fields()
        else {
            return Err(ContactSubmissionError::MissingFields);
        };

        let email =
            ContactEmail::try_new(email).map_err(|_| ContactSubmissionError::InvalidEmail)?;

        Ok(Self {
            first_name: ContactFirstName::try_new(first_name)
                .map_err(|_| ContactSubmissionError::TooLong("firstName"))?,
            last_name: ContactLastName::try_new(last_name)
                .map_err(|_| ContactSubmissionError::TooLong("lastName"))?,
            email,
            content: ContactMessageContent::try_new(message)
                .map_err(|_| ContactSubmissionError::TooLong("message"))?,
        })
    }
}

impl ContactSubmission {
    fn without_empty_fields(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|x| !x.is_empty())
        }

        Self {
            first_name: present(self.first_name),
            last_name: present(self.last_name),
            email: present(self.email),
            message: present(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            message: Some("Hello".into()),
        }
    }

    #[test]
    fn valid() {
        let message = ContactMessage::try_from(submission()).unwrap();
        assert_eq!(message.full_name(), "Ada Lovelace");
        assert_eq!(*message.email, "ada@example.com");
        assert_eq!(*message.content, "Hello");
    }

    #[test]
    fn missing_fields() {
        let cases: [fn(&mut ContactSubmission); 8] = [
            |s| s.first_name = None,
            |s| s.last_name = None,
            |s| s.email = None,
            |s| s.message = None,
            |s| s.first_name = Some(String::new()),
            |s| s.last_name = Some(String::new()),
            |s| s.email = Some(String::new()),
            |s| s.message = Some(String::new()),
        ];

        for modify in cases {
            let mut submission = submission();
            modify(&mut submission);
            assert_eq!(
                ContactMessage::try_from(submission),
                Err(ContactSubmissionError::MissingFields)
            );
        }
    }

    #[test]
    fn missing_fields_take_precedence_over_invalid_email() {
        let submission = ContactSubmission {
            email: Some("not-an-email".into()),
            message: None,
            ..submission()
        };
        assert_eq!(
            ContactMessage::try_from(submission),
            Err(ContactSubmissionError::MissingFields)
        );
    }

    #[test]
    fn email_pattern() {
        for (email, ok) in [
            ("ada@example.com", true),
            ("a.b+c@sub.example.org", true),
            ("x@y.z", true),
            ("not-an-email", false),
            ("ada@example", false),
            ("@example.com", false),
            ("ada@.com", false),
            ("ada@@example.com", false),
            ("ada lovelace@example.com", false),
            ("ada@example.com ", false),
            ("ada@exa\tmple.com", false),
        ] {
            let submission = ContactSubmission {
                email: Some(email.into()),
                ..submission()
            };
            let result = ContactMessage::try_from(submission);
            if ok {
                assert!(result.is_ok(), "{email:?} should be accepted");
            } else {
                assert_eq!(
                    result,
                    Err(ContactSubmissionError::InvalidEmail),
                    "{email:?} should be rejected"
                );
            }
        }
    }

    #[test]
    fn too_long() {
        let submission = ContactSubmission {
            last_name: Some("x".repeat(257)),
            ..submission()
        };
        assert_eq!(
            ContactMessage::try_from(submission),
            Err(ContactSubmissionError::TooLong("lastName"))
        );

        let submission = ContactSubmission {
            message: Some("x".repeat(16385)),
            ..self::submission()
        };
        assert_eq!(
            ContactMessage::try_from(submission),
            Err(ContactSubmissionError::TooLong("message"))
        );
    }
}
