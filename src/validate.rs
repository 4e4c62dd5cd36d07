//! Contact Form Validation
//!
//! Pure validation rules for the contact form. Every rule runs on each
//! submit attempt (no short-circuiting) so the user sees all problems at
//! once; the form component clears one slot at a time as its field is
//! edited.

use serde::Serialize;

/// Minimum message length after trimming
pub const MIN_MESSAGE_LEN: usize = 10;

pub const ERR_NAME_REQUIRED: &str = "Full name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_FORMAT: &str = "Enter a valid email address";
pub const ERR_SUBJECT_REQUIRED: &str = "Please choose a subject";
pub const ERR_MESSAGE_REQUIRED: &str = "A message is required";
pub const ERR_MESSAGE_SHORT: &str = "Message must be at least 10 characters";

/// Contact form fields as entered; this is also the payload a real
/// backend would receive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One contact form field
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Per-field validation outcome; `None` means the field passes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }

    /// Drop one field's error, leaving the other slots untouched
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }
}

/// Check every field and report every failure
pub fn validate(req: &ContactRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if req.name.trim().is_empty() {
        errors.name = Some(ERR_NAME_REQUIRED);
    }

    if req.email.trim().is_empty() {
        errors.email = Some(ERR_EMAIL_REQUIRED);
    } else if !is_valid_email(&req.email) {
        errors.email = Some(ERR_EMAIL_FORMAT);
    }

    if req.subject.is_empty() {
        errors.subject = Some(ERR_SUBJECT_REQUIRED);
    }

    let message = req.message.trim();
    if message.is_empty() {
        errors.message = Some(ERR_MESSAGE_REQUIRED);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some(ERR_MESSAGE_SHORT);
    }

    errors
}

/// `local@domain.tld` shape check: exactly one `@`, no whitespace, and a
/// dot in the domain with a non-empty label on either side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if parts.next().is_some() || local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> ContactRequest {
        ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "general".to_string(),
            message: "This is a long enough message".to_string(),
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let errors = validate(&filled_request());
        assert!(errors.is_valid());
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_every_field_reported_at_once() {
        let errors = validate(&ContactRequest {
            name: String::new(),
            email: "bad".to_string(),
            subject: String::new(),
            message: "short".to_string(),
        });
        assert_eq!(errors.name, Some(ERR_NAME_REQUIRED));
        assert_eq!(errors.email, Some(ERR_EMAIL_FORMAT));
        assert_eq!(errors.subject, Some(ERR_SUBJECT_REQUIRED));
        assert_eq!(errors.message, Some(ERR_MESSAGE_SHORT));
        assert!(!errors.is_valid());

        // Four distinct messages
        let messages = [errors.name, errors.email, errors.subject, errors.message];
        for (i, message) in messages.iter().enumerate() {
            assert!(messages.iter().skip(i + 1).all(|other| other != message));
        }
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut req = filled_request();
        req.name = "   ".to_string();
        assert_eq!(validate(&req).name, Some(ERR_NAME_REQUIRED));
    }

    #[test]
    fn test_email_required_vs_format() {
        let mut req = filled_request();
        req.email = String::new();
        assert_eq!(validate(&req).email, Some(ERR_EMAIL_REQUIRED));
        req.email = "not-an-email".to_string();
        assert_eq!(validate(&req).email, Some(ERR_EMAIL_FORMAT));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_clearing_one_field_leaves_the_others() {
        let mut errors = validate(&ContactRequest::default());
        assert_eq!(errors.name, Some(ERR_NAME_REQUIRED));

        errors.clear(Field::Name);
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(ERR_EMAIL_REQUIRED));
        assert_eq!(errors.subject, Some(ERR_SUBJECT_REQUIRED));
        assert_eq!(errors.message, Some(ERR_MESSAGE_REQUIRED));

        errors.clear(Field::Email);
        errors.clear(Field::Subject);
        errors.clear(Field::Message);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_message_length_counts_after_trim() {
        let mut req = filled_request();
        req.message = "  short    ".to_string();
        assert_eq!(validate(&req).message, Some(ERR_MESSAGE_SHORT));

        req.message = "0123456789".to_string(); // exactly the minimum
        assert_eq!(validate(&req).message, None);

        req.message = "         ".to_string();
        assert_eq!(validate(&req).message, Some(ERR_MESSAGE_REQUIRED));
    }

    #[test]
    fn test_request_serializes_with_stable_field_names() {
        // The simulated submit logs this payload; a future backend will
        // receive it. Field names are part of that contract.
        let json = serde_json::to_string(&filled_request()).expect("serialize");
        for field in ["\"name\"", "\"email\"", "\"subject\"", "\"message\""] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }
}
