//! Contact form validation.
//!
//! Fields are checked on blur and cleared on input. Submitting re-checks
//! every field; nothing is ever sent anywhere, a valid submit only shows
//! the success banner and resets the form.

use crate::banner::{Banner, BannerKind, BannerSlot};

pub const ERROR_MESSAGE: &str = "Please check your input and try again.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
}

impl FieldKind {
    /// `type` attribute for single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Text | FieldKind::Multiline => "text",
        }
    }
}

/// Validation state shown on a field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not checked since the last edit
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn class(&self) -> &'static str {
        match self {
            FieldStatus::Unchecked => "",
            FieldStatus::Valid => "field-valid",
            FieldStatus::Invalid => "field-invalid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    pub status: FieldStatus,
}

/// Outcome of a submit attempt; both carry the id of the banner shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected { banner: u64 },
    Sent { banner: u64 },
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the
/// domain with at least one character on each side
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Field rule applied to the trimmed value
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return !required;
    }
    match kind {
        FieldKind::Email => is_valid_email(value),
        FieldKind::Text | FieldKind::Multiline => true,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FormField>,
    banner: BannerSlot,
}

impl ContactForm {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let fields = specs
            .into_iter()
            .map(|spec| FormField {
                spec,
                value: String::new(),
                status: FieldStatus::Unchecked,
            })
            .collect();
        Self {
            fields,
            banner: BannerSlot::new(),
        }
    }

    /// The portfolio's contact form: name, email, subject, message
    pub fn contact() -> Self {
        Self::new(vec![
            FieldSpec {
                name: "name",
                label: "Name",
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "email",
                label: "Email",
                kind: FieldKind::Email,
                required: true,
            },
            FieldSpec {
                name: "subject",
                label: "Subject",
                kind: FieldKind::Text,
                required: false,
            },
            FieldSpec {
                name: "message",
                label: "Message",
                kind: FieldKind::Multiline,
                required: true,
            },
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.spec.name == name)
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn status(&self, name: &str) -> Option<FieldStatus> {
        self.field(name).map(|f| f.status)
    }

    /// The visitor typed into `name`: store the value, clear its status
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            field.status = FieldStatus::Unchecked;
        }
    }

    /// `name` lost focus: check it. Returns the verdict, or `None` for an
    /// unknown field.
    pub fn blur(&mut self, name: &str) -> Option<bool> {
        let field = self.field_mut(name)?;
        Some(check(field))
    }

    /// Re-check every field and "send" when all pass
    pub fn submit(&mut self) -> SubmitOutcome {
        // Every field is checked so each one gets its status, not just the
        // first failure.
        let all_valid = self
            .fields
            .iter_mut()
            .map(check)
            .fold(true, |acc, ok| acc && ok);

        if !all_valid {
            tracing::debug!("contact form rejected");
            let banner = self.banner.show(BannerKind::Error, ERROR_MESSAGE);
            return SubmitOutcome::Rejected { banner };
        }

        tracing::info!("contact form accepted (not transmitted)");
        let banner = self.banner.show(BannerKind::Success, SUCCESS_MESSAGE);
        for field in &mut self.fields {
            field.value.clear();
            field.status = FieldStatus::Unchecked;
        }
        SubmitOutcome::Sent { banner }
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.current()
    }

    /// Auto-removal timer for banner `id` fired
    pub fn expire_banner(&mut self, id: u64) -> bool {
        self.banner.expire(id)
    }
}

fn check(field: &mut FormField) -> bool {
    let valid = validate_value(field.spec.kind, field.spec.required, &field.value);
    field.status = if valid {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid
    };
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@uni.example.edu"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_email_rule_accepts_any_interior_dot() {
        // The dot only needs one character on each side somewhere in the domain
        assert!(is_valid_email("a@.b.c"));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_validate_value() {
        assert!(!validate_value(FieldKind::Text, true, ""));
        assert!(!validate_value(FieldKind::Text, true, "   "));
        assert!(validate_value(FieldKind::Text, false, ""));
        assert!(validate_value(FieldKind::Email, false, ""));
        assert!(validate_value(FieldKind::Email, true, "  a@b.com  "));
        assert!(!validate_value(FieldKind::Email, true, "not-an-email"));
        assert!(validate_value(FieldKind::Multiline, true, "hello"));
    }

    #[test]
    fn test_blur_and_input() {
        let mut form = ContactForm::contact();
        assert_eq!(form.blur("email"), Some(false));
        assert_eq!(form.status("email"), Some(FieldStatus::Invalid));

        form.input("email", "a@b.com");
        assert_eq!(form.status("email"), Some(FieldStatus::Unchecked));
        assert_eq!(form.blur("email"), Some(true));
        assert_eq!(form.status("email"), Some(FieldStatus::Valid));

        assert_eq!(form.blur("phone"), None);
    }

    #[test]
    fn test_status_class() {
        assert_eq!(FieldStatus::Unchecked.class(), "");
        assert_eq!(FieldStatus::Invalid.class(), "field-invalid");
        assert_eq!(FieldKind::Email.input_type(), "email");
    }
}
