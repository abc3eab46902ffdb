//! Form state with per-field validation.
//!
//! Validation is plain functions over plain state so the rules can be
//! tested directly; the `FormField` component only wires the state to
//! an input.

use dioxus::prelude::*;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    Required,
    TooShort,
    TooLong,
    InvalidFormat,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::Required => "required",
            ValidationCode::TooShort => "too_short",
            ValidationCode::TooLong => "too_long",
            ValidationCode::InvalidFormat => "invalid_format",
        }
    }
}

/// One validation failure for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: ValidationCode,
}

/// A validation rule: `None` means the value passes.
pub type Validator = fn(&str) -> Option<FieldError>;

/// Declares one form field: its identifier, label, and rule.
#[derive(Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub multiline: bool,
    pub validator: Validator,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, validator: Validator) -> Self {
        Self {
            name,
            label,
            multiline: false,
            validator,
        }
    }

    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
}

fn error(field: &str, message: &str, code: ValidationCode) -> Option<FieldError> {
    Some(FieldError {
        field: field.to_string(),
        message: message.to_string(),
        code,
    })
}

pub fn validate_name(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return error("name", "Please enter your name.", ValidationCode::Required);
    }
    if trimmed.chars().count() < 2 {
        return error(
            "name",
            "Name must be at least 2 characters.",
            ValidationCode::TooShort,
        );
    }
    if trimmed.chars().count() > 50 {
        return error(
            "name",
            "Name must be less than 50 characters.",
            ValidationCode::TooLong,
        );
    }
    None
}

pub fn validate_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return error(
            "email",
            "Please enter your email address.",
            ValidationCode::Required,
        );
    }
    if !looks_like_email(value) {
        return error(
            "email",
            "Please enter a valid email address.",
            ValidationCode::InvalidFormat,
        );
    }
    if value.chars().count() > 100 {
        return error(
            "email",
            "Email must be less than 100 characters.",
            ValidationCode::TooLong,
        );
    }
    None
}

pub fn validate_subject(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return error(
            "subject",
            "Please enter a subject.",
            ValidationCode::Required,
        );
    }
    if trimmed.chars().count() < 3 {
        return error(
            "subject",
            "Subject must be at least 3 characters.",
            ValidationCode::TooShort,
        );
    }
    if trimmed.chars().count() > 100 {
        return error(
            "subject",
            "Subject must be less than 100 characters.",
            ValidationCode::TooLong,
        );
    }
    None
}

pub fn validate_message(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return error(
            "message",
            "Please enter your message.",
            ValidationCode::Required,
        );
    }
    if trimmed.chars().count() < 10 {
        return error(
            "message",
            "Message must be at least 10 characters.",
            ValidationCode::TooShort,
        );
    }
    if trimmed.chars().count() > 1000 {
        return error(
            "message",
            "Message must be less than 1000 characters.",
            ValidationCode::TooLong,
        );
    }
    None
}

/// Local-part, `@`, domain with a dot; no whitespace anywhere.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// The fields of the contact form, in display order.
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Name", validate_name),
        FieldSpec::new("email", "Email", validate_email),
        FieldSpec::new("subject", "Subject", validate_subject),
        FieldSpec::new("message", "Message", validate_message).multiline(),
    ]
}

/// State of one form instance: values, errors, touched flags.
#[derive(Clone, PartialEq)]
pub struct FormState {
    fields: Vec<FieldSpec>,
    values: Vec<String>,
    errors: Vec<Option<FieldError>>,
    touched: Vec<bool>,
    submitting: bool,
}

impl FormState {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let count = fields.len();
        Self {
            fields,
            values: vec![String::new(); count],
            errors: vec![None; count],
            touched: vec![false; count],
            submitting: false,
        }
    }

    pub fn contact() -> Self {
        Self::new(contact_fields())
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.index_of(name)
            .map(|i| self.values[i].as_str())
            .unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.index_of(name).and_then(|i| self.errors[i].as_ref())
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.index_of(name).map(|i| self.touched[i]).unwrap_or(false)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// A field edit replaces the value and clears any standing error, so
    /// the user is not nagged while still typing.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(i) = self.index_of(name) {
            self.values[i] = value.into();
            self.errors[i] = None;
        }
    }

    /// Leaving a field marks it touched and validates it.
    pub fn blur(&mut self, name: &str) {
        if let Some(i) = self.index_of(name) {
            self.touched[i] = true;
            self.errors[i] = (self.fields[i].validator)(&self.values[i]);
        }
    }

    /// Validates every field, recording errors. Returns true when the
    /// whole form passes.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for i in 0..self.fields.len() {
            self.touched[i] = true;
            self.errors[i] = (self.fields[i].validator)(&self.values[i]);
            if self.errors[i].is_some() {
                valid = false;
            }
        }
        valid
    }

    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    pub fn is_dirty(&self) -> bool {
        self.values.iter().any(|value| !value.is_empty())
    }

    pub fn reset(&mut self) {
        let count = self.fields.len();
        self.values = vec![String::new(); count];
        self.errors = vec![None; count];
        self.touched = vec![false; count];
        self.submitting = false;
    }

    /// Current errors, in field order.
    pub fn current_errors(&self) -> Vec<&FieldError> {
        self.errors.iter().flatten().collect()
    }
}

/// One labelled input bound to a [`FormState`] signal.
#[component]
pub fn FormField(state: Signal<FormState>, name: &'static str) -> Element {
    let read = state.read();
    let Some(spec) = read.fields().iter().find(|f| f.name == name).cloned() else {
        tracing::warn!(field = name, "form field not declared in form state");
        return rsx! {};
    };
    let value = read.value(name).to_string();
    let field_error = read.error(name).cloned();
    drop(read);

    let input_class = if field_error.is_some() {
        "form-input form-input-invalid"
    } else {
        "form-input"
    };
    let input_type = if spec.name == "email" { "email" } else { "text" };

    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{spec.name}",
                "{spec.label}"
                span { class: "form-required", aria_label: "required", "*" }
            }
            if spec.multiline {
                textarea {
                    id: "{spec.name}",
                    name: "{spec.name}",
                    class: "{input_class}",
                    rows: "5",
                    value: "{value}",
                    oninput: move |event| state.write().set_value(name, event.value()),
                    onblur: move |_| state.write().blur(name),
                }
            } else {
                input {
                    id: "{spec.name}",
                    name: "{spec.name}",
                    class: "{input_class}",
                    r#type: "{input_type}",
                    value: "{value}",
                    oninput: move |event| state.write().set_value(name, event.value()),
                    onblur: move |_| state.write().blur(name),
                }
            }
            if let Some(err) = field_error {
                p { class: "form-error", role: "alert", "{err.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules_cover_required_short_and_long() {
        assert_eq!(
            validate_name("").unwrap().message,
            "Please enter your name."
        );
        assert_eq!(validate_name("   ").unwrap().code, ValidationCode::Required);
        assert_eq!(validate_name("J").unwrap().code, ValidationCode::TooShort);
        assert_eq!(
            validate_name(&"x".repeat(51)).unwrap().code,
            ValidationCode::TooLong
        );
        assert!(validate_name("Jane Smith").is_none());
        // Trimmed length is what counts.
        assert!(validate_name("  Jo  ").is_none());
    }

    #[test]
    fn email_rules_reject_malformed_addresses() {
        assert_eq!(
            validate_email("").unwrap().message,
            "Please enter your email address."
        );
        for bad in ["plain", "a@b", "a b@c.d", "@example.com", "a@.com", "a@com."] {
            assert_eq!(
                validate_email(bad).unwrap().message,
                "Please enter a valid email address.",
                "expected {bad:?} to be rejected"
            );
        }
        assert!(validate_email("jane@example.com").is_none());
        assert!(validate_email("a.b+c@sub.example.co").is_none());
    }

    #[test]
    fn subject_and_message_have_their_own_length_floors() {
        assert_eq!(
            validate_subject("Hi").unwrap().message,
            "Subject must be at least 3 characters."
        );
        assert!(validate_subject("Job offer").is_none());
        assert_eq!(
            validate_message("Too short").unwrap().message,
            "Message must be at least 10 characters."
        );
        assert!(validate_message("This message is long enough.").is_none());
        assert_eq!(
            validate_message(&"m".repeat(1001)).unwrap().code,
            ValidationCode::TooLong
        );
    }

    #[test]
    fn editing_clears_the_standing_error() {
        let mut form = FormState::contact();
        form.blur("name");
        assert!(form.error("name").is_some());

        form.set_value("name", "J");
        assert!(form.error("name").is_none(), "typing must clear the error");

        // The next blur re-validates.
        form.blur("name");
        assert_eq!(form.error("name").unwrap().code, ValidationCode::TooShort);
    }

    #[test]
    fn validate_all_reports_every_invalid_field() {
        let mut form = FormState::contact();
        form.set_value("name", "Jane Smith");
        form.set_value("email", "not-an-email");

        assert!(!form.validate_all());
        let errors = form.current_errors();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "subject", "message"]);
        assert!(form.is_touched("message"));
    }

    #[test]
    fn a_fully_valid_form_passes_and_resets_clean() {
        let mut form = FormState::contact();
        form.set_value("name", "Jane Smith");
        form.set_value("email", "jane@example.com");
        form.set_value("subject", "Hello there");
        form.set_value("message", "I would like to talk about a project.");
        assert!(form.validate_all());
        assert!(form.is_valid());
        assert!(form.is_dirty());

        form.reset();
        assert!(!form.is_dirty());
        assert!(!form.is_touched("name"));
        assert_eq!(form.value("name"), "");
    }
}
