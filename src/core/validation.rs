//! Validation rules for the contact form
//!
//! Each field maps to an ordered list of rules. Rules are evaluated top-down
//! and the first one that fails supplies the field's error message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// 10-digit Indian mobile number with an optional `+91` / `91` prefix
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+91|91)?[6-9][0-9]{9}$").expect("phone pattern is a valid regex")
});

/// Structural email check; dots are checked separately since `regex` has no lookahead
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A contact form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ContactField {
    #[display("name")]
    Name,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("message")]
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name *",
            ContactField::Email => "Email Address *",
            ContactField::Phone => "Phone Number * (10 digits)",
            ContactField::Message => {
                "Tell us about your requirements, preferred services, or any specific requests *"
            }
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::Name | ContactField::Message => "text",
            ContactField::Email => "email",
            ContactField::Phone => "tel",
        }
    }

    /// Ordered rules for this field
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            ContactField::Name => NAME_RULES,
            ContactField::Email => EMAIL_RULES,
            ContactField::Phone => PHONE_RULES,
            ContactField::Message => MESSAGE_RULES,
        }
    }
}

/// A single `(predicate, message)` pair
#[derive(Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

const NAME_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Name is required",
    },
    Rule {
        check: name_long_enough,
        message: "Name must be at least 2 characters",
    },
    Rule {
        check: name_short_enough,
        message: "Name must be less than 100 characters",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Email is required",
    },
    Rule {
        check: is_email,
        message: "Please enter a valid email address",
    },
];

const PHONE_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Phone number is required",
    },
    Rule {
        check: is_indian_mobile,
        message: "Please enter a valid Indian phone number (10 digits starting with 6-9)",
    },
];

const MESSAGE_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Message is required",
    },
    Rule {
        check: message_long_enough,
        message: "Message must be at least 10 characters",
    },
    Rule {
        check: message_short_enough,
        message: "Message must be less than 1000 characters",
    },
];

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn name_long_enough(value: &str) -> bool {
    char_len(value) >= NAME_MIN_LENGTH
}

fn name_short_enough(value: &str) -> bool {
    char_len(value) <= NAME_MAX_LENGTH
}

fn message_long_enough(value: &str) -> bool {
    char_len(value) >= MESSAGE_MIN_LENGTH
}

fn message_short_enough(value: &str) -> bool {
    char_len(value) <= MESSAGE_MAX_LENGTH
}

/// Checks the general `local@domain.tld` shape
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Checks for a 10-digit Indian mobile number, optionally prefixed with `+91` or `91`
pub fn is_indian_mobile(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Runs the field's rules in order and returns the first failing message
pub fn validate_field(field: ContactField, value: &str) -> Result<(), &'static str> {
    match field.rules().iter().find(|rule| !(rule.check)(value)) {
        Some(rule) => Err(rule.message),
        None => Ok(()),
    }
}

/// Error messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<ContactField, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Records the outcome of validating one field, replacing any earlier message
    pub fn record(&mut self, field: ContactField, outcome: Result<(), &'static str>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(message) => {
                self.errors.insert(field, message);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    /// Comma-separated names of the failing fields, in form order
    pub fn field_list(&self) -> String {
        self.errors
            .keys()
            .map(ContactField::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
