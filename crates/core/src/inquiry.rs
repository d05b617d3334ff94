//! The inquiry entity and its request validator.
//!
//! [`Inquiry::from_json`] is the only way to build an [`Inquiry`]; it checks
//! the shape of every field against the JSON body first, then runs the value
//! rules declared on [`InquiryForm`], and reports every failure at once.

use std::num::IntErrorKind;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{FieldError, FieldErrorKind, Location, ValidationError};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_EVENT_TYPE: &str = "event_type";
pub const FIELD_DATE_PREFERENCE: &str = "date_preference";
pub const FIELD_GUESTS: &str = "guests";
pub const FIELD_PACKAGE: &str = "package";
pub const FIELD_MESSAGE: &str = "message";

/// Schema order; field errors are reported in this order.
const FIELD_ORDER: &[&str] = &[
    FIELD_NAME,
    FIELD_EMAIL,
    FIELD_PHONE,
    FIELD_EVENT_TYPE,
    FIELD_DATE_PREFERENCE,
    FIELD_GUESTS,
    FIELD_PACKAGE,
    FIELD_MESSAGE,
];

/// Name of the optional query parameter overriding the notification recipient.
pub const PARAM_TO: &str = "to";

// ---------------------------------------------------------------------------
// Inquiry
// ---------------------------------------------------------------------------

/// A validated booking/contact inquiry.
///
/// Fields are private so a value can only come out of the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    name: String,
    email: String,
    phone: String,
    event_type: String,
    date_preference: Option<String>,
    guests: Option<i32>,
    package: String,
    message: Option<String>,
}

impl Inquiry {
    /// Validate an untyped request body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let Some(object) = body.as_object() else {
            return Err(ValidationError::new(vec![FieldError::new(
                Location::Body,
                "body",
                FieldErrorKind::NotAnObject,
                "request body must be a JSON object",
            )]));
        };

        let mut errors = Vec::new();
        let form = InquiryForm::from_object(object, &mut errors);

        if let Err(rule_errors) = form.validate() {
            for (field, failures) in rule_errors.field_errors() {
                let field = field.to_string();
                // A field with the wrong JSON type was already reported.
                if errors.iter().any(|e: &FieldError| e.field == field) {
                    continue;
                }
                if let Some(failure) = failures.first() {
                    let kind = rule_kind(&failure.code);
                    errors.push(FieldError::new(
                        Location::Body,
                        field,
                        kind,
                        rule_message(kind),
                    ));
                }
            }
        }

        if let Some(email) = form.email.as_deref() {
            if !errors.iter().any(|e| e.field == FIELD_EMAIL) && !has_dotted_domain(email) {
                errors.push(FieldError::new(
                    Location::Body,
                    FIELD_EMAIL,
                    FieldErrorKind::InvalidEmail,
                    rule_message(FieldErrorKind::InvalidEmail),
                ));
            }
        }

        errors.sort_by_key(|e| field_position(&e.field));

        match form.into_inquiry() {
            Some(inquiry) if errors.is_empty() => Ok(inquiry),
            _ => Err(ValidationError::new(errors)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn date_preference(&self) -> Option<&str> {
        self.date_preference.as_deref()
    }

    pub fn guests(&self) -> Option<i32> {
        self.guests
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Validate a full submission: the JSON body plus the optional `to` query
/// parameter. Errors from both locations are reported together.
pub fn validate_submission<'a>(
    body: &Value,
    to: Option<&'a str>,
) -> Result<(Inquiry, Option<&'a str>), ValidationError> {
    let inquiry = Inquiry::from_json(body);
    let recipient = to.map(validate_recipient).transpose();

    match (inquiry, recipient) {
        (Ok(inquiry), Ok(_)) => Ok((inquiry, to)),
        (inquiry, recipient) => {
            let mut errors = Vec::new();
            if let Err(e) = inquiry {
                errors.extend(e.errors);
            }
            if let Err(e) = recipient {
                errors.extend(e.errors);
            }
            Err(ValidationError::new(errors))
        }
    }
}

/// Validate an explicit notification recipient (the `to` query parameter).
pub fn validate_recipient(to: &str) -> Result<(), ValidationError> {
    let param = RecipientParam { to: to.to_string() };
    if param.validate().is_ok() && has_dotted_domain(to) {
        return Ok(());
    }
    Err(ValidationError::new(vec![FieldError::new(
        Location::Query,
        PARAM_TO,
        FieldErrorKind::InvalidEmail,
        rule_message(FieldErrorKind::InvalidEmail),
    )]))
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Intermediate, shape-checked form the value rules are declared on.
#[derive(Debug, Default, Validate)]
struct InquiryForm {
    #[validate(required, length(min = 1))]
    name: Option<String>,
    #[validate(required, email)]
    email: Option<String>,
    #[validate(required)]
    phone: Option<String>,
    #[validate(required)]
    event_type: Option<String>,
    date_preference: Option<String>,
    #[validate(range(min = 0, max = 2147483647))]
    guests: Option<i64>,
    #[validate(required)]
    package: Option<String>,
    message: Option<String>,
}

impl InquiryForm {
    /// Pull each field out of the JSON object, recording type mismatches.
    ///
    /// `null` counts as absent. Unknown keys are ignored.
    fn from_object(object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Self {
        Self {
            name: text_field(object, FIELD_NAME, errors),
            email: text_field(object, FIELD_EMAIL, errors),
            phone: text_field(object, FIELD_PHONE, errors),
            event_type: text_field(object, FIELD_EVENT_TYPE, errors),
            date_preference: text_field(object, FIELD_DATE_PREFERENCE, errors),
            guests: integer_field(object, FIELD_GUESTS, errors),
            package: text_field(object, FIELD_PACKAGE, errors),
            message: text_field(object, FIELD_MESSAGE, errors),
        }
    }

    fn into_inquiry(self) -> Option<Inquiry> {
        Some(Inquiry {
            name: self.name?,
            email: self.email?,
            phone: self.phone?,
            event_type: self.event_type?,
            date_preference: self.date_preference,
            guests: self.guests.and_then(|g| i32::try_from(g).ok()),
            package: self.package?,
            message: self.message,
        })
    }
}

#[derive(Debug, Validate)]
struct RecipientParam {
    #[validate(email)]
    to: String,
}

fn text_field(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                Location::Body,
                field,
                FieldErrorKind::WrongType,
                "value must be a string",
            ));
            None
        }
    }
}

fn integer_field(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    let value = match object.get(field) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    match coerce_integer(value) {
        Ok(n) => Some(n),
        Err(kind) => {
            let message = match kind {
                FieldErrorKind::WrongType => "value must be an integer",
                other => rule_message(other),
            };
            errors.push(FieldError::new(Location::Body, field, kind, message));
            None
        }
    }
}

/// Read an integer leniently, the way HTML forms tend to send one: whole
/// floats (`10.0`, `1e2`, `-0`) and integer strings (`"20"`) are accepted.
fn coerce_integer(value: &Value) -> Result<i64, FieldErrorKind> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(FieldErrorKind::OutOfRange);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 => {
                    if (i64::MIN as f64..i64::MAX as f64).contains(&f) {
                        Ok(f as i64)
                    } else {
                        Err(FieldErrorKind::OutOfRange)
                    }
                }
                _ => Err(FieldErrorKind::WrongType),
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(i),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(FieldErrorKind::OutOfRange)
            }
            Err(_) => Err(FieldErrorKind::WrongType),
        },
        _ => Err(FieldErrorKind::WrongType),
    }
}

/// The `validator` email rule accepts bare hosts (`anna@localhost`); a
/// customer address also needs a dotted domain.
fn has_dotted_domain(address: &str) -> bool {
    address.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    })
}

fn rule_kind(code: &str) -> FieldErrorKind {
    match code {
        "required" => FieldErrorKind::Missing,
        "length" => FieldErrorKind::Empty,
        "email" => FieldErrorKind::InvalidEmail,
        "range" => FieldErrorKind::OutOfRange,
        _ => FieldErrorKind::WrongType,
    }
}

fn rule_message(kind: FieldErrorKind) -> &'static str {
    match kind {
        FieldErrorKind::Missing => "field required",
        FieldErrorKind::Empty => "value must not be empty",
        FieldErrorKind::InvalidEmail => "value is not a valid email address",
        FieldErrorKind::OutOfRange => "value must be a non-negative 32-bit integer",
        FieldErrorKind::WrongType => "value has the wrong type",
        FieldErrorKind::NotAnObject => "request body must be a JSON object",
    }
}

fn field_position(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
