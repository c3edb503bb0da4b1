//! Declarative request validation.
//!
//! A [`Schema`] is a named list of field rules; each rule is a required or
//! optional field plus an ordered list of [`Constraint`]s with parameters.
//! Checking is pure: the same value always yields the same outcome, and an
//! accepted value stays accepted on re-validation.

/// Named schemas, one per request kind
pub mod schemas;

use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// A single violated constraint, with the full path of the offending field.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Violation {
    pub field: String,
    pub constraint: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

#[derive(Clone, Debug, Error, Serialize, PartialEq)]
#[error("Validation failed for {schema}: {} violation(s)", violations.len())]
pub struct ValidationError {
    pub schema: &'static str,
    pub violations: Vec<Violation>,
}

/// Expected JSON value type for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl ValueKind {
    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// One named constraint with its parameters.
///
/// Constraints that do not apply to the value's actual type are skipped;
/// the type mismatch itself is reported by the [`Constraint::Kind`] check.
#[derive(Clone, Debug)]
pub enum Constraint {
    Kind(ValueKind),
    MinLen(usize),
    MaxLen(usize),
    OneOf(&'static [&'static str]),
    Email,
    Uuid,
    /// `YYYY-MM-DD`, both pattern and parseability
    Date,
    /// RFC 3339 timestamp, both pattern and parseability
    Timestamp,
    Min(f64),
    Max(f64),
    MinItems(usize),
    /// Every array item must satisfy the nested schema
    Each(Schema),
}

impl Constraint {
    fn kind(&self) -> &'static str {
        match self {
            Self::Kind(_) => "type",
            Self::MinLen(_) => "min_length",
            Self::MaxLen(_) => "max_length",
            Self::OneOf(_) => "one_of",
            Self::Email => "email",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::MinItems(_) => "min_items",
            Self::Each(_) => "shape",
        }
    }
}

/// A field rule: name, required/optional, constraints in declaration order.
#[derive(Clone, Debug)]
pub struct Field {
    name: &'static str,
    required: bool,
    constraints: Vec<Constraint>,
}

impl Field {
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            constraints: Vec::new(),
        }
    }

    pub fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            constraints: Vec::new(),
        }
    }

    pub fn string(self) -> Self {
        self.constraint(Constraint::Kind(ValueKind::String))
    }

    pub fn number(self) -> Self {
        self.constraint(Constraint::Kind(ValueKind::Number))
    }

    pub fn integer(self) -> Self {
        self.constraint(Constraint::Kind(ValueKind::Integer))
    }

    pub fn array(self) -> Self {
        self.constraint(Constraint::Kind(ValueKind::Array))
    }

    pub fn min_len(self, n: usize) -> Self {
        self.constraint(Constraint::MinLen(n))
    }

    pub fn max_len(self, n: usize) -> Self {
        self.constraint(Constraint::MaxLen(n))
    }

    pub fn one_of(self, allowed: &'static [&'static str]) -> Self {
        self.constraint(Constraint::OneOf(allowed))
    }

    pub fn email(self) -> Self {
        self.constraint(Constraint::Email)
    }

    pub fn uuid(self) -> Self {
        self.constraint(Constraint::Uuid)
    }

    pub fn date(self) -> Self {
        self.constraint(Constraint::Date)
    }

    pub fn timestamp(self) -> Self {
        self.constraint(Constraint::Timestamp)
    }

    pub fn min(self, n: f64) -> Self {
        self.constraint(Constraint::Min(n))
    }

    pub fn max(self, n: f64) -> Self {
        self.constraint(Constraint::Max(n))
    }

    pub fn min_items(self, n: usize) -> Self {
        self.constraint(Constraint::MinItems(n))
    }

    pub fn each(self, schema: Schema) -> Self {
        self.constraint(Constraint::Each(schema))
    }

    fn constraint(mut self, c: Constraint) -> Self {
        self.constraints.push(c);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Pure structural/semantic check of a raw payload. No side effects.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        self.check_at(value, "", &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                schema: self.name,
                violations,
            })
        }
    }

    /// Check, then deserialize into the typed input DTO.
    pub fn validate<T: DeserializeOwned>(&self, value: &Value) -> Result<T, ValidationError> {
        self.check(value)?;

        serde_json::from_value(value.clone()).map_err(|err| ValidationError {
            schema: self.name,
            violations: vec![Violation {
                field: String::new(),
                constraint: "shape",
                message: format!("payload does not match the expected shape: {err}"),
                received: None,
            }],
        })
    }

    fn check_at(&self, value: &Value, prefix: &str, out: &mut Vec<Violation>) {
        let Some(object) = value.as_object() else {
            out.push(Violation {
                field: prefix.to_string(),
                constraint: "type",
                message: "expected an object".to_string(),
                received: Some(value.clone()),
            });
            return;
        };

        for field in &self.fields {
            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{prefix}.{}", field.name)
            };

            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        out.push(Violation {
                            field: path,
                            constraint: "required",
                            message: "field is required".to_string(),
                            received: None,
                        });
                    }
                }
                Some(value) => {
                    for constraint in &field.constraints {
                        check_constraint(constraint, value, &path, out);
                    }
                }
            }
        }
    }
}

fn check_constraint(constraint: &Constraint, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let failure = |message: String| Violation {
        field: path.to_string(),
        constraint: constraint.kind(),
        message,
        received: (!value.is_object() && !value.is_array()).then(|| value.clone()),
    };

    match constraint {
        Constraint::Kind(kind) => {
            if !kind.matches(value) {
                out.push(failure(format!("expected a {}", kind.name())));
            }
        }

        Constraint::MinLen(n) => {
            if let Some(s) = value.as_str() {
                if s.chars().count() < *n {
                    out.push(failure(format!("must be at least {n} characters")));
                }
            }
        }

        Constraint::MaxLen(n) => {
            if let Some(s) = value.as_str() {
                if s.chars().count() > *n {
                    out.push(failure(format!("must be at most {n} characters")));
                }
            }
        }

        Constraint::OneOf(allowed) => {
            if let Some(s) = value.as_str() {
                if !allowed.contains(&s) {
                    out.push(failure(format!("must be one of {}", allowed.join(", "))));
                }
            }
        }

        Constraint::Email => {
            if let Some(s) = value.as_str() {
                if !looks_like_email(s) {
                    out.push(failure("must be a valid email address".to_string()));
                }
            }
        }

        Constraint::Uuid => {
            if let Some(s) = value.as_str() {
                if Uuid::parse_str(s).is_err() {
                    out.push(failure("must be a UUID".to_string()));
                }
            }
        }

        Constraint::Date => {
            if let Some(s) = value.as_str() {
                if !date_shaped(s) || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
                    out.push(failure("must be a YYYY-MM-DD date".to_string()));
                }
            }
        }

        Constraint::Timestamp => {
            if let Some(s) = value.as_str() {
                if DateTime::parse_from_rfc3339(s).is_err() {
                    out.push(failure("must be an RFC 3339 timestamp".to_string()));
                }
            }
        }

        Constraint::Min(n) => {
            if let Some(v) = value.as_f64() {
                if v < *n {
                    out.push(failure(format!("must be at least {n}")));
                }
            }
        }

        Constraint::Max(n) => {
            if let Some(v) = value.as_f64() {
                if v > *n {
                    out.push(failure(format!("must be at most {n}")));
                }
            }
        }

        Constraint::MinItems(n) => {
            if let Some(items) = value.as_array() {
                if items.len() < *n {
                    out.push(failure(format!("must contain at least {n} item(s)")));
                }
            }
        }

        Constraint::Each(schema) => {
            if let Some(items) = value.as_array() {
                for (i, item) in items.iter().enumerate() {
                    schema.check_at(item, &format!("{path}[{i}]"), out);
                }
            }
        }
    }
}

// chrono parses unpadded components, so the shape is checked separately.
fn date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, host)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !host.contains('@')
        && host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> Schema {
        Schema::new("Person")
            .field(Field::required("name").string().min_len(3))
            .field(Field::optional("age").integer().min(0.0).max(150.0))
    }

    #[test]
    fn violations_carry_the_field_path() {
        let err = person().check(&json!({ "name": "Jo" })).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "name");
        assert_eq!(err.violations[0].constraint, "min_length");
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = person().check(&json!({ "age": 40 })).unwrap_err();
        assert_eq!(err.violations[0].field, "name");
        assert_eq!(err.violations[0].constraint, "required");
    }

    #[test]
    fn optional_field_may_be_absent_or_null() {
        assert!(person().check(&json!({ "name": "Ada" })).is_ok());
        assert!(person()
            .check(&json!({ "name": "Ada", "age": null }))
            .is_ok());
    }

    #[test]
    fn revalidation_is_idempotent() {
        let payload = json!({ "name": "Ada", "age": 36 });
        let schema = person();
        assert!(schema.check(&payload).is_ok());
        assert!(schema.check(&payload).is_ok());
    }

    #[test]
    fn nested_array_paths_are_indexed() {
        let schema = Schema::new("Order").field(
            Field::required("lines")
                .array()
                .each(Schema::new("Line").field(Field::required("sku").string())),
        );

        let err = schema
            .check(&json!({ "lines": [{ "sku": "a" }, {}] }))
            .unwrap_err();
        assert_eq!(err.violations[0].field, "lines[1].sku");
    }

    #[test]
    fn non_object_payload_is_one_violation() {
        let err = person().check(&json!("nope")).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].constraint, "type");
    }

    #[test]
    fn unpadded_date_components_are_rejected() {
        let schema = Schema::new("Day").field(Field::required("day").string().date());

        for day in ["2026-8-3", "2026-08-3", "26-08-03", "2026/08/03"] {
            let err = schema.check(&json!({ "day": day })).unwrap_err();
            assert_eq!(err.violations[0].constraint, "date", "accepted {day}");
        }
        assert!(schema.check(&json!({ "day": "2026-08-03" })).is_ok());
    }

    #[test]
    fn email_host_must_not_contain_an_at_sign() {
        let schema = Schema::new("Mail").field(Field::required("mail").string().email());

        let err = schema.check(&json!({ "mail": "a@@b.c" })).unwrap_err();
        assert_eq!(err.violations[0].constraint, "email");
        assert!(schema.check(&json!({ "mail": "a@b.c" })).is_ok());
    }

    #[test]
    fn semantic_kinds_check_parseability() {
        let schema = Schema::new("Kinds")
            .field(Field::required("id").string().uuid())
            .field(Field::required("day").string().date())
            .field(Field::required("at").string().timestamp())
            .field(Field::required("mail").string().email());

        let err = schema
            .check(&json!({
                "id": "not-a-uuid",
                "day": "2026-02-30",
                "at": "2026-08-30",
                "mail": "nobody",
            }))
            .unwrap_err();

        let kinds: Vec<_> = err.violations.iter().map(|v| v.constraint).collect();
        assert_eq!(kinds, vec!["uuid", "date", "timestamp", "email"]);
    }
}
