// Field-level payload validation
//
// Each entity declares its constraints as a flat list of checks; the
// validator collects every violation so responses carry field-level
// messages rather than failing on the first problem.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

lazy_static! {
    static ref PHONE_RE: Regex =
        Regex::new(r"^\+?[0-9 ().\-]{7,20}$").expect("phone regex is valid");
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid");
}

/// One violated field constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collects constraint violations for one payload
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Non-empty after trimming.
    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, format!("{} is required.", field));
        }
        self
    }

    /// Present at all; used for non-string fields modeled as `Option`.
    pub fn required_some<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.push(field, format!("{} is required.", field));
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, format!("{} cannot exceed {} characters.", field, max));
        }
        self
    }

    /// Phone format; empty values are left to `required`.
    pub fn phone(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() && !PHONE_RE.is_match(value) {
            self.push(field, "Invalid phone number.".to_string());
        }
        self
    }

    pub fn phone_opt(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.phone(field, value);
        }
        self
    }

    /// Email format; empty values are left to `required`.
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.is_empty() && !EMAIL_RE.is_match(value) {
            self.push(field, "Invalid email address.".to_string());
        }
        self
    }

    pub fn email_opt(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.email(field, value);
        }
        self
    }

    pub fn at_least(&mut self, field: &str, value: i32, min: i32) -> &mut Self {
        if value < min {
            self.push(field, format!("{} must be at least {}.", field, min));
        }
        self
    }

    pub fn range(&mut self, field: &str, value: i32, min: i32, max: i32) -> &mut Self {
        if value < min || value > max {
            self.push(
                field,
                format!("{} must be between {} and {}.", field, min, max),
            );
        }
        self
    }

    pub fn positive_decimal(&mut self, field: &str, value: Decimal) -> &mut Self {
        if value <= Decimal::ZERO {
            self.push(field, format!("{} must be greater than 0.", field));
        }
        self
    }

    pub fn decimal_range(
        &mut self,
        field: &str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    ) -> &mut Self {
        if value < min || value > max {
            self.push(
                field,
                format!("{} must be between {} and {}.", field, min, max),
            );
        }
        self
    }

    /// All collected violations, or `Ok` when every check passed.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_required_rejects_empty_and_whitespace() {
        let mut v = Validator::new();
        v.required("firstName", "");
        v.required("lastName", "   ");
        v.required("phone", "+15551234567");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "firstName");
        assert_eq!(errors[1].field, "lastName");
    }

    #[test]
    fn test_max_len_boundary() {
        let mut v = Validator::new();
        v.max_len("status", &"x".repeat(50), 50);
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.max_len("status", &"x".repeat(51), 50);
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_phone_formats() {
        let mut v = Validator::new();
        v.phone("phone", "+15551234567");
        v.phone("phone", "(555) 123-4567");
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.phone("phone", "not-a-phone");
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_phone_leaves_empty_to_required() {
        let mut v = Validator::new();
        v.phone("phone", "");
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_email_formats() {
        let mut v = Validator::new();
        v.email("email", "a@x.com");
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.email("email", "a@@x");
        assert!(v.finish().is_err());
    }

    #[test]
    fn test_positive_decimal_rejects_zero() {
        let mut v = Validator::new();
        v.positive_decimal("amount", Decimal::ZERO);
        let errors = v.finish().unwrap_err();
        assert!(errors[0].message.contains("greater than 0"));
    }

    #[test]
    fn test_range_accepts_bounds() {
        let mut v = Validator::new();
        v.range("capacity", 1, 1, 100);
        v.range("capacity", 100, 1, 100);
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.range("capacity", 0, 1, 100);
        v.range("capacity", 101, 1, 100);
        assert_eq!(v.finish().unwrap_err().len(), 2);
    }

    #[test]
    fn test_required_some() {
        let mut v = Validator::new();
        v.required_some::<i32>("paymentDate", &None);
        assert!(v.finish().is_err());

        let mut v = Validator::new();
        v.required_some("paymentDate", &Some(1));
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_errors_preserve_declaration_order() {
        let mut v = Validator::new();
        v.required("firstName", "");
        v.email("email", "bad");
        v.at_least("quantity", 0, 1);
        let errors = v.finish().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["firstName", "email", "quantity"]);
    }
}
