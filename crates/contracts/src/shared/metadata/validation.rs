//! Validation rules for form fields

use super::field_type::FieldKind;

const MSG_REQUIRED: &str = "Campo obligatorio";
const MSG_NUMBER: &str = "Ingrese un número válido";
const MSG_INTEGER: &str = "Ingrese un número entero";
const MSG_RANGE: &str = "Valor fuera de rango";
const MSG_TOO_LONG: &str = "Texto demasiado largo";
const MSG_SELECTION: &str = "Seleccione una opción";

/// Exact `i64` for a whole, finite number inside the `i64` range.
///
/// `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
pub(crate) fn whole_i64(value: f64) -> Option<i64> {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && value >= LOWER && value < UPPER {
        Some(value as i64)
    } else {
        None
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    /// `min` itself is rejected (`value > min`).
    pub exclusive_min: bool,
    pub integer: bool,
    pub max_length: Option<usize>,
    /// Message shown when the value is missing, malformed or out of range.
    /// Overlong text always reports its own message.
    pub message: Option<&'static str>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            exclusive_min: false,
            integer: false,
            max_length: None,
            message: None,
        }
    }

    /// Non-blank value required
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required number strictly greater than zero
    pub const fn positive() -> Self {
        Self {
            required: true,
            min: Some(0.0),
            exclusive_min: true,
            ..Self::none()
        }
    }

    /// Required number greater than or equal to zero
    pub const fn non_negative() -> Self {
        Self {
            required: true,
            min: Some(0.0),
            ..Self::none()
        }
    }

    /// Required whole number greater than or equal to zero
    pub const fn non_negative_integer() -> Self {
        Self {
            integer: true,
            ..Self::non_negative()
        }
    }

    /// A non-zero option must be selected
    pub const fn selection() -> Self {
        Self::required()
    }

    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            message: Some(message),
            ..self
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    fn fail(&self, default: &'static str) -> Result<(), &'static str> {
        Err(self.message.unwrap_or(default))
    }

    /// Validate a raw input value for a field of the given kind.
    ///
    /// Image fields always pass here; whether an image is mandatory is a page
    /// policy checked at form level.
    pub fn check(&self, kind: FieldKind, raw: &str) -> Result<(), &'static str> {
        let value = raw.trim();
        match kind {
            FieldKind::Text | FieldKind::TextArea => {
                if self.required && value.is_empty() {
                    return self.fail(MSG_REQUIRED);
                }
                if let Some(max) = self.max_length {
                    if value.chars().count() > max {
                        return Err(MSG_TOO_LONG);
                    }
                }
                Ok(())
            }
            FieldKind::Money | FieldKind::Integer => {
                if value.is_empty() {
                    return if self.required {
                        self.fail(MSG_REQUIRED)
                    } else {
                        Ok(())
                    };
                }
                let number = match value.parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    _ => return self.fail(MSG_NUMBER),
                };
                if self.integer || kind == FieldKind::Integer {
                    if number.fract() != 0.0 {
                        return self.fail(MSG_INTEGER);
                    }
                    if whole_i64(number).is_none() {
                        return self.fail(MSG_RANGE);
                    }
                }
                if let Some(min) = self.min {
                    let below = if self.exclusive_min {
                        number <= min
                    } else {
                        number < min
                    };
                    if below {
                        return self.fail(MSG_RANGE);
                    }
                }
                Ok(())
            }
            FieldKind::Reference => {
                if value.is_empty() {
                    return if self.required {
                        self.fail(MSG_SELECTION)
                    } else {
                        Ok(())
                    };
                }
                match value.parse::<i64>() {
                    Ok(id) if id > 0 => Ok(()),
                    _ if !self.required && value == "0" => Ok(()),
                    _ => self.fail(MSG_SELECTION),
                }
            }
            FieldKind::Status => match value {
                "0" | "1" => Ok(()),
                _ => self.fail(MSG_SELECTION),
            },
            FieldKind::Image => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_whitespace() {
        let rules = ValidationRules::required().with_message("El nombre es obligatorio");
        assert_eq!(
            rules.check(FieldKind::Text, "   "),
            Err("El nombre es obligatorio")
        );
        assert_eq!(rules.check(FieldKind::Text, ""), Err("El nombre es obligatorio"));
        assert!(rules.check(FieldKind::Text, " Latte ").is_ok());
    }

    #[test]
    fn test_positive_boundaries() {
        let rules = ValidationRules::positive();
        assert!(rules.check(FieldKind::Money, "0.01").is_ok());
        assert!(rules.check(FieldKind::Money, "0").is_err());
        assert!(rules.check(FieldKind::Money, "-3").is_err());
        assert!(rules.check(FieldKind::Money, "").is_err());
        assert!(rules.check(FieldKind::Money, "abc").is_err());
        assert!(rules.check(FieldKind::Money, "NaN").is_err());
    }

    #[test]
    fn test_non_negative_boundaries() {
        let rules = ValidationRules::non_negative();
        assert!(rules.check(FieldKind::Money, "0").is_ok());
        assert!(rules.check(FieldKind::Money, "-0.01").is_err());
        assert!(rules.check(FieldKind::Money, "").is_err());
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let rules = ValidationRules::non_negative_integer();
        assert!(rules.check(FieldKind::Integer, "12").is_ok());
        assert_eq!(rules.check(FieldKind::Integer, "1.5"), Err(MSG_INTEGER));
        assert!(rules.check(FieldKind::Integer, "-1").is_err());
    }

    #[test]
    fn test_selection_requires_non_zero_id() {
        let rules = ValidationRules::selection();
        assert!(rules.check(FieldKind::Reference, "0").is_err());
        assert!(rules.check(FieldKind::Reference, "").is_err());
        assert!(rules.check(FieldKind::Reference, "3").is_ok());
    }

    #[test]
    fn test_status_is_binary() {
        let rules = ValidationRules::none();
        assert!(rules.check(FieldKind::Status, "1").is_ok());
        assert!(rules.check(FieldKind::Status, "0").is_ok());
        assert!(rules.check(FieldKind::Status, "2").is_err());
    }

    #[test]
    fn test_max_length() {
        let rules = ValidationRules::none().with_max_length(3);
        assert!(rules.check(FieldKind::Text, "abc").is_ok());
        assert_eq!(rules.check(FieldKind::Text, "abcd"), Err(MSG_TOO_LONG));
    }

    #[test]
    fn test_max_length_counts_trimmed_text() {
        let rules = ValidationRules::required()
            .with_max_length(5)
            .with_message("El nombre es obligatorio");
        assert!(rules.check(FieldKind::Text, "Latte      ").is_ok());
        assert!(rules.check(FieldKind::Text, "  Mocha  ").is_ok());
        assert_eq!(rules.check(FieldKind::Text, "Capuccino"), Err(MSG_TOO_LONG));
        assert_eq!(rules.check(FieldKind::Text, "  "), Err("El nombre es obligatorio"));
    }

    #[test]
    fn test_integer_outside_i64_range() {
        let rules = ValidationRules::non_negative_integer();
        assert_eq!(rules.check(FieldKind::Integer, "1e30"), Err(MSG_RANGE));
        assert_eq!(rules.check(FieldKind::Integer, "9223372036854775808"), Err(MSG_RANGE));
        assert!(rules.check(FieldKind::Integer, "9007199254740992").is_ok());
    }

    #[test]
    fn test_whole_i64_bounds() {
        assert_eq!(whole_i64(42.0), Some(42));
        assert_eq!(whole_i64(-3.0), Some(-3));
        assert_eq!(whole_i64(i64::MIN as f64), Some(i64::MIN));
        assert_eq!(whole_i64(9_223_372_036_854_775_808.0), None);
        assert_eq!(whole_i64(1e30), None);
        assert_eq!(whole_i64(1.5), None);
        assert_eq!(whole_i64(f64::NAN), None);
    }
}
