use serde::{Deserialize, Serialize};

use crate::error::ApiException;

/// Display unit for every estimated price (1 lakh = 100,000).
pub const PRICE_UNIT: &str = "Lakh";

/// A numeric form value as it travels on the wire.
///
/// The form sends raw text; other callers may send JSON numbers. The
/// service coerces either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(serde_json::Number),
    Text(String),
}

impl FormValue {
    pub fn as_f64(&self, field: &str) -> Result<f64, ApiException> {
        let parsed = match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };
        parsed
            .filter(|value| value.is_finite())
            .ok_or_else(|| ApiException::validation(format!("{field} must be a number")))
    }

    /// Integer coercion: JSON numbers truncate, text must be a whole number.
    pub fn as_i64(&self, field: &str) -> Result<i64, ApiException> {
        let parsed = match self {
            Self::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64)),
            Self::Text(text) => text.trim().parse::<i64>().ok(),
        };
        parsed.ok_or_else(|| ApiException::validation(format!("{field} must be an integer")))
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_number_values_coerce_to_float() {
        assert_eq!(FormValue::from(" 1200 ").as_f64("total_sqft").expect("text"), 1200.0);
        let number: FormValue = serde_json::from_str("1250.5").expect("json");
        assert_eq!(number.as_f64("total_sqft").expect("number"), 1250.5);
    }

    #[test]
    fn integer_coercion_truncates_numbers_but_rejects_fractional_text() {
        let number: FormValue = serde_json::from_str("3.7").expect("json");
        assert_eq!(number.as_i64("bhk").expect("number"), 3);
        assert!(FormValue::from("3.5").as_i64("bhk").is_err());
        assert!(FormValue::from("").as_i64("bath").is_err());
    }

    #[test]
    fn untagged_values_deserialize_from_both_shapes() {
        let text: FormValue = serde_json::from_str("\"2\"").expect("text");
        assert_eq!(text, FormValue::Text("2".to_string()));
        let number: FormValue = serde_json::from_str("2").expect("number");
        assert!(matches!(number, FormValue::Number(_)));
    }
}
