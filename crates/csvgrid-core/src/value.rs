use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// A scalar cell value.
///
/// CSV ingestion always produces `Str` values verbatim, preserving the
/// original text (leading zeros, trailing spaces and so on). `Num` exists
/// because the ingestion boundary is a black box: callers may hand the
/// engine rows that already carry typed numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Num(f64),
}

impl Value {
    /// Canonical display string for this value.
    ///
    /// Integral floats print without a trailing `.0` so that the number
    /// `8` and the text `"8"` agree under filter membership.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s),
            Value::Num(n) => Cow::Owned(format_num(*n)),
        }
    }

    /// Numeric reading of this value, inferred per-value at comparison
    /// time. A string is numeric when the whole of it parses as `f64`.
    /// `NaN` is never a numeric reading; a literal `NaN` cell compares as
    /// its text, which keeps the sort comparator a total order.
    pub fn as_num(&self) -> Option<f64> {
        let parsed = match self {
            Value::Num(n) => Some(*n),
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            },
        };
        parsed.filter(|n| !n.is_nan())
    }

    /// True when the canonical display string is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }
}

// Integral values within i64 range render as integers. f64 loses integer
// precision past 2^53, so anything larger falls through to float formatting.
fn format_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(Value::Num(8.0).display(), "8");
        assert_eq!(Value::Num(-3.0).display(), "-3");
        assert_eq!(Value::Num(2.5).display(), "2.5");
    }

    #[test]
    fn strings_display_verbatim() {
        assert_eq!(Value::from("007").display(), "007");
        assert_eq!(Value::from(" NY ").display(), " NY ");
    }

    #[test]
    fn numeric_inference() {
        assert_eq!(Value::from("42").as_num(), Some(42.0));
        assert_eq!(Value::from(" 2.5 ").as_num(), Some(2.5));
        assert_eq!(Value::from("42nd St").as_num(), None);
        assert_eq!(Value::from("").as_num(), None);
        assert_eq!(Value::Num(1.5).as_num(), Some(1.5));
    }

    #[test]
    fn nan_is_not_a_numeric_reading() {
        assert_eq!(Value::from("NaN").as_num(), None);
        assert_eq!(Value::from("nan").as_num(), None);
        assert_eq!(Value::Num(f64::NAN).as_num(), None);
        // Infinities order fine; only NaN is rejected.
        assert_eq!(Value::from("inf").as_num(), Some(f64::INFINITY));
    }

    #[test]
    fn number_and_string_forms_share_a_canonical_form() {
        assert_eq!(Value::Num(8.0).display(), Value::from("8").display());
    }
}
