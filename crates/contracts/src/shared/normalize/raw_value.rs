use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;

/// A value as it arrived from a form control or a response body
///
/// Classification happens once, here; the normalizer only dispatches on the
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A number, rounded to the nearest integer
    NumericCode(i64),
    /// A string whose entire content is a base-10 integer
    NumericString(i64),
    /// A number or integer string too large for `i64`, kept as its display
    /// text. Always outside every domain.
    OversizedNumber(String),
    /// Any other string (possibly a declared symbol)
    SymbolicString(String),
    /// null / not provided
    Absent,
    /// Booleans, arrays, objects, non-finite numbers
    Unsupported(String),
}

impl RawValue {
    pub fn from_text(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(n) => Self::NumericString(n),
            Err(_) if is_integer_literal(text) => Self::OversizedNumber(format!("\"{text}\"")),
            Err(_) => Self::SymbolicString(text.to_string()),
        }
    }

    pub fn from_f64(n: f64) -> Self {
        let rounded = n.round();
        if !rounded.is_finite() {
            Self::Unsupported(n.to_string())
        } else if rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
            Self::NumericCode(rounded as i64)
        } else {
            Self::OversizedNumber(n.to_string())
        }
    }

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Unsupported(b.to_string()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::NumericCode(i)
                } else if n.is_u64() {
                    Self::OversizedNumber(n.to_string())
                } else {
                    n.as_f64()
                        .map(Self::from_f64)
                        .unwrap_or_else(|| Self::Unsupported(n.to_string()))
                }
            }
            Value::String(s) => Self::from_text(s),
            Value::Array(_) => Self::Unsupported("array".to_string()),
            Value::Object(_) => Self::Unsupported("object".to_string()),
        }
    }
}

/// Optional sign followed by at least one ASCII digit
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericCode(n) => write!(f, "{n}"),
            Self::NumericString(n) => write!(f, "\"{n}\""),
            Self::SymbolicString(s) => write!(f, "\"{s}\""),
            Self::Absent => f.write_str("null"),
            Self::OversizedNumber(text) | Self::Unsupported(text) => f.write_str(text),
        }
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        Self::NumericCode(n.into())
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::NumericCode(n)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        Self::NumericCode(n.into())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::from_f64(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        Self::from_json(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an enum code, a numeric string or a symbol")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Unsupported(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::NumericCode(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(i64::try_from(v)
            .map(RawValue::NumericCode)
            .unwrap_or_else(|_| RawValue::OversizedNumber(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::from_text(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawValue::Unsupported("array".to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawValue::Unsupported("object".to_string()))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}
