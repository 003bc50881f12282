//! Scalar normalization rules for one enumeration

use serde::Serialize;
use thiserror::Error;

use super::RawValue;
use crate::enums::{Code, Enumeration};

/// Why a value had to be replaced by the fallback
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Coercion {
    /// Symbol not declared, or code outside `[0, N)`
    #[error("{enumeration}: {raw} is outside the declared domain")]
    OutOfDomain {
        enumeration: &'static str,
        raw: String,
    },

    /// Neither numeric nor a declared symbol
    #[error("{enumeration}: {raw} is neither a code nor a declared symbol")]
    Unparseable {
        enumeration: &'static str,
        raw: String,
    },
}

/// Result of a normalization: always a usable value, plus the coercion that
/// produced it when the input was not valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub coercion: Option<Coercion>,
}

impl<T> Normalized<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            coercion: None,
        }
    }

    pub fn coerced(value: T, coercion: Coercion) -> Self {
        Self {
            value,
            coercion: Some(coercion),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.coercion.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        Normalized {
            value: f(self.value),
            coercion: self.coercion,
        }
    }

    /// Strict view: the coercion becomes an error
    pub fn into_result(self) -> Result<T, Coercion> {
        match self.coercion {
            None => Ok(self.value),
            Some(coercion) => Err(coercion),
        }
    }
}

impl Enumeration {
    fn out_of_domain(&self, raw: &RawValue) -> Coercion {
        Coercion::OutOfDomain {
            enumeration: self.name(),
            raw: raw.to_string(),
        }
    }

    fn unparseable(&self, raw: &RawValue) -> Coercion {
        Coercion::Unparseable {
            enumeration: self.name(),
            raw: raw.to_string(),
        }
    }

    /// Inbound rule, as a position in the symbol list.
    ///
    /// Numbers and numeric strings are looked up as codes, declared symbols
    /// pass through, everything else resolves to the first member.
    pub fn resolve(&self, raw: &RawValue) -> Normalized<usize> {
        match raw {
            RawValue::NumericCode(n) | RawValue::NumericString(n) => {
                match usize::try_from(*n).ok().filter(|i| *i < self.len()) {
                    Some(i) => Normalized::exact(i),
                    None => Normalized::coerced(0, self.out_of_domain(raw)),
                }
            }
            RawValue::OversizedNumber(_) => Normalized::coerced(0, self.out_of_domain(raw)),
            RawValue::SymbolicString(s) => match self.index_of(s) {
                Some(i) => Normalized::exact(i),
                None => Normalized::coerced(0, self.unparseable(raw)),
            },
            RawValue::Absent | RawValue::Unsupported(_) => {
                Normalized::coerced(0, self.unparseable(raw))
            }
        }
    }

    /// Inbound rule: raw value -> symbol
    pub fn normalize_symbol(&self, raw: &RawValue) -> Normalized<&'static str> {
        let symbols = self.symbols();
        self.resolve(raw).map(|i| symbols[i])
    }

    /// Outbound rule for a UI symbol: declared symbols map to their code,
    /// anything else to [`Enumeration::default_code`].
    pub fn code_for(&self, symbol: &str) -> Normalized<Code> {
        match self.index_of(symbol) {
            Some(i) => Normalized::exact(i as Code),
            None => Normalized::coerced(
                self.default_code(),
                Coercion::OutOfDomain {
                    enumeration: self.name(),
                    raw: format!("\"{symbol}\""),
                },
            ),
        }
    }

    /// Outbound rule for a raw value. Symbols go through [`Enumeration::code_for`];
    /// an in-range code is already in wire form and is kept.
    pub fn encode(&self, raw: &RawValue) -> Normalized<Code> {
        match raw {
            RawValue::SymbolicString(s) => self.code_for(s),
            RawValue::NumericCode(n) | RawValue::NumericString(n) => {
                match u32::try_from(*n).ok().filter(|c| (*c as usize) < self.len()) {
                    Some(code) => Normalized::exact(code),
                    None => Normalized::coerced(self.default_code(), self.out_of_domain(raw)),
                }
            }
            RawValue::OversizedNumber(_) => {
                Normalized::coerced(self.default_code(), self.out_of_domain(raw))
            }
            RawValue::Absent | RawValue::Unsupported(_) => {
                Normalized::coerced(self.default_code(), self.unparseable(raw))
            }
        }
    }

    /// `toSymbol`: total, silent
    pub fn to_symbol(&self, raw: impl Into<RawValue>) -> &'static str {
        self.normalize_symbol(&raw.into()).value
    }

    /// `toCode`: total, silent
    pub fn to_code(&self, symbol: &str) -> Code {
        self.code_for(symbol).value
    }
}
