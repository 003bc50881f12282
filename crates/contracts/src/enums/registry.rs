//! Enumeration descriptors and the process-wide catalogue
//!
//! An [`Enumeration`] is an ordered list of symbols. The wire code of a symbol
//! is its position in that list, so the symbol <-> code mapping is a bijection
//! onto `[0, N)` by construction. Codes are a contract with the backend:
//! new symbols are only ever appended.

use thiserror::Error;

use super::{
    AwardType, CalculationType, CurrencyType, DealStatus, MetricType, PayoutStatus, PeriodType,
    PlanType, TargetType, WorkflowStatus,
};

/// Numeric wire representation of an enumeration member
pub type Code = u32;

/// Registry lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    #[error("unknown symbol `{symbol}` for enumeration {enumeration}")]
    UnknownSymbol {
        enumeration: &'static str,
        symbol: String,
    },

    #[error("unknown enumeration: {0}")]
    UnknownEnumeration(String),
}

/// Static descriptor of one domain enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumeration {
    name: &'static str,
    symbols: &'static [&'static str],
}

impl Enumeration {
    pub const fn new(name: &'static str, symbols: &'static [&'static str]) -> Self {
        assert!(!symbols.is_empty(), "enumeration must declare at least one symbol");
        Self { name, symbols }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared domain in code order
    pub const fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of a declared symbol (exact, case-sensitive match)
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    /// Wire code of a declared symbol
    pub fn code_of(&self, symbol: &str) -> Result<Code, EnumError> {
        self.index_of(symbol)
            .map(|i| i as Code)
            .ok_or_else(|| EnumError::UnknownSymbol {
                enumeration: self.name,
                symbol: symbol.to_string(),
            })
    }

    /// Symbol for a code, `None` outside `[0, N)`
    pub fn symbol_of(&self, code: i64) -> Option<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.symbols.get(i).copied())
    }

    /// Symbol used when an inbound value cannot be resolved
    pub fn fallback_symbol(&self) -> &'static str {
        self.symbols[0]
    }

    /// Code used when an outbound symbol is not declared: the second member,
    /// or the only one for single-member enumerations.
    pub fn default_code(&self) -> Code {
        if self.symbols.len() > 1 {
            1
        } else {
            0
        }
    }
}

static CATALOGUE: &[&Enumeration] = &[
    &PlanType::ENUMERATION,
    &PeriodType::ENUMERATION,
    &MetricType::ENUMERATION,
    &TargetType::ENUMERATION,
    &CalculationType::ENUMERATION,
    &AwardType::ENUMERATION,
    &CurrencyType::ENUMERATION,
    &DealStatus::ENUMERATION,
    &WorkflowStatus::ENUMERATION,
    &PayoutStatus::ENUMERATION,
];

/// Every enumeration known to the application
pub fn all() -> &'static [&'static Enumeration] {
    CATALOGUE
}

/// Resolve an enumeration by its registry name (e.g. `PlanType`)
pub fn lookup(name: &str) -> Result<&'static Enumeration, EnumError> {
    CATALOGUE
        .iter()
        .copied()
        .find(|e| e.name == name)
        .ok_or_else(|| EnumError::UnknownEnumeration(name.to_string()))
}
