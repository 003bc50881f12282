//! Typed wire enums generated from a single ordered symbol list
//!
//! `wire_enum!` declares a fieldless Rust enum together with its
//! [`Enumeration`](super::Enumeration) descriptor. Variant order and symbol
//! order come from the same list, so `variant as Code` is always the code of
//! `variant.as_str()`.
//!
//! Serde: values serialize as their wire code and deserialize from any raw
//! shape (code, numeric string, symbol) through the normalizer. Coerced
//! values are logged with `log::warn!`; `null` means "not set" and yields the
//! first member without a warning.

use super::{Code, Enumeration};
use crate::shared::normalize::{Normalized, RawValue};

/// Common interface of every generated wire enum
pub trait WireEnum: Copy + Sized + 'static {
    const ENUMERATION: Enumeration;

    /// Variants in code order
    fn variants() -> &'static [Self];

    fn code(self) -> Code;

    fn as_str(self) -> &'static str;

    /// Resolve a raw value with the inbound rules, keeping the coercion record
    fn decode(raw: &RawValue) -> Normalized<Self> {
        Self::ENUMERATION
            .resolve(raw)
            .map(|index| Self::variants()[index])
    }

    /// Same as [`WireEnum::decode`], but only logs the coercion
    fn decode_lenient(raw: &RawValue) -> Self {
        let decoded = Self::decode(raw);
        if let Some(coercion) = &decoded.coercion {
            log::warn!("{coercion}; using {}", decoded.value.as_str());
        }
        decoded.value
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ENUMERATION: $crate::enums::Enumeration =
                $crate::enums::Enumeration::new($label, &[$($symbol),+]);

            const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            pub fn all() -> &'static [$name] {
                Self::VARIANTS
            }

            pub fn code(self) -> $crate::enums::Code {
                self as $crate::enums::Code
            }

            pub fn as_str(self) -> &'static str {
                Self::ENUMERATION.symbols()[self as usize]
            }

            pub fn from_code(code: i64) -> Option<Self> {
                usize::try_from(code)
                    .ok()
                    .and_then(|i| Self::VARIANTS.get(i).copied())
            }

            pub fn from_symbol(symbol: &str) -> Option<Self> {
                Self::ENUMERATION.index_of(symbol).map(|i| Self::VARIANTS[i])
            }
        }

        impl $crate::enums::WireEnum for $name {
            const ENUMERATION: $crate::enums::Enumeration = $name::ENUMERATION;

            fn variants() -> &'static [Self] {
                $name::VARIANTS
            }

            fn code(self) -> $crate::enums::Code {
                $name::code(self)
            }

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::VARIANTS[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::enums::EnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_symbol(s).ok_or_else(|| $crate::enums::EnumError::UnknownSymbol {
                    enumeration: $label,
                    symbol: s.to_string(),
                })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <$crate::shared::normalize::RawValue as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                if let $crate::shared::normalize::RawValue::Absent = raw {
                    return Ok(Self::default());
                }
                Ok(<Self as $crate::enums::WireEnum>::decode_lenient(&raw))
            }
        }
    };
}
