//! Conversions between raw transport values, UI symbols and wire codes
//!
//! - [`RawValue`]: one classification of whatever arrived (number, numeric
//!   string, symbol, nothing), done once at the boundary.
//! - scalar rules on [`Enumeration`](crate::enums::Enumeration):
//!   `resolve`/`normalize_symbol` for inbound values, `encode`/`code_for`
//!   for outbound ones. All of them are total and return a [`Normalized`]
//!   that records whether the value had to be coerced.
//! - [`PayloadSchema`]: field name -> enumeration table of one payload type,
//!   used to rewrite whole JSON bodies in either [`Direction`].

mod raw_value;
mod rewriter;
mod scalar;
mod schema;

pub use raw_value::RawValue;
pub use rewriter::{Direction, FieldCoercion, RewriteError, Rewritten};
pub use scalar::{Coercion, Normalized};
pub use schema::PayloadSchema;
