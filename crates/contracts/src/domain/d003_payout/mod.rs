pub mod aggregate;

pub use aggregate::{Payout, PayoutId, PAYOUT_SCHEMA};
